//! Family setup page: create a family or join one with an invite code.
//!
//! The bootstrap flow lands here when a signed-in user has no family yet
//! (`?info=no-family`).

#[cfg(test)]
#[path = "family_setup_test.rs"]
mod family_setup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::types::Family;
use crate::state::auth::AuthState;
use crate::state::family::FamilyState;

/// Invite codes are six characters, entered case-insensitively.
fn normalize_invite_code(raw: &str) -> Result<String, &'static str> {
    let code = raw.trim().to_ascii_uppercase();
    if code.chars().count() != 6 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err("Enter the 6-character invite code.");
    }
    Ok(code)
}

/// Require a non-empty family name.
fn validate_family_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Give your family a name.");
    }
    Ok(name.to_owned())
}

#[component]
pub fn FamilySetupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let family = expect_context::<RwSignal<FamilyState>>();
    let query = use_query_map();

    let name = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let arrived_without_family = move || query.with(|q| q.get("info")).as_deref() == Some("no-family");

    let settle = move |joined: Family| {
        family.update(|f| {
            f.family = Some(joined.clone());
            f.error = None;
        });
        auth.update(|a| {
            if let Some(user) = a.user.as_mut() {
                user.family_id = Some(joined.id.clone());
            }
        });
        // Reload through the entry bootstrap so the roster is fetched the
        // same way every signed-in session gets it.
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/home");
        }
    };

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let family_name = match validate_family_name(&name.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating your family...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_family(&family_name).await {
                Ok(created) => settle(created),
                Err(e) => {
                    info.set(format!("Create failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (family_name, &settle);
        }
    };

    let on_join = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let invite = match normalize_invite_code(&code.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Joining...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::join_family(&invite).await {
                Ok(joined) => settle(joined),
                Err(e) => {
                    info.set(format!("Join failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (invite, &settle);
        }
    };

    view! {
        <div class="setup-page">
            <div class="setup-card">
                <h1>"Set up your family"</h1>
                <Show when=arrived_without_family>
                    <p class="setup-card__hint">
                        "You're signed in, but not part of a family yet."
                    </p>
                </Show>
                <form class="setup-form" on:submit=on_create>
                    <label class="setup-form__label">
                        "Family name"
                        <input
                            class="setup-form__input"
                            type="text"
                            placeholder="The Kims"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Create Family"
                    </button>
                </form>
                <div class="setup-card__divider"></div>
                <p class="setup-card__subtitle">"Or join with a code"</p>
                <form class="setup-form" on:submit=on_join>
                    <input
                        class="setup-form__input setup-form__input--code"
                        type="text"
                        maxlength="6"
                        placeholder="e.g. ABC123"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev).to_ascii_uppercase())
                    />
                    <button class="btn" type="submit" disabled=move || busy.get()>
                        "Join Family"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="setup-card__message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
