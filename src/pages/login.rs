//! Login page: email + password sign-in.
//!
//! Renders the reason code the bootstrap flow appended to the route (e.g.
//! `?error=token-invalid`) as a human message, so a failed session never
//! strands the user without context.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

/// Trim and require both credential fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Human message for a bootstrap failure reason code.
fn message_for_reason(code: &str) -> Option<&'static str> {
    match code {
        "no-token" => Some("Please sign in."),
        "token-invalid" => Some("Your session has expired. Please sign in again."),
        "user-not-found" => Some("That account no longer exists. Please sign in again."),
        "network-error" => Some("We couldn't reach the server. Check your connection and sign in."),
        "validation-failed" => Some("Something went wrong while checking your session. Please sign in."),
        "family-fetch-error" => Some("We couldn't load your family. Please sign in again."),
        "timeout" => Some("The server took too long to respond. Please sign in again."),
        _ => None,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let query = use_query_map();
    let reason_message = move || {
        query
            .with(|q| q.get("error"))
            .as_deref()
            .and_then(message_for_reason)
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(response) => {
                    crate::util::session::save_token(&response.token);
                    // Full reload: the entry bootstrap revalidates the fresh
                    // token and routes to home or family setup.
                    let target = if response.user.family_id.is_some() {
                        "/home"
                    } else {
                        "/family-setup"
                    };
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(target);
                    }
                }
                Err(e) => {
                    info.set(format!("Sign-in failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Hearthbook"</h1>
                <p class="login-card__subtitle">"Family memories, kept together"</p>
                <Show when=move || reason_message().is_some()>
                    <p class="login-message login-message--reason">
                        {move || reason_message().unwrap_or_default()}
                    </p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
