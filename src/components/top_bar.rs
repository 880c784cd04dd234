//! Top navigation bar shared by authenticated pages.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Header with section links, dark-mode toggle, identity, and logout.
#[component]
pub fn TopBar(#[prop(optional)] heading: Option<&'static str>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let nickname = move || {
        auth.get()
            .user
            .map(|u| u.nickname)
            .unwrap_or_else(|| "…".to_owned())
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                crate::util::session::clear_token();
                auth.update(|a| {
                    a.user = None;
                    a.fetched_at_ms = None;
                });
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <header class="top-bar">
            <a class="top-bar__brand" href="/home">"Hearthbook"</a>
            <span class="top-bar__heading">{heading.unwrap_or_default()}</span>
            <nav class="top-bar__nav">
                <a href="/home">"Feed"</a>
                <a href="/calendar">"Calendar"</a>
                <a href="/bookshelf">"Bookshelf"</a>
                <a href="/family">"Family"</a>
                <a href="/diary">"Diary"</a>
            </nav>
            <span class="top-bar__spacer"></span>
            <button
                class="btn top-bar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
            <span class="top-bar__self">{nickname}</span>
            <button class="btn top-bar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
