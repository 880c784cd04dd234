//! Home page: the family memory feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route the bootstrap flow navigates to.
//! It loads the feed once the signed-in user is known and hands off to the
//! detail and form pages.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::memory_card::MemoryCard;
use crate::components::top_bar::TopBar;
use crate::state::auth::AuthState;
use crate::state::memories::MemoriesState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let memories = expect_context::<RwSignal<MemoriesState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(auth, navigate);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || auth.get().user.is_none() {
            return;
        }
        requested.set(true);
        memories.update(|s| s.loading = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_memories(None).await {
                Ok(items) => memories.update(|s| {
                    s.items = items;
                    s.loading = false;
                    s.error = None;
                }),
                Err(e) => memories.update(|s| {
                    s.loading = false;
                    s.error = Some(e.to_string());
                }),
            }
        });
    });

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="home-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="home-page">
                <TopBar heading="Feed"/>
                <div class="home-page__actions">
                    <a class="btn btn--primary" href="/memories/new">"+ New Memory"</a>
                </div>
                <Show when=move || memories.get().error.is_some()>
                    <p class="home-page__error">
                        {move || memories.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <Show
                    when=move || !memories.get().loading
                    fallback=move || view! { <p>"Loading memories..."</p> }
                >
                    <Show
                        when=move || !memories.get().items.is_empty()
                        fallback=move || {
                            view! {
                                <p class="home-page__empty">
                                    "No memories yet. Post the first one!"
                                </p>
                            }
                        }
                    >
                        <div class="home-page__cards">
                            {move || {
                                memories
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|memory| view! { <MemoryCard memory=memory/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}
