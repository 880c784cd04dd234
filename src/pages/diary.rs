//! Picture-diary page: pick a memory and generate an illustrated diary page
//! for it, polling the media job until it settles.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::top_bar::TopBar;
use crate::net::types::{JobStatus, MediaJob};
use crate::state::auth::AuthState;
use crate::state::memories::MemoriesState;

#[component]
pub fn DiaryPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let memories = expect_context::<RwSignal<MemoriesState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(auth, navigate);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || auth.get().user.is_none() {
            return;
        }
        if !memories.get().items.is_empty() {
            requested.set(true);
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
                }),
                Err(e) => memories.update(|s| {
                    s.loading = false;
                    s.error = Some(e.to_string());
                }),
            }
        });
    });

    let selected = RwSignal::new(String::new());
    let job = RwSignal::new(None::<MediaJob>);
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let poll_alive = poll_alive.clone();
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let memory_id = selected.get();
        if memory_id.is_empty() {
            info.set("Pick a memory first.".to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());
        job.set(None);

        #[cfg(feature = "hydrate")]
        {
            let alive = poll_alive.clone();
            leptos::task::spawn_local(async move {
                let started = match crate::net::api::request_picture_diary(&memory_id).await {
                    Ok(started) => started,
                    Err(e) => {
                        info.set(format!("Diary request failed: {e}"));
                        busy.set(false);
                        return;
                    }
                };
                job.set(Some(started.clone()));

                let mut current = started;
                while !current.status.is_settled() {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                    if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                        break;
                    }
                    match crate::net::api::fetch_media_job(&current.id).await {
                        Ok(polled) => {
                            job.set(Some(polled.clone()));
                            current = polled;
                        }
                        Err(e) => {
                            info.set(format!("Diary poll failed: {e}"));
                            break;
                        }
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = memory_id;
        }
    };

    view! {
        <div class="diary-page">
            <TopBar heading="Picture Diary"/>
            <form class="diary-form" on:submit=on_generate>
                <label class="diary-form__label">
                    "Memory"
                    <select
                        class="diary-form__select"
                        on:change=move |ev| selected.set(event_target_value(&ev))
                    >
                        <option value="">"Choose a memory..."</option>
                        {move || {
                            memories
                                .get()
                                .items
                                .into_iter()
                                .map(|memory| {
                                    view! {
                                        <option value=memory.id.clone()>
                                            {format!("{} ({})", memory.title, memory.event_date)}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Generate Diary Page"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="diary-page__info">{move || info.get()}</p>
            </Show>
            <Show when=move || job.get().is_some()>
                <div class="diary-page__result">
                    {move || {
                        job.get().map(|current| match (current.status, current.result_url) {
                            (JobStatus::Done, Some(url)) => view! {
                                <figure class="diary-page__figure">
                                    <img class="diary-page__image" src=url alt="Picture diary"/>
                                    <figcaption>
                                        {current.caption.unwrap_or_default()}
                                    </figcaption>
                                </figure>
                            }
                            .into_any(),
                            (JobStatus::Failed, _) => view! {
                                <p class="diary-page__status">
                                    {current.error.unwrap_or_else(|| "Generation failed.".to_owned())}
                                </p>
                            }
                            .into_any(),
                            _ => view! {
                                <p class="diary-page__status">"Painting your diary page..."</p>
                            }
                            .into_any(),
                        })
                    }}
                </div>
            </Show>
        </div>
    }
}
