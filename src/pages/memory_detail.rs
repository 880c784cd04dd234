//! Memory detail page: body, images, participants, comments, likes, and
//! the photo-to-video generation flow.

#[cfg(test)]
#[path = "memory_detail_test.rs"]
mod memory_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::member_badge::MemberBadge;
use crate::components::top_bar::TopBar;
use crate::net::types::MediaJob;
use crate::state::auth::AuthState;
use crate::state::family::FamilyState;
use crate::state::memories::MemoriesState;
use crate::state::memory_detail::MemoryDetailState;

/// Render a memory body (markdown) to HTML.
fn render_markdown(body: &str) -> String {
    let parser = pulldown_cmark::Parser::new(body);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

/// Trim and bound a comment before submission.
fn validate_comment_input(body: &str) -> Result<String, &'static str> {
    let body = body.trim();
    if body.is_empty() {
        return Err("Write a comment first.");
    }
    if body.chars().count() > 500 {
        return Err("Comments are limited to 500 characters.");
    }
    Ok(body.to_owned())
}

#[component]
pub fn MemoryDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let family = expect_context::<RwSignal<FamilyState>>();
    let memories = expect_context::<RwSignal<MemoriesState>>();
    let detail = expect_context::<RwSignal<MemoryDetailState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(auth, navigate.clone());

    let memory_id = move || params.with(|p| p.get("id")).unwrap_or_default();

    // Fetch memory + comments whenever the route id changes.
    let loaded_id = RwSignal::new(None::<String>);
    Effect::new(move || {
        let id = memory_id();
        if id.is_empty() || loaded_id.get().as_deref() == Some(id.as_str()) {
            return;
        }
        loaded_id.set(Some(id.clone()));
        detail.update(|s| {
            *s = MemoryDetailState { loading: true, ..MemoryDetailState::default() };
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_memory(&id).await;
            let comments = crate::net::api::fetch_comments(&id).await;
            detail.update(|s| {
                s.loading = false;
                match fetched {
                    Ok(memory) => s.memory = Some(memory),
                    Err(e) => s.error = Some(e.to_string()),
                }
                if let Ok(list) = comments {
                    s.comments = list;
                }
            });
        });
    });

    let comment_draft = RwSignal::new(String::new());
    let comment_info = RwSignal::new(String::new());
    let show_delete = RwSignal::new(false);
    let animation_job = RwSignal::new(None::<MediaJob>);
    let animation_busy = RwSignal::new(false);

    let on_like = move |_| {
        let Some(memory) = detail.get_untracked().memory else {
            return;
        };
        let next = !memory.liked_by_me;

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::net::api::set_memory_liked(&memory.id, next).await.is_ok() {
                detail.update(|s| s.set_liked(next));
                if let Some(updated) = detail.get_untracked().memory {
                    memories.update(|s| s.upsert(updated));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (next, memories);
        }
    };

    let on_comment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if detail.get().comment_pending {
            return;
        }
        let body = match validate_comment_input(&comment_draft.get()) {
            Ok(body) => body,
            Err(message) => {
                comment_info.set(message.to_owned());
                return;
            }
        };
        comment_info.set(String::new());
        detail.update(|s| s.comment_pending = true);
        let id = memory_id();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_comment(&id, &body).await {
                Ok(comment) => {
                    detail.update(|s| {
                        s.push_comment(comment);
                        s.comment_pending = false;
                    });
                    comment_draft.set(String::new());
                }
                Err(e) => {
                    detail.update(|s| s.comment_pending = false);
                    comment_info.set(format!("Comment failed: {e}"));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, body);
        }
    };

    let on_delete_cancel = Callback::new(move |()| show_delete.set(false));
    let navigate_after_delete = navigate.clone();
    let on_delete_confirm = Callback::new(move |()| {
        show_delete.set(false);
        let id = memory_id();

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_after_delete.clone();
            leptos::task::spawn_local(async move {
                if crate::net::api::delete_memory(&id).await.is_ok() {
                    memories.update(|s| s.remove(&id));
                    navigate("/home", leptos_router::NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, &navigate_after_delete);
        }
    });

    // Photo-to-video: request a job for an image, then poll until it
    // settles. The alive flag stops the poll when the page unmounts.
    #[cfg(feature = "hydrate")]
    let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let poll_alive = poll_alive.clone();
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_animate = Callback::new(move |image_url: String| {
        if animation_busy.get_untracked() {
            return;
        }
        animation_busy.set(true);
        animation_job.set(None);
        let id = memory_id();

        #[cfg(feature = "hydrate")]
        {
            let alive = poll_alive.clone();
            leptos::task::spawn_local(async move {
                let job = match crate::net::api::request_photo_animation(&id, &image_url).await {
                    Ok(job) => job,
                    Err(e) => {
                        leptos::logging::warn!("animation request failed: {e}");
                        animation_busy.set(false);
                        return;
                    }
                };
                animation_job.set(Some(job.clone()));

                let mut current = job;
                while !current.status.is_settled() {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                    if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                        break;
                    }
                    match crate::net::api::fetch_media_job(&current.id).await {
                        Ok(job) => {
                            animation_job.set(Some(job.clone()));
                            current = job;
                        }
                        Err(e) => {
                            leptos::logging::warn!("animation poll failed: {e}");
                            break;
                        }
                    }
                }
                animation_busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, image_url);
        }
    });

    let participants = move || {
        let state = detail.get();
        let roster = family.get();
        state
            .memory
            .map(|m| m.participant_ids)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|id| roster.members.iter().find(|m| m.id == id).cloned())
            .collect::<Vec<_>>()
    };

    view! {
        <div class="memory-page">
            <TopBar heading="Memory"/>
            <Show when=move || detail.get().error.is_some()>
                <p class="memory-page__error">{move || detail.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || detail.get().memory.is_some()
                fallback=move || view! { <p>"Loading memory..."</p> }
            >
                {move || detail.get().memory.map(|memory| {
                    let liked = memory.liked_by_me;
                    let body_html = render_markdown(&memory.body);
                    view! {
                        <article class="memory">
                            <h1 class="memory__title">{memory.title.clone()}</h1>
                            <p class="memory__date">{memory.event_date.clone()}</p>
                            <div class="memory__body" inner_html=body_html></div>
                            <div class="memory__images">
                                {memory
                                    .image_urls
                                    .iter()
                                    .map(|url| {
                                        let url_for_job = url.clone();
                                        view! {
                                            <figure class="memory__image">
                                                <img src=url.clone() alt=""/>
                                                <button
                                                    class="btn memory__animate"
                                                    disabled=move || animation_busy.get()
                                                    on:click=move |_| on_animate.run(url_for_job.clone())
                                                >
                                                    "Animate"
                                                </button>
                                            </figure>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                            <div class="memory__participants">
                                {move || {
                                    participants()
                                        .into_iter()
                                        .map(|member| view! { <MemberBadge member=member/> })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                            <div class="memory__actions">
                                <button class="btn memory__like" on:click=on_like>
                                    {if liked { "♥" } else { "♡" }}
                                    " "
                                    {memory.like_count}
                                </button>
                                <button class="btn btn--danger" on:click=move |_| show_delete.set(true)>
                                    "Delete"
                                </button>
                            </div>
                        </article>
                    }
                })}
            </Show>

            <Show when=move || animation_job.get().is_some()>
                <div class="memory__animation">
                    {move || {
                        animation_job.get().map(|job| match (job.status, job.result_url) {
                            (crate::net::types::JobStatus::Done, Some(url)) => view! {
                                <video class="memory__video" src=url controls=true></video>
                            }
                            .into_any(),
                            (crate::net::types::JobStatus::Failed, _) => view! {
                                <p class="memory__animation-status">
                                    {job.error.unwrap_or_else(|| "Animation failed.".to_owned())}
                                </p>
                            }
                            .into_any(),
                            _ => view! {
                                <p class="memory__animation-status">"Animating photo..."</p>
                            }
                            .into_any(),
                        })
                    }}
                </div>
            </Show>

            <section class="comments">
                <h2>"Comments"</h2>
                <ul class="comments__list">
                    {move || {
                        detail
                            .get()
                            .comments
                            .into_iter()
                            .map(|comment| {
                                view! {
                                    <li class="comments__item">
                                        <span class="comments__author">{comment.author_nickname}</span>
                                        <span class="comments__body">{comment.body}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <form class="comments__form" on:submit=on_comment>
                    <input
                        class="comments__input"
                        type="text"
                        placeholder="Say something kind..."
                        prop:value=move || comment_draft.get()
                        on:input=move |ev| comment_draft.set(event_target_value(&ev))
                    />
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || detail.get().comment_pending
                    >
                        "Post"
                    </button>
                </form>
                <Show when=move || !comment_info.get().is_empty()>
                    <p class="comments__info">{move || comment_info.get()}</p>
                </Show>
            </section>

            <Show when=move || show_delete.get()>
                <ConfirmDialog
                    title="Delete Memory"
                    message="This will permanently delete this memory, its images, and its comments."
                    confirm_label="Delete"
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </div>
    }
}
