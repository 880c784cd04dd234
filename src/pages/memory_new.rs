//! New-memory form page with localStorage draft persistence.
//!
//! The draft (title, body, date, images, participants) is saved on every
//! edit and restored on mount, so an accidental navigation never loses a
//! half-written memory. Submitting clears the draft.

#[cfg(test)]
#[path = "memory_new_test.rs"]
mod memory_new_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::top_bar::TopBar;
use crate::net::types::NewMemory;
use crate::state::auth::AuthState;
use crate::state::family::FamilyState;
use crate::state::memories::MemoriesState;

const DRAFT_KEY: &str = "hearthbook_memory_draft";

/// Assemble and validate the form fields into a create payload.
fn build_memory_input(
    title: &str,
    body: &str,
    event_date: &str,
    image_urls: Vec<String>,
    participant_ids: Vec<String>,
) -> Result<NewMemory, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Give the memory a title.");
    }
    let event_date = event_date.trim();
    if crate::util::dates::parse_ymd(event_date).is_none() {
        return Err("Pick a valid date.");
    }
    let image_urls: Vec<String> = image_urls
        .into_iter()
        .map(|url| url.trim().to_owned())
        .filter(|url| !url.is_empty())
        .collect();
    Ok(NewMemory {
        title: title.to_owned(),
        body: body.trim().to_owned(),
        event_date: event_date.to_owned(),
        image_urls,
        participant_ids,
    })
}

#[component]
pub fn MemoryNewPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let family = expect_context::<RwSignal<FamilyState>>();
    let memories = expect_context::<RwSignal<MemoriesState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(auth, navigate.clone());

    let title = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let event_date = RwSignal::new(String::new());
    // Image rows keep a stable key per input so edits don't reorder focus.
    let image_rows = RwSignal::new(Vec::<(String, String)>::new());
    let participant_ids = RwSignal::new(Vec::<String>::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Restore a previous draft once, then persist every edit.
    let restored = RwSignal::new(false);
    Effect::new(move || {
        if restored.get() {
            return;
        }
        restored.set(true);
        if let Some(draft) = crate::util::storage::read_json::<NewMemory>(DRAFT_KEY) {
            title.set(draft.title);
            body.set(draft.body);
            event_date.set(draft.event_date);
            image_rows.set(
                draft
                    .image_urls
                    .into_iter()
                    .map(|url| (uuid::Uuid::new_v4().to_string(), url))
                    .collect(),
            );
            participant_ids.set(draft.participant_ids);
        }
    });

    Effect::new(move || {
        let draft = NewMemory {
            title: title.get(),
            body: body.get(),
            event_date: event_date.get(),
            image_urls: image_rows.get().into_iter().map(|(_, url)| url).collect(),
            participant_ids: participant_ids.get(),
        };
        if restored.get_untracked() {
            crate::util::storage::write_json(DRAFT_KEY, &draft);
        }
    });

    let on_add_image = move |_| {
        image_rows.update(|rows| rows.push((uuid::Uuid::new_v4().to_string(), String::new())));
    };

    let toggle_participant = move |member_id: String| {
        participant_ids.update(|ids| {
            if let Some(index) = ids.iter().position(|id| *id == member_id) {
                ids.remove(index);
            } else {
                ids.push(member_id);
            }
        });
    };

    let navigate_after_create = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match build_memory_input(
            &title.get(),
            &body.get(),
            &event_date.get(),
            image_rows.get().into_iter().map(|(_, url)| url).collect(),
            participant_ids.get(),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Posting...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_after_create.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_memory(&payload).await {
                    Ok(memory) => {
                        crate::util::storage::remove_key(DRAFT_KEY);
                        let id = memory.id.clone();
                        memories.update(|s| {
                            s.upsert(memory);
                            s.created_memory_id = Some(id.clone());
                        });
                        navigate(&format!("/memory/{id}"), leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Posting failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, &navigate_after_create, memories);
        }
    };

    view! {
        <div class="memory-form-page">
            <TopBar heading="New Memory"/>
            <form class="memory-form" on:submit=on_submit>
                <label class="memory-form__label">
                    "Title"
                    <input
                        class="memory-form__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="memory-form__label">
                    "When"
                    <input
                        class="memory-form__input"
                        type="date"
                        prop:value=move || event_date.get()
                        on:input=move |ev| event_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="memory-form__label">
                    "Story"
                    <textarea
                        class="memory-form__textarea"
                        prop:value=move || body.get()
                        on:input=move |ev| body.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <fieldset class="memory-form__images">
                    <legend>"Images"</legend>
                    {move || {
                        image_rows
                            .get()
                            .into_iter()
                            .map(|(key, url)| {
                                let row_key = key.clone();
                                view! {
                                    <input
                                        class="memory-form__input"
                                        type="url"
                                        placeholder="https://..."
                                        prop:value=url
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            image_rows.update(|rows| {
                                                if let Some(row) =
                                                    rows.iter_mut().find(|(k, _)| *k == row_key)
                                                {
                                                    row.1 = value.clone();
                                                }
                                            });
                                        }
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <button class="btn" type="button" on:click=on_add_image>
                        "+ Add image"
                    </button>
                </fieldset>

                <fieldset class="memory-form__participants">
                    <legend>"Who was there?"</legend>
                    {move || {
                        family
                            .get()
                            .members
                            .into_iter()
                            .map(|member| {
                                let member_id = member.id.clone();
                                let checked_id = member.id.clone();
                                view! {
                                    <label class="memory-form__participant">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || {
                                                participant_ids.get().contains(&checked_id)
                                            }
                                            on:change=move |_| toggle_participant(member_id.clone())
                                        />
                                        {member.nickname}
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </fieldset>

                <div class="memory-form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Post Memory"
                    </button>
                </div>
                <Show when=move || !info.get().is_empty()>
                    <p class="memory-form__info">{move || info.get()}</p>
                </Show>
            </form>
        </div>
    }
}
