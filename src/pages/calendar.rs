//! Calendar page: month grid of memories by event date.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::top_bar::TopBar;
use crate::net::types::Memory;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::dates::{MonthCursor, days_in_month, weekday_of_first};

/// Bucket a month's memories by day of month, in day order.
fn memories_by_day(items: &[Memory], cursor: MonthCursor) -> BTreeMap<u32, Vec<Memory>> {
    let mut days: BTreeMap<u32, Vec<Memory>> = BTreeMap::new();
    for memory in items {
        if let Some((year, month, day)) = crate::util::dates::parse_ymd(&memory.event_date) {
            if year == cursor.year && month == cursor.month {
                days.entry(day).or_default().push(memory.clone());
            }
        }
    }
    days
}

/// Month to open on: the bookshelf handoff wins, otherwise today.
fn initial_cursor(ui: &UiState) -> MonthCursor {
    if let Some((year, month)) = ui.calendar_cursor {
        return MonthCursor::new(year, month);
    }
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).unwrap_or(1970);
        MonthCursor::new(year, now.get_month() + 1)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MonthCursor::new(1970, 1)
    }
}

#[component]
pub fn CalendarPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(auth, navigate);

    let cursor = RwSignal::new(initial_cursor(&ui.get_untracked()));
    // The handoff is one-shot; clear it so a later visit opens on today.
    ui.update_untracked(|u| u.calendar_cursor = None);

    let month_items = RwSignal::new(Vec::<Memory>::new());
    let loading = RwSignal::new(false);

    Effect::new(move || {
        let current = cursor.get();
        if auth.get().user.is_none() {
            return;
        }
        loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_memories(Some((current.year, current.month))).await {
                Ok(items) => {
                    // A slow response for a month the user already paged away
                    // from must not clobber the visible grid.
                    if cursor.get_untracked() == current {
                        month_items.set(items);
                        loading.set(false);
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("calendar fetch failed: {e}");
                    loading.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = current;
        }
    });

    let grid = move || {
        let current = cursor.get();
        let days = memories_by_day(&month_items.get(), current);
        let leading = weekday_of_first(current.year, current.month);
        let total = days_in_month(current.year, current.month);

        let mut cells = Vec::new();
        for _ in 0..leading {
            cells.push(view! { <div class="calendar__cell calendar__cell--blank"></div> }.into_any());
        }
        for day in 1..=total {
            let entries = days.get(&day).cloned().unwrap_or_default();
            cells.push(
                view! {
                    <div class="calendar__cell">
                        <span class="calendar__day">{day}</span>
                        {entries
                            .into_iter()
                            .map(|memory| {
                                let href = format!("/memory/{}", memory.id);
                                view! {
                                    <a class="calendar__entry" href=href>
                                        {memory.title}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any(),
            );
        }
        cells
    };

    view! {
        <div class="calendar-page">
            <TopBar heading="Calendar"/>
            <div class="calendar__controls">
                <button class="btn" on:click=move |_| cursor.update(|c| *c = c.prev())>
                    "‹"
                </button>
                <span class="calendar__label">{move || cursor.get().label()}</span>
                <button class="btn" on:click=move |_| cursor.update(|c| *c = c.next())>
                    "›"
                </button>
            </div>
            <Show when=move || loading.get()>
                <p class="calendar__loading">"Loading month..."</p>
            </Show>
            <div class="calendar__weekdays">
                <span>"Sun"</span>
                <span>"Mon"</span>
                <span>"Tue"</span>
                <span>"Wed"</span>
                <span>"Thu"</span>
                <span>"Fri"</span>
                <span>"Sat"</span>
            </div>
            <div class="calendar__grid">{grid}</div>
        </div>
    }
}
