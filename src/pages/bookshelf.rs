//! Bookshelf page: memories shelved into month "books".
//!
//! Each month with at least one memory becomes a book spine; opening a book
//! hands the month to the calendar via `UiState` and navigates there.

#[cfg(test)]
#[path = "bookshelf_test.rs"]
mod bookshelf_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::top_bar::TopBar;
use crate::net::types::Memory;
use crate::state::auth::AuthState;
use crate::state::memories::MemoriesState;
use crate::state::ui::UiState;
use crate::util::dates::MONTH_NAMES;

/// One spine on the shelf: a month and how many memories it holds.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Book {
    year: i32,
    month: u32,
    count: usize,
}

impl Book {
    fn label(&self) -> String {
        let name = MONTH_NAMES.get(self.month as usize - 1).copied().unwrap_or("?");
        format!("{name} {}", self.year)
    }
}

/// Group memories into month books, newest month first. Memories with
/// unparseable dates are left off the shelf.
fn shelve(items: &[Memory]) -> Vec<Book> {
    let mut books: Vec<Book> = Vec::new();
    for memory in items {
        let Some((year, month, _)) = crate::util::dates::parse_ymd(&memory.event_date) else {
            continue;
        };
        if let Some(book) = books.iter_mut().find(|b| b.year == year && b.month == month) {
            book.count += 1;
        } else {
            books.push(Book { year, month, count: 1 });
        }
    }
    books.sort_by(|a, b| (b.year, b.month).cmp(&(a.year, a.month)));
    books
}

#[component]
pub fn BookshelfPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let memories = expect_context::<RwSignal<MemoriesState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(auth, navigate.clone());

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

    let open_book = Callback::new(move |(year, month): (i32, u32)| {
        ui.update(|u| u.calendar_cursor = Some((year, month)));
        navigate("/calendar", NavigateOptions::default());
    });

    view! {
        <div class="bookshelf-page">
            <TopBar heading="Bookshelf"/>
            <Show
                when=move || !memories.get().loading
                fallback=move || view! { <p>"Loading shelf..."</p> }
            >
                <Show
                    when=move || !memories.get().items.is_empty()
                    fallback=move || view! { <p class="bookshelf__empty">"The shelf is empty."</p> }
                >
                    <div class="bookshelf__row">
                        {move || {
                            shelve(&memories.get().items)
                                .into_iter()
                                .map(|book| {
                                    let label = book.label();
                                    view! {
                                        <button
                                            class="bookshelf__book"
                                            on:click=move |_| open_book.run((book.year, book.month))
                                        >
                                            <span class="bookshelf__book-label">{label}</span>
                                            <span class="bookshelf__book-count">
                                                {format!("{} memories", book.count)}
                                            </span>
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
