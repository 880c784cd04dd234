//! Card component for memory list items on the home feed.

use leptos::prelude::*;

use crate::net::types::Memory;

/// A clickable card summarizing one memory.
#[component]
pub fn MemoryCard(memory: Memory) -> impl IntoView {
    let href = format!("/memory/{}", memory.id);
    let cover = memory.image_urls.first().cloned();

    view! {
        <a class="memory-card" href=href>
            {cover.map(|url| view! { <img class="memory-card__cover" src=url alt=""/> })}
            <span class="memory-card__title">{memory.title}</span>
            <span class="memory-card__date">{memory.event_date}</span>
            <span class="memory-card__counts">
                {format!("♥ {}", memory.like_count)}
                " · "
                {format!("💬 {}", memory.comment_count)}
            </span>
        </a>
    }
}
