//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome and list items while reading shared state from
//! Leptos context providers; route-scoped orchestration stays in `pages`.

pub mod confirm_dialog;
pub mod member_badge;
pub mod memory_card;
pub mod top_bar;
