//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, submission, poll
//! loops) and delegates rendering details to `components`.

pub mod bookshelf;
pub mod calendar;
pub mod diary;
pub mod family_setup;
pub mod family_tree;
pub mod home;
pub mod login;
pub mod memory_detail;
pub mod memory_new;
