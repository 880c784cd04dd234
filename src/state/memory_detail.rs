//! Detail view-model for a single memory with its comments.

#[cfg(test)]
#[path = "memory_detail_test.rs"]
mod memory_detail_test;

use crate::net::types::{Comment, Memory};

/// Shared detail state for the memory page.
#[derive(Clone, Debug, Default)]
pub struct MemoryDetailState {
    pub memory: Option<Memory>,
    pub comments: Vec<Comment>,
    pub loading: bool,
    /// True while a comment submission is outstanding.
    pub comment_pending: bool,
    pub error: Option<String>,
}

impl MemoryDetailState {
    /// Apply a like toggle locally after the server accepted it.
    pub fn set_liked(&mut self, liked: bool) {
        if let Some(memory) = self.memory.as_mut() {
            if memory.liked_by_me == liked {
                return;
            }
            memory.liked_by_me = liked;
            memory.like_count += if liked { 1 } else { -1 };
        }
    }

    /// Append a newly created comment and keep the count in step.
    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
        if let Some(memory) = self.memory.as_mut() {
            memory.comment_count += 1;
        }
    }
}
