//! List view-model for the memory feed, calendar, and bookshelf.

#[cfg(test)]
#[path = "memories_test.rs"]
mod memories_test;

use crate::net::types::Memory;

/// Shared memory-list state backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct MemoriesState {
    pub items: Vec<Memory>,
    pub loading: bool,
    pub error: Option<String>,
    /// Set after a successful create so the form page can navigate to the
    /// new memory exactly once.
    pub created_memory_id: Option<String>,
}

impl MemoriesState {
    /// Insert or replace a memory by id, keeping newest-first order for
    /// fresh inserts.
    pub fn upsert(&mut self, memory: Memory) {
        if let Some(existing) = self.items.iter_mut().find(|m| m.id == memory.id) {
            *existing = memory;
        } else {
            self.items.insert(0, memory);
        }
    }

    pub fn remove(&mut self, memory_id: &str) {
        self.items.retain(|m| m.id != memory_id);
    }
}
