//! Family-group state: the family record and its member roster.

#[cfg(test)]
#[path = "family_test.rs"]
mod family_test;

use crate::net::types::{Family, FamilyMember};

/// Shared family state written by bootstrap and the setup/tree pages.
#[derive(Clone, Debug, Default)]
pub struct FamilyState {
    pub family: Option<Family>,
    pub members: Vec<FamilyMember>,
    pub loading: bool,
    pub error: Option<String>,
    /// When `members` was fetched, for the freshness window.
    pub fetched_at_ms: Option<f64>,
}

impl FamilyState {
    /// Whether the cached roster is recent enough to reuse without a fetch.
    pub fn is_fresh(&self, now_ms: f64) -> bool {
        self.fetched_at_ms.is_some() && super::is_fresh(self.fetched_at_ms, now_ms)
    }

    /// Nickname for a member id, for participant chips and comments.
    pub fn nickname_of(&self, member_id: &str) -> Option<&str> {
        self.members
            .iter()
            .find(|m| m.id == member_id)
            .map(|m| m.nickname.as_str())
    }
}
