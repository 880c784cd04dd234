//! REST DTOs shared across pages and state containers.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field-for-field so serde
//! does all decoding and page code never touches raw `serde_json::Value`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as returned by `/api/users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display nickname chosen at signup.
    pub nickname: String,
    /// Family this user belongs to, if any.
    pub family_id: Option<String>,
    /// Avatar image URL, if set.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A family group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    /// Unique family identifier (UUID string).
    pub id: String,
    /// Family display name.
    pub name: String,
    /// Six-character code other users redeem to join.
    pub invite_code: String,
}

/// Generation of a family member, used by the tree view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    #[default]
    Parent,
    Child,
}

/// One member of the current family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display nickname.
    pub nickname: String,
    /// Parent or child, for tree placement.
    #[serde(default)]
    pub role: MemberRole,
    /// Avatar image URL, if set.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A memory entry: the core content unit of the app.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    /// Unique memory identifier (UUID string).
    pub id: String,
    /// Owning family (UUID string).
    pub family_id: String,
    /// Author user ID (UUID string).
    pub author_id: String,
    /// Short title shown on cards and calendar cells.
    pub title: String,
    /// Markdown body.
    pub body: String,
    /// Day the memory happened, as `YYYY-MM-DD`.
    pub event_date: String,
    /// Attached image URLs in display order.
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Members who appear in this memory (user IDs).
    #[serde(default)]
    pub participant_ids: Vec<String>,
    /// Number of likes across the family.
    #[serde(default)]
    pub like_count: i64,
    /// Whether the signed-in user has liked this memory.
    #[serde(default)]
    pub liked_by_me: bool,
    /// Number of comments.
    #[serde(default)]
    pub comment_count: i64,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

/// Payload for creating a memory. Also serves as the localStorage draft
/// shape for the new-memory form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMemory {
    pub title: String,
    pub body: String,
    pub event_date: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub participant_ids: Vec<String>,
}

/// A comment on a memory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier (UUID string).
    pub id: String,
    /// Memory this comment belongs to.
    pub memory_id: String,
    /// Author user ID.
    pub author_id: String,
    /// Author nickname, denormalized for display.
    pub author_nickname: String,
    /// Comment text.
    pub body: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

/// Lifecycle of a media-generation job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Processing,
    Done,
    Failed,
}

impl JobStatus {
    /// Whether the job has reached a final state.
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

/// An asynchronous media-generation job (photo animation or picture diary).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaJob {
    /// Unique job identifier (UUID string).
    pub id: String,
    /// Current lifecycle state.
    pub status: JobStatus,
    /// Result URL once `status` is `done`.
    #[serde(default)]
    pub result_url: Option<String>,
    /// Generated caption for picture-diary jobs, if any.
    #[serde(default)]
    pub caption: Option<String>,
    /// Failure detail once `status` is `failed`.
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque session token to persist client-side.
    pub token: String,
    /// Profile of the user that signed in.
    pub user: UserProfile,
}
