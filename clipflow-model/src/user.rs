use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered platform user.
///
/// This is the authenticated-request identity attached to every history
/// operation. Credential material is owned by the account service and is
/// never part of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Unique username (lowercase, 3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// Display name shown in UI
    pub nickname: Option<String>,
    /// Optional URL to user's avatar image
    pub avatar_url: Option<String>,
    /// Timestamp of account creation
    pub created_at: DateTime<Utc>,
    /// Whether the user account is active
    pub is_active: bool,
}

impl User {
    /// Public display fields for embedding in catalog responses.
    pub fn summary(&self) -> crate::video::CreatorSummary {
        crate::video::CreatorSummary {
            id: self.id,
            username: self.username.clone(),
            nickname: self.nickname.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}
