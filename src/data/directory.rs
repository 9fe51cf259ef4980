//! User directory capability.

use crate::api::UserId;

/// Name and avatar for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub avatar: String,
}

/// Optional collaborator mapping user ids to display profiles.
///
/// A lookup miss is an expected outcome, not an error: the facade falls back
/// to a placeholder name and an empty avatar.
pub trait UserDirectory: Send + Sync {
    fn lookup(&self, user_id: UserId) -> Option<UserProfile>;
}
