use crate::enums::{UserRole, UserStatus};
use serde::{Deserialize, Serialize};

/// A person known to the system: requester, support agent or administrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,

    pub name: String,

    pub email: String,

    pub role: UserRole,

    pub department: String,

    /// Image reference for the profile picture
    pub avatar: String,

    pub status: UserStatus,
}
