use serde::{Deserialize, Serialize};

/// A message on a request's communications feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,

    pub user: String,

    pub avatar: String,

    pub message: String,

    /// Display timestamp, already formatted
    pub timestamp: String,

    #[serde(rename = "isInternal")]
    pub is_internal: bool,
}
