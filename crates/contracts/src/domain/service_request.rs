use crate::enums::{Priority, RequestStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A trackable unit of work raised by a requester and worked by an assignee.
///
/// Invariant: `updated_at >= created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: String,

    pub title: String,

    pub description: String,

    pub category: String,

    pub priority: Priority,

    pub status: RequestStatus,

    pub requester: String,

    #[serde(rename = "assignedTo")]
    pub assigned_to: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,

    #[serde(rename = "dueDate")]
    pub due_date: DateTime<Utc>,
}
