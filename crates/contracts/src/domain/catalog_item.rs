use serde::{Deserialize, Serialize};

/// A pre-defined, requestable service offering.
///
/// Invariant: `popularity` is a percentage in `0..=100`. Only items with
/// `is_active` set are ever shown in browsing and filtering views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,

    pub name: String,

    pub description: String,

    pub category: String,

    /// Symbolic key into the fixed icon set (see `frontend::shared::icons`)
    pub icon: String,

    /// Free-form fulfillment estimate, e.g. "15 minutes" or "2-3 days"
    #[serde(rename = "estimatedTime")]
    pub estimated_time: String,

    /// Popularity score in percent, 0..=100
    pub popularity: u8,

    #[serde(rename = "isActive")]
    pub is_active: bool,
}
