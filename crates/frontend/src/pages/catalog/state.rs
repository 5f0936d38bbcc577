use contracts::views::ALL_FILTER;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Catalog page tabs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogTab {
    All,
    Popular,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogState {
    // filters
    pub q: String,
    pub category: String,

    pub tab: CatalogTab,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            q: String::new(),
            category: ALL_FILTER.to_string(),
            tab: CatalogTab::All,
        }
    }
}

pub fn create_state() -> RwSignal<CatalogState> {
    RwSignal::new(CatalogState::default())
}

/// Filter dropdown options: (value, label). The sentinel comes first.
pub fn category_options() -> Vec<(&'static str, &'static str)> {
    vec![
        (ALL_FILTER, "All Services"),
        ("Account Access", "Account Access"),
        ("Software", "Software"),
        ("Hardware", "Hardware"),
        ("Network", "Network"),
        ("Email", "Email"),
        ("Training", "Training"),
    ]
}
