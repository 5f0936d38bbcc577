use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Detail-panel tabs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailTab {
    Timeline,
    Details,
    Attachments,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RequestsState {
    // filters
    pub q: String,

    // selection
    pub selected_id: Option<String>,

    pub tab: DetailTab,
}

impl Default for RequestsState {
    fn default() -> Self {
        Self {
            q: String::new(),
            // first request is pre-selected, as in the tracking view's
            // initial render
            selected_id: Some("1".to_string()),
            tab: DetailTab::Timeline,
        }
    }
}

pub fn create_state() -> RwSignal<RequestsState> {
    RwSignal::new(RequestsState::default())
}
