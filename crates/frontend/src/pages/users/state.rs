use contracts::views::ALL_FILTER;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// User administration tabs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsersTab {
    Users,
    Roles,
    Departments,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UsersState {
    // filters
    pub q: String,
    pub role: String,

    pub tab: UsersTab,
}

impl Default for UsersState {
    fn default() -> Self {
        Self {
            q: String::new(),
            role: ALL_FILTER.to_string(),
            tab: UsersTab::Users,
        }
    }
}

pub fn create_state() -> RwSignal<UsersState> {
    RwSignal::new(UsersState::default())
}

/// Role dropdown options: (value, label). The sentinel comes first.
pub fn role_options() -> Vec<(&'static str, &'static str)> {
    vec![
        (ALL_FILTER, "All Roles"),
        ("admin", "Admin"),
        ("agent", "Agent"),
        ("user", "User"),
    ]
}
