use contracts::enums::{Priority, RequestStatus};
use leptos::prelude::*;

/// Colored pill for a request priority
#[component]
pub fn PriorityBadge(priority: Priority) -> impl IntoView {
    view! {
        <span class=format!("badge {}", priority.color())>{priority.code()}</span>
    }
}

/// Colored pill for a request status, underscore spelled out
#[component]
pub fn StatusBadge(status: RequestStatus) -> impl IntoView {
    view! {
        <span class=format!("badge {}", status.color())>{status.display_name()}</span>
    }
}
