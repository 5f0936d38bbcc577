use crate::shared::badge::{PriorityBadge, StatusBadge};
use crate::shared::stat_card::StatCard;
use contracts::{data, views::RequestStats};
use leptos::prelude::*;
use leptos_router::components::A;

/// Quick-action tiles: (route, icon key, label)
const QUICK_ACTIONS: [(&str, &str, &str); 4] = [
    ("/create-request", "clock", "New Request"),
    ("/analytics", "bar-chart", "Analytics"),
    ("/users", "users", "Users"),
    ("/service-catalog", "check-circle", "Catalog"),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    // Derived per render from the live request collection. These totals
    // deliberately do not match the analytics snapshot headline.
    let stats = RequestStats::of(data::service_requests());

    let recent = || data::service_requests().iter().take(5).cloned().collect::<Vec<_>>();

    view! {
        <div class="page page--dashboard">
            <div class="page__header">
                <h1>"Dashboard"</h1>
                <p class="page__subtitle">"Monitor and manage service requests"</p>
            </div>

            <div class="stat-grid">
                <StatCard label="Total Requests" value=stats.total.to_string() glyph="bar-chart" />
                <StatCard label="Open" value=stats.open.to_string() glyph="clock" tone="stat-card__value--blue" />
                <StatCard label="In Progress" value=stats.in_progress.to_string() glyph="trending-up" tone="stat-card__value--yellow" />
                <StatCard label="Resolved" value=stats.resolved.to_string() glyph="check-circle" tone="stat-card__value--green" />
                <StatCard label="Critical" value=stats.critical.to_string() glyph="alert-triangle" tone="stat-card__value--red" />
                <StatCard label="Team Size" value="12".to_string() glyph="users" tone="stat-card__value--purple" />
            </div>

            <div class="dashboard__columns">
                <div class="card">
                    <div class="card__header">
                        <h2>"Recent Requests"</h2>
                        <A href="/requests" attr:class="btn btn--outline">"View All"</A>
                    </div>
                    <div class="request-list">
                        {move || {
                            recent()
                                .into_iter()
                                .map(|request| {
                                    view! {
                                        <div class="request-list__item">
                                            <div class="request-list__main">
                                                <h3>{request.title.clone()}</h3>
                                                <p class="request-list__description">
                                                    {request.description.clone()}
                                                </p>
                                                <div class="request-list__badges">
                                                    <PriorityBadge priority=request.priority />
                                                    <StatusBadge status=request.status />
                                                </div>
                                            </div>
                                            <div class="request-list__aside">
                                                <p class="request-list__hint">"Assigned to"</p>
                                                <p>{request.assigned_to.clone()}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>

                <div class="card">
                    <h2>"Quick Actions"</h2>
                    <div class="quick-actions">
                        {QUICK_ACTIONS
                            .into_iter()
                            .map(|(path, glyph, label)| {
                                view! {
                                    <A href=path attr:class="quick-actions__tile">
                                        {crate::shared::icons::icon(glyph)}
                                        <span>{label}</span>
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
