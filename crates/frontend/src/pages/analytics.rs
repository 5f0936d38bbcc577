use crate::shared::stat_card::StatCard;
use contracts::data;
use contracts::domain::ChartBucket;
use leptos::prelude::*;

/// Reporting page over the pre-aggregated snapshot. The headline numbers
/// here come from `data::analytics()` and intentionally do not reconcile
/// with the dashboard's live `RequestStats`.
#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let snapshot = data::analytics();

    view! {
        <div class="page page--analytics">
            <div class="page__header">
                <h1>"Analytics & Reports"</h1>
                <p class="page__subtitle">"Monitor service request performance and trends"</p>
            </div>

            <div class="stat-grid stat-grid--four">
                <StatCard
                    label="Total Requests"
                    value=snapshot.total_requests.to_string()
                    glyph="bar-chart"
                />
                <StatCard
                    label="Resolution Rate"
                    value=snapshot.resolution_rate.to_string()
                    glyph="trending-up"
                    tone="stat-card__value--green"
                />
                <StatCard
                    label="Avg Resolution Time"
                    value=snapshot.avg_resolution_time.to_string()
                    glyph="clock"
                    tone="stat-card__value--blue"
                />
                <StatCard
                    label="Customer Satisfaction"
                    value=snapshot.satisfaction_score.to_string()
                    glyph="users"
                    tone="stat-card__value--yellow"
                />
            </div>

            <div class="analytics__columns">
                <BucketChart
                    title="Requests by Status"
                    description="Current distribution of request statuses"
                    buckets=snapshot.requests_by_status.clone()
                />
                <BucketChart
                    title="Requests by Priority"
                    description="Priority level distribution"
                    buckets=snapshot.requests_by_priority.clone()
                />
            </div>

            <div class="card chart">
                <div class="chart__header">
                    <h3>"Monthly Request Trends"</h3>
                    <p class="page__subtitle">"Request volume and resolution trends over time"</p>
                </div>
                {snapshot
                    .monthly_trends
                    .iter()
                    .map(|point| {
                        // bars scaled against a fixed 120-request ceiling
                        let requests_pct = point.requests as f64 / 120.0 * 100.0;
                        let resolved_pct = point.resolved as f64 / 120.0 * 100.0;
                        view! {
                            <div class="trend">
                                <div class="trend__meta">
                                    <span>{point.month}</span>
                                    <span class="trend__counts">
                                        {format!(
                                            "Requests: {}  Resolved: {}",
                                            point.requests,
                                            point.resolved,
                                        )}
                                    </span>
                                </div>
                                <div class="trend__bars">
                                    <div
                                        class="trend__bar trend__bar--requests"
                                        style=format!("width: {requests_pct:.0}%")
                                    ></div>
                                    <div
                                        class="trend__bar trend__bar--resolved"
                                        style=format!("width: {resolved_pct:.0}%")
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card chart">
                <div class="chart__header">
                    <h3>"Team Performance"</h3>
                    <p class="page__subtitle">"Individual agent performance metrics"</p>
                </div>
                {snapshot
                    .team_performance
                    .iter()
                    .map(|member| {
                        // progress against a 40-resolutions target
                        let pct = member.resolved as f64 / 40.0 * 100.0;
                        view! {
                            <div class="agent">
                                <div class="agent__row">
                                    <span class="agent__name">{member.name}</span>
                                    <span class="agent__metrics">
                                        {format!(
                                            "Resolved: {}  Avg Time: {}",
                                            member.resolved,
                                            member.avg_time,
                                        )}
                                    </span>
                                </div>
                                <div class="agent__track">
                                    <div class="agent__bar" style=format!("width: {pct:.0}%")></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="analytics__columns">
                <div class="card chart">
                    <div class="chart__header">
                        <h3>"Response Time by Category"</h3>
                        <p class="page__subtitle">"Average first-response time per category"</p>
                    </div>
                    {RESPONSE_TIMES
                        .into_iter()
                        .map(|(category, time)| {
                            view! {
                                <div class="metric-row">
                                    <span>{category}</span>
                                    <span class="metric-row__value">{time}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="card chart">
                    <div class="chart__header">
                        <h3>"Customer Satisfaction"</h3>
                        <p class="page__subtitle">"Average rating per service"</p>
                    </div>
                    {SATISFACTION
                        .into_iter()
                        .map(|(service, score)| {
                            view! {
                                <div class="metric-row">
                                    <span>{service}</span>
                                    <span class="metric-row__value">{format!("{score} / 5")}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Average first-response time per request category
const RESPONSE_TIMES: [(&str, &str); 4] = [
    ("Account Access", "45m"),
    ("Hardware", "2.1h"),
    ("Software", "1.3h"),
    ("Network", "3.2h"),
];

/// Average satisfaction rating per catalog service
const SATISFACTION: [(&str, &str); 4] = [
    ("Password Reset", "4.9"),
    ("Software Installation", "4.6"),
    ("Hardware Request", "4.5"),
    ("Network Access", "4.7"),
];

#[component]
fn BucketChart(
    title: &'static str,
    description: &'static str,
    buckets: Vec<ChartBucket>,
) -> impl IntoView {
    let max = buckets.iter().map(|b| b.value).max().unwrap_or(1).max(1);

    view! {
        <div class="card chart">
            <div class="chart__header">
                <h3>{title}</h3>
                <p class="page__subtitle">{description}</p>
            </div>
            {buckets
                .into_iter()
                .map(|bucket| {
                    let pct = bucket.value as f64 / max as f64 * 100.0;
                    view! {
                        <div class="bucket">
                            <span
                                class="bucket__swatch"
                                style=format!("background-color: {}", bucket.color)
                            ></span>
                            <span class="bucket__name">{bucket.name}</span>
                            <span class="bucket__value">{bucket.value}</span>
                            <div class="bucket__track">
                                <div
                                    class="bucket__bar"
                                    style=format!(
                                        "background-color: {}; width: {pct:.0}%",
                                        bucket.color,
                                    )
                                ></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
