use serde::Serialize;

/// A named bucket with a count and a chart color (hex)
#[derive(Debug, Clone, Serialize)]
pub struct ChartBucket {
    pub name: &'static str,
    pub value: u32,
    pub color: &'static str,
}

/// One month of request volume vs. resolutions
#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub month: &'static str,
    pub requests: u32,
    pub resolved: u32,
}

/// Per-agent performance row
#[derive(Debug, Clone, Serialize)]
pub struct AgentPerformance {
    pub name: &'static str,
    pub resolved: u32,
    /// Average handling time, display string
    pub avg_time: &'static str,
}

/// Pre-aggregated analytics for the reporting page.
///
/// This snapshot is demo placeholder data and is NOT derived from the live
/// request collection; its headline totals do not reconcile with the
/// dashboard's `RequestStats`. The divergence is intentional and kept.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSnapshot {
    pub requests_by_status: Vec<ChartBucket>,
    pub requests_by_priority: Vec<ChartBucket>,
    pub monthly_trends: Vec<TrendPoint>,
    pub team_performance: Vec<AgentPerformance>,

    // headline metrics
    pub total_requests: u32,
    pub resolution_rate: &'static str,
    pub avg_resolution_time: &'static str,
    pub satisfaction_score: &'static str,
}
