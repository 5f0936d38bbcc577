//! Static in-memory dataset.
//!
//! The collections are process-wide, read-only singletons built once on
//! first access and exposed only through slice-returning accessors. No
//! component owns or mutates them.

use crate::domain::{
    AgentPerformance, AnalyticsSnapshot, CatalogItem, ChartBucket, Comment, ServiceRequest,
    TrendPoint, User,
};
use crate::enums::{Priority, RequestStatus, UserRole, UserStatus};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Parse a fixed RFC 3339 literal. Only used for the literals below,
/// which are covered by the dataset invariant tests.
fn ts(literal: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(literal)
        .expect("static dataset timestamp must be valid RFC 3339")
        .with_timezone(&Utc)
}

static SERVICE_REQUESTS: Lazy<Vec<ServiceRequest>> = Lazy::new(|| {
    vec![
        ServiceRequest {
            id: "1".into(),
            title: "Password Reset Required".into(),
            description: "Unable to login to company email account".into(),
            category: "Account Access".into(),
            priority: Priority::Medium,
            status: RequestStatus::Open,
            requester: "John Doe".into(),
            assigned_to: "Sarah Johnson".into(),
            created_at: ts("2024-01-15T10:30:00Z"),
            updated_at: ts("2024-01-15T10:30:00Z"),
            due_date: ts("2024-01-17T17:00:00Z"),
        },
        ServiceRequest {
            id: "2".into(),
            title: "New Employee Laptop Setup".into(),
            description: "Setup laptop and software for new marketing team member".into(),
            category: "Hardware".into(),
            priority: Priority::High,
            status: RequestStatus::InProgress,
            requester: "Mike Chen".into(),
            assigned_to: "Alex Rodriguez".into(),
            created_at: ts("2024-01-14T09:15:00Z"),
            updated_at: ts("2024-01-15T14:20:00Z"),
            due_date: ts("2024-01-16T12:00:00Z"),
        },
        ServiceRequest {
            id: "3".into(),
            title: "Software License Renewal".into(),
            description: "Adobe Creative Suite license needs renewal".into(),
            category: "Software".into(),
            priority: Priority::Low,
            status: RequestStatus::Resolved,
            requester: "Emily Davis".into(),
            assigned_to: "Sarah Johnson".into(),
            created_at: ts("2024-01-12T14:45:00Z"),
            updated_at: ts("2024-01-15T16:30:00Z"),
            due_date: ts("2024-01-20T17:00:00Z"),
        },
        ServiceRequest {
            id: "4".into(),
            title: "Network Connection Issues".into(),
            description: "Intermittent connectivity problems in conference room B".into(),
            category: "Network".into(),
            priority: Priority::Critical,
            status: RequestStatus::InProgress,
            requester: "Robert Wilson".into(),
            assigned_to: "Alex Rodriguez".into(),
            created_at: ts("2024-01-15T11:20:00Z"),
            updated_at: ts("2024-01-15T15:45:00Z"),
            due_date: ts("2024-01-15T18:00:00Z"),
        },
        ServiceRequest {
            id: "5".into(),
            title: "Printer Maintenance".into(),
            description: "Monthly maintenance for office printers".into(),
            category: "Hardware".into(),
            priority: Priority::Low,
            status: RequestStatus::Closed,
            requester: "Lisa Anderson".into(),
            assigned_to: "Mike Thompson".into(),
            created_at: ts("2024-01-10T08:00:00Z"),
            updated_at: ts("2024-01-13T16:00:00Z"),
            due_date: ts("2024-01-15T17:00:00Z"),
        },
    ]
});

static USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        User {
            id: "1".into(),
            name: "Sarah Johnson".into(),
            email: "sarah.johnson@company.com".into(),
            role: UserRole::Admin,
            department: "IT Support".into(),
            avatar: "https://images.unsplash.com/photo-1494790108755-2616b612c95e?w=150".into(),
            status: UserStatus::Active,
        },
        User {
            id: "2".into(),
            name: "Alex Rodriguez".into(),
            email: "alex.rodriguez@company.com".into(),
            role: UserRole::Agent,
            department: "IT Support".into(),
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150".into(),
            status: UserStatus::Active,
        },
        User {
            id: "3".into(),
            name: "Mike Thompson".into(),
            email: "mike.thompson@company.com".into(),
            role: UserRole::Agent,
            department: "IT Support".into(),
            avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150".into(),
            status: UserStatus::Active,
        },
        User {
            id: "4".into(),
            name: "John Doe".into(),
            email: "john.doe@company.com".into(),
            role: UserRole::User,
            department: "Marketing".into(),
            avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=150".into(),
            status: UserStatus::Active,
        },
        User {
            id: "5".into(),
            name: "Emily Davis".into(),
            email: "emily.davis@company.com".into(),
            role: UserRole::User,
            department: "Design".into(),
            avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150".into(),
            status: UserStatus::Active,
        },
    ]
});

static CATALOG_ITEMS: Lazy<Vec<CatalogItem>> = Lazy::new(|| {
    vec![
        CatalogItem {
            id: "1".into(),
            name: "Password Reset".into(),
            description: "Reset your account password or unlock your account".into(),
            category: "Account Access".into(),
            icon: "key".into(),
            estimated_time: "15 minutes".into(),
            popularity: 95,
            is_active: true,
        },
        CatalogItem {
            id: "2".into(),
            name: "Software Installation".into(),
            description: "Install approved software on your workstation".into(),
            category: "Software".into(),
            icon: "download".into(),
            estimated_time: "30 minutes".into(),
            popularity: 87,
            is_active: true,
        },
        CatalogItem {
            id: "3".into(),
            name: "Hardware Request".into(),
            description: "Request new hardware or replacement equipment".into(),
            category: "Hardware".into(),
            icon: "monitor".into(),
            estimated_time: "2-3 days".into(),
            popularity: 76,
            is_active: true,
        },
        CatalogItem {
            id: "4".into(),
            name: "Network Access".into(),
            description: "Request access to network resources or VPN".into(),
            category: "Network".into(),
            icon: "wifi".into(),
            estimated_time: "1 hour".into(),
            popularity: 82,
            is_active: true,
        },
        CatalogItem {
            id: "5".into(),
            name: "Email Setup".into(),
            description: "Configure email on your device or create new mailbox".into(),
            category: "Email".into(),
            icon: "mail".into(),
            estimated_time: "20 minutes".into(),
            popularity: 69,
            is_active: true,
        },
        CatalogItem {
            id: "6".into(),
            name: "Security Training".into(),
            description: "Complete mandatory security awareness training".into(),
            category: "Training".into(),
            icon: "shield".into(),
            estimated_time: "45 minutes".into(),
            popularity: 43,
            is_active: true,
        },
    ]
});

static ANALYTICS: Lazy<AnalyticsSnapshot> = Lazy::new(|| AnalyticsSnapshot {
    requests_by_status: vec![
        ChartBucket { name: "Open", value: 24, color: "#3b82f6" },
        ChartBucket { name: "In Progress", value: 18, color: "#f59e0b" },
        ChartBucket { name: "Resolved", value: 42, color: "#10b981" },
        ChartBucket { name: "Closed", value: 16, color: "#6b7280" },
    ],
    requests_by_priority: vec![
        ChartBucket { name: "Critical", value: 8, color: "#ef4444" },
        ChartBucket { name: "High", value: 15, color: "#f97316" },
        ChartBucket { name: "Medium", value: 45, color: "#eab308" },
        ChartBucket { name: "Low", value: 32, color: "#22c55e" },
    ],
    monthly_trends: vec![
        TrendPoint { month: "Jan", requests: 89, resolved: 84 },
        TrendPoint { month: "Feb", requests: 95, resolved: 91 },
        TrendPoint { month: "Mar", requests: 102, resolved: 98 },
        TrendPoint { month: "Apr", requests: 87, resolved: 85 },
        TrendPoint { month: "May", requests: 91, resolved: 89 },
        TrendPoint { month: "Jun", requests: 105, resolved: 102 },
    ],
    team_performance: vec![
        AgentPerformance { name: "Sarah Johnson", resolved: 34, avg_time: "2.5h" },
        AgentPerformance { name: "Alex Rodriguez", resolved: 28, avg_time: "3.1h" },
        AgentPerformance { name: "Mike Thompson", resolved: 22, avg_time: "2.8h" },
    ],
    total_requests: 847,
    resolution_rate: "94.2%",
    avg_resolution_time: "2.8h",
    satisfaction_score: "4.7/5",
});

static COMMENTS: Lazy<Vec<Comment>> = Lazy::new(|| {
    vec![
        Comment {
            id: 1,
            user: "Sarah Johnson".into(),
            avatar: "https://images.unsplash.com/photo-1494790108755-2616b612c95e?w=150".into(),
            message: "I've received your request and will begin working on this immediately. \
                      I'll need to reset your password and verify your identity first."
                .into(),
            timestamp: "2024-01-15 11:15".into(),
            is_internal: false,
        },
        Comment {
            id: 2,
            user: "John Doe".into(),
            avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=150".into(),
            message: "Thanks! I'm available for identity verification anytime today. \
                      My direct number is ext. 1234."
                .into(),
            timestamp: "2024-01-15 11:45".into(),
            is_internal: false,
        },
        Comment {
            id: 3,
            user: "Sarah Johnson".into(),
            avatar: "https://images.unsplash.com/photo-1494790108755-2616b612c95e?w=150".into(),
            message: "Identity verified successfully. Password has been reset and new \
                      credentials have been sent to your backup email address."
                .into(),
            timestamp: "2024-01-15 14:20".into(),
            is_internal: false,
        },
    ]
});

/// All service requests, newest first as seeded
pub fn service_requests() -> &'static [ServiceRequest] {
    &SERVICE_REQUESTS
}

/// All known users
pub fn users() -> &'static [User] {
    &USERS
}

/// The full service catalog, including inactive items
pub fn catalog_items() -> &'static [CatalogItem] {
    &CATALOG_ITEMS
}

/// The pre-aggregated reporting snapshot
pub fn analytics() -> &'static AnalyticsSnapshot {
    &ANALYTICS
}

/// Demo communications feed shown on the request detail panel
pub fn comments() -> &'static [Comment] {
    &COMMENTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_sizes() {
        assert_eq!(service_requests().len(), 5);
        assert_eq!(users().len(), 5);
        assert_eq!(catalog_items().len(), 6);
        assert_eq!(comments().len(), 3);
    }

    #[test]
    fn test_request_timestamps_are_ordered() {
        for r in service_requests() {
            assert!(r.updated_at >= r.created_at, "request {} updated before created", r.id);
        }
    }

    #[test]
    fn test_catalog_popularity_in_range() {
        for item in catalog_items() {
            assert!(item.popularity <= 100, "item {} out of range", item.id);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = service_requests().iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), service_requests().len());
    }

    #[test]
    fn test_analytics_snapshot_shape() {
        let snapshot = analytics();
        assert_eq!(snapshot.requests_by_status.len(), 4);
        assert_eq!(snapshot.requests_by_priority.len(), 4);
        assert_eq!(snapshot.monthly_trends.len(), 6);
        assert_eq!(snapshot.team_performance.len(), 3);
        assert_eq!(snapshot.total_requests, 847);
    }
}
