//! Derived-view functions: pure filters, rankings and aggregations over
//! the static dataset. Pages call these on every render; all of them are
//! order-preserving and idempotent.

use crate::domain::{CatalogItem, ServiceRequest, User};
use crate::enums::{Priority, RequestStatus, UserRole, UserStatus};

/// Sentinel filter token that disables category/role narrowing
pub const ALL_FILTER: &str = "all";

/// Types that support case-insensitive text search over designated fields
pub trait Searchable {
    /// Whether the entity matches the query. The query is already lowercased.
    fn matches_query(&self, query: &str) -> bool;
}

impl Searchable for ServiceRequest {
    fn matches_query(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
    }
}

impl Searchable for CatalogItem {
    fn matches_query(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
    }
}

impl Searchable for User {
    fn matches_query(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.email.to_lowercase().contains(query)
            || self.department.to_lowercase().contains(query)
    }
}

/// Case-folded substring search. The empty query matches everything;
/// relative order of matches mirrors the source collection.
pub fn search<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_query(&query))
        .cloned()
        .collect()
}

/// Whether `field` passes the selected category/role filter
fn matches_filter(field: &str, selected: &str) -> bool {
    selected == ALL_FILTER || field == selected
}

/// Requests matching the search query
pub fn filter_requests(requests: &[ServiceRequest], query: &str) -> Vec<ServiceRequest> {
    search(requests, query)
}

/// Active catalog items matching both the search query and the selected
/// category. `ALL_FILTER` disables category narrowing but never shows
/// inactive items.
pub fn filter_catalog(items: &[CatalogItem], query: &str, category: &str) -> Vec<CatalogItem> {
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.is_active)
        .filter(|item| matches_filter(&item.category, category))
        .filter(|item| query.is_empty() || item.matches_query(&query))
        .cloned()
        .collect()
}

/// Users matching both the search query and the selected role
pub fn filter_users(users: &[User], query: &str, role: &str) -> Vec<User> {
    let query = query.to_lowercase();
    users
        .iter()
        .filter(|user| matches_filter(user.role.code(), role))
        .filter(|user| query.is_empty() || user.matches_query(&query))
        .cloned()
        .collect()
}

/// Top-`n` active catalog items by descending popularity. The sort is
/// stable: items with equal popularity keep their source order.
pub fn top_popular(items: &[CatalogItem], n: usize) -> Vec<CatalogItem> {
    let mut active: Vec<CatalogItem> = items.iter().filter(|i| i.is_active).cloned().collect();
    active.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    active.truncate(n);
    active
}

/// Count of active catalog items in a category
pub fn category_count(items: &[CatalogItem], category: &str) -> usize {
    items
        .iter()
        .filter(|i| i.is_active && i.category == category)
        .count()
}

/// Unique department names in first-seen order
pub fn departments(users: &[User]) -> Vec<String> {
    let mut seen = Vec::new();
    for user in users {
        if !seen.contains(&user.department) {
            seen.push(user.department.clone());
        }
    }
    seen
}

/// Headline counters for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub closed: usize,
    pub critical: usize,
}

impl RequestStats {
    pub fn of(requests: &[ServiceRequest]) -> Self {
        let by_status = |status: RequestStatus| {
            requests.iter().filter(|r| r.status == status).count()
        };
        Self {
            total: requests.len(),
            open: by_status(RequestStatus::Open),
            in_progress: by_status(RequestStatus::InProgress),
            resolved: by_status(RequestStatus::Resolved),
            closed: by_status(RequestStatus::Closed),
            critical: requests
                .iter()
                .filter(|r| r.priority == Priority::Critical)
                .count(),
        }
    }
}

/// Headline counters for the user administration page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub admins: usize,
    pub agents: usize,
    pub regular: usize,
}

impl UserStats {
    pub fn of(users: &[User]) -> Self {
        let by_role =
            |role: UserRole| users.iter().filter(|u| u.role == role).count();
        Self {
            total: users.len(),
            active: users
                .iter()
                .filter(|u| u.status == UserStatus::Active)
                .count(),
            admins: by_role(UserRole::Admin),
            agents: by_role(UserRole::Agent),
            regular: by_role(UserRole::User),
        }
    }

    /// Users holding the given role
    pub fn with_role(users: &[User], role: UserRole) -> usize {
        users.iter().filter(|u| u.role == role).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn item(id: &str, name: &str, popularity: u8, active: bool) -> CatalogItem {
        CatalogItem {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: "Software".into(),
            icon: "star".into(),
            estimated_time: "1 hour".into(),
            popularity,
            is_active: active,
        }
    }

    #[test]
    fn test_search_empty_query_returns_all_in_order() {
        let requests = data::service_requests();
        let out = filter_requests(requests, "");
        assert_eq!(out.len(), requests.len());
        let ids: Vec<&str> = out.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_search_is_case_folded_substring() {
        let out = filter_requests(data::service_requests(), "LAPTOP");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "2");
    }

    #[test]
    fn test_search_is_idempotent() {
        let once = filter_requests(data::service_requests(), "printer");
        let twice = filter_requests(&once, "printer");
        let ids_once: Vec<&str> = once.iter().map(|r| r.id.as_str()).collect();
        let ids_twice: Vec<&str> = twice.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids_once, ids_twice);
    }

    #[test]
    fn test_catalog_filter_composes_with_and() {
        // "re" matches several names; category narrows further
        let out = filter_catalog(data::catalog_items(), "request", "Hardware");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Hardware Request");
    }

    #[test]
    fn test_catalog_all_sentinel_keeps_active_filter_only() {
        let mut items = data::catalog_items().to_vec();
        items.push(item("99", "Retired Service", 10, false));
        let out = filter_catalog(&items, "", ALL_FILTER);
        assert_eq!(out.len(), 6);
        assert!(out.iter().all(|i| i.is_active));
    }

    #[test]
    fn test_user_filter_all_sentinel_is_unfiltered() {
        let out = filter_users(data::users(), "", ALL_FILTER);
        assert_eq!(out.len(), data::users().len());
    }

    #[test]
    fn test_user_filter_by_role_and_query() {
        let out = filter_users(data::users(), "it support", "agent");
        let names: Vec<&str> = out.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Alex Rodriguez", "Mike Thompson"]);
    }

    #[test]
    fn test_top_popular_ranking() {
        let items = vec![
            item("a", "A", 95, true),
            item("b", "B", 87, true),
            item("c", "C", 76, true),
            item("d", "D", 82, true),
        ];
        let top = top_popular(&items, 3);
        let names: Vec<&str> = top.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "D"]);
    }

    #[test]
    fn test_top_popular_ties_keep_source_order() {
        let items = vec![
            item("a", "A", 80, true),
            item("b", "B", 90, true),
            item("c", "C", 80, true),
        ];
        let top = top_popular(&items, 3);
        let names: Vec<&str> = top.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_top_popular_skips_inactive() {
        let items = vec![
            item("a", "A", 99, false),
            item("b", "B", 10, true),
        ];
        let top = top_popular(&items, 3);
        let names: Vec<&str> = top.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["B"]);
    }

    #[test]
    fn test_request_stats_partition_sums_to_total() {
        let stats = RequestStats::of(data::service_requests());
        assert_eq!(
            stats.open + stats.in_progress + stats.resolved + stats.closed,
            stats.total
        );
        assert_eq!(stats.total, 5);
        assert_eq!(stats.critical, 1);
    }

    #[test]
    fn test_user_stats_role_partition() {
        let stats = UserStats::of(data::users());
        assert_eq!(stats.admins + stats.agents + stats.regular, stats.total);
        assert_eq!(stats.active, 5);
    }

    #[test]
    fn test_departments_unique_first_seen_order() {
        let out = departments(data::users());
        assert_eq!(out, vec!["IT Support", "Marketing", "Design"]);
    }

    #[test]
    fn test_category_count() {
        assert_eq!(category_count(data::catalog_items(), "Hardware"), 1);
        assert_eq!(category_count(data::catalog_items(), "Security"), 0);
    }
}
