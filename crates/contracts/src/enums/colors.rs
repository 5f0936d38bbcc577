//! Display-color lookups for badge rendering.
//!
//! These are total functions over strings: any value outside the known
//! enumeration maps to [`DEFAULT_COLOR`], so an unrecognized wire code
//! renders as a neutral badge instead of failing.

/// Neutral fallback token for unrecognized values
pub const DEFAULT_COLOR: &str = "bg-gray-500";

/// Color token for a priority wire code
pub fn priority_color(priority: &str) -> &'static str {
    match priority {
        "critical" => "bg-red-500",
        "high" => "bg-orange-500",
        "medium" => "bg-yellow-500",
        "low" => "bg-green-500",
        _ => DEFAULT_COLOR,
    }
}

/// Color token for a status wire code
pub fn status_color(status: &str) -> &'static str {
    match status {
        "open" => "bg-blue-500",
        "in_progress" => "bg-yellow-500",
        "resolved" => "bg-green-500",
        "closed" => "bg-gray-500",
        _ => DEFAULT_COLOR,
    }
}

/// Color token for a user-role wire code
pub fn role_color(role: &str) -> &'static str {
    match role {
        "admin" => "bg-red-500",
        "agent" => "bg-blue-500",
        "user" => "bg-green-500",
        _ => DEFAULT_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Priority;
    use std::collections::HashSet;

    #[test]
    fn test_priority_colors_distinct_and_stable() {
        let tokens: Vec<&str> = Priority::all()
            .iter()
            .map(|p| priority_color(p.code()))
            .collect();
        let unique: HashSet<&&str> = tokens.iter().collect();
        assert_eq!(unique.len(), tokens.len());
        // stable across calls
        assert_eq!(priority_color("critical"), "bg-red-500");
        assert_eq!(priority_color("critical"), "bg-red-500");
    }

    #[test]
    fn test_unknown_values_fall_back() {
        assert_eq!(priority_color("urgent"), DEFAULT_COLOR);
        assert_eq!(status_color(""), DEFAULT_COLOR);
        assert_eq!(role_color("superuser"), DEFAULT_COLOR);
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color("open"), "bg-blue-500");
        assert_eq!(status_color("in_progress"), "bg-yellow-500");
        assert_eq!(status_color("resolved"), "bg-green-500");
        assert_eq!(status_color("closed"), "bg-gray-500");
    }
}
