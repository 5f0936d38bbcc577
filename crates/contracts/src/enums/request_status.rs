use serde::{Deserialize, Serialize};

/// Lifecycle status of a service request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl RequestStatus {
    /// Wire code of the status
    pub fn code(&self) -> &'static str {
        match self {
            RequestStatus::Open => "open",
            RequestStatus::InProgress => "in_progress",
            RequestStatus::Resolved => "resolved",
            RequestStatus::Closed => "closed",
        }
    }

    /// Human-readable label (wire code with the underscore spelled out)
    pub fn display_name(&self) -> &'static str {
        match self {
            RequestStatus::Open => "open",
            RequestStatus::InProgress => "in progress",
            RequestStatus::Resolved => "resolved",
            RequestStatus::Closed => "closed",
        }
    }

    /// Display color token, same lookup as [`crate::enums::status_color`]
    pub fn color(&self) -> &'static str {
        crate::enums::status_color(self.code())
    }

    /// Position in the request lifecycle: open < in_progress < resolved < closed.
    /// The timeline projection is monotonic in this rank.
    pub fn rank(&self) -> u8 {
        match self {
            RequestStatus::Open => 0,
            RequestStatus::InProgress => 1,
            RequestStatus::Resolved => 2,
            RequestStatus::Closed => 3,
        }
    }

    /// All statuses, in lifecycle order
    pub fn all() -> Vec<RequestStatus> {
        vec![
            RequestStatus::Open,
            RequestStatus::InProgress,
            RequestStatus::Resolved,
            RequestStatus::Closed,
        ]
    }

    /// Parse from a wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "open" => Some(RequestStatus::Open),
            "in_progress" => Some(RequestStatus::InProgress),
            "resolved" => Some(RequestStatus::Resolved),
            "closed" => Some(RequestStatus::Closed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_is_lifecycle_order() {
        let ranks: Vec<u8> = RequestStatus::all().iter().map(|s| s.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_serde_wire_codes() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let s: RequestStatus = serde_json::from_str("\"closed\"").unwrap();
        assert_eq!(s, RequestStatus::Closed);
    }

    #[test]
    fn test_code_roundtrip() {
        for s in RequestStatus::all() {
            assert_eq!(RequestStatus::from_code(s.code()), Some(s));
        }
        assert_eq!(RequestStatus::from_code("archived"), None);
    }
}
