use serde::{Deserialize, Serialize};

/// User roles in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Agent,
    User,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Agent => "agent",
            UserRole::User => "user",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Agent => "Agent",
            UserRole::User => "User",
        }
    }

    /// Display color token, same lookup as [`crate::enums::role_color`]
    pub fn color(&self) -> &'static str {
        crate::enums::role_color(self.code())
    }

    /// One-line description of the role, used on the roles overview
    pub fn description(&self) -> &'static str {
        match self {
            UserRole::Admin => "Full system access and user management",
            UserRole::Agent => "Handle requests and manage tickets",
            UserRole::User => "Submit and track service requests",
        }
    }

    /// Permissions granted to the role
    pub fn permissions(&self) -> Vec<&'static str> {
        match self {
            UserRole::Admin => vec![
                "User Management",
                "System Configuration",
                "Analytics Access",
                "Report Generation",
            ],
            UserRole::Agent => vec![
                "Request Management",
                "Ticket Assignment",
                "Customer Communication",
                "Basic Reporting",
            ],
            UserRole::User => vec![
                "Submit Requests",
                "Track Progress",
                "Upload Attachments",
                "View History",
            ],
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![UserRole::Admin, UserRole::Agent, UserRole::User]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(UserRole::Admin),
            "agent" => Some(UserRole::Agent),
            "user" => Some(UserRole::User),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for r in UserRole::all() {
            assert_eq!(UserRole::from_code(r.code()), Some(r));
        }
        assert_eq!(UserRole::from_code("manager"), None);
    }
}
