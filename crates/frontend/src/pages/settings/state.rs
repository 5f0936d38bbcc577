use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingsTab {
    General,
    Notifications,
    Security,
    Integrations,
}

impl Default for SettingsTab {
    fn default() -> Self {
        SettingsTab::General
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneralSettings {
    pub company_name: String,
    pub timezone: String,
    pub date_format: String,
    pub language: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            company_name: "ServiceFlow Inc.".to_string(),
            timezone: "UTC-5".to_string(),
            date_format: "MM/DD/YYYY".to_string(),
            language: "en".to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub push_enabled: bool,
    pub digest_frequency: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_enabled: true,
            sms_enabled: false,
            push_enabled: true,
            digest_frequency: "daily".to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SecuritySettings {
    pub two_factor_enabled: bool,
    pub session_timeout: String,
    pub password_expiry: String,
    pub api_key_rotation: String,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            two_factor_enabled: false,
            session_timeout: "8".to_string(),
            password_expiry: "90".to_string(),
            api_key_rotation: "monthly".to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IntegrationSettings {
    pub email_provider: String,
    pub webhook_url: String,
    pub api_key: String,
    pub database_backup: String,
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        Self {
            email_provider: "smtp".to_string(),
            webhook_url: String::new(),
            api_key: String::new(),
            database_backup: "daily".to_string(),
        }
    }
}

/// Draft workspace settings. Edits stay local until the matching
/// section's save button confirms them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SettingsState {
    pub tab: SettingsTab,
    pub general: GeneralSettings,
    pub notifications: NotificationSettings,
    pub security: SecuritySettings,
    pub integrations: IntegrationSettings,
}

pub fn create_state() -> RwSignal<SettingsState> {
    RwSignal::new(SettingsState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_workspace_profile() {
        let state = SettingsState::default();
        assert_eq!(state.general.company_name, "ServiceFlow Inc.");
        assert_eq!(state.general.timezone, "UTC-5");
        assert!(state.notifications.email_enabled);
        assert!(!state.notifications.sms_enabled);
        assert!(!state.security.two_factor_enabled);
        assert_eq!(state.integrations.database_backup, "daily");
    }

    #[test]
    fn state_round_trips_through_json() {
        let mut state = SettingsState::default();
        state.tab = SettingsTab::Security;
        state.security.two_factor_enabled = true;

        let json = serde_json::to_string(&state).unwrap();
        let restored: SettingsState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.tab, SettingsTab::Security);
        assert!(restored.security.two_factor_enabled);
        assert_eq!(restored.general.language, "en");
    }
}
