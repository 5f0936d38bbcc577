//! Request-creation wizard: a linear three-step form machine.
//!
//! The machine is a plain struct mutated by reducer-style transitions so
//! the step gating is testable without rendering. Advancing past an
//! invalid step is a no-op, not an error; the UI simply disables the
//! action. After submit the machine re-enters step 1 with a cleared form.

use crate::domain::ServiceRequest;
use crate::enums::{Priority, RequestStatus};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categories offered on the wizard's first step
pub const CATEGORIES: [&str; 7] = [
    "Account Access",
    "Hardware",
    "Software",
    "Network",
    "Email",
    "Security",
    "Training",
];

/// Business-impact options for the details step: (wire code, label)
pub fn impact_options() -> Vec<(&'static str, &'static str)> {
    vec![
        ("blocking", "Completely blocking my work"),
        ("slowing", "Slowing down my productivity"),
        ("minor", "Minor inconvenience"),
        ("enhancement", "Enhancement request"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    BasicInfo,
    Details,
    Review,
}

impl WizardStep {
    /// 1-based step number shown in the progress indicator
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::Details => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Information",
            WizardStep::Details => "Request Details",
            WizardStep::Review => "Review & Submit",
        }
    }
}

/// The draft form filled in across the steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestForm {
    pub title: String,
    pub category: String,
    /// Priority wire code ("low".."critical"); empty until chosen
    pub priority: String,
    pub description: String,
    pub department: String,
    /// Business-impact wire code; optional
    pub urgency: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wizard {
    step: WizardStep,
    pub form: RequestForm,
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::BasicInfo
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Whether the current step's required fields are filled.
    /// Step 1 requires title, category and priority; step 2 requires a
    /// description; the review step has no `next`.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::BasicInfo => {
                !self.form.title.is_empty()
                    && !self.form.category.is_empty()
                    && !self.form.priority.is_empty()
            }
            WizardStep::Details => !self.form.description.is_empty(),
            WizardStep::Review => false,
        }
    }

    /// Advance one step. No-op when the current step is invalid or the
    /// machine is already at the review step.
    pub fn next(&mut self) {
        if !self.can_advance() {
            return;
        }
        self.step = match self.step {
            WizardStep::BasicInfo => WizardStep::Details,
            WizardStep::Details | WizardStep::Review => WizardStep::Review,
        };
    }

    /// Retreat one step unconditionally. No-op at the first step.
    pub fn previous(&mut self) {
        self.step = match self.step {
            WizardStep::BasicInfo | WizardStep::Details => WizardStep::BasicInfo,
            WizardStep::Review => WizardStep::Details,
        };
    }

    /// Submit the draft. Only reachable from the review step: returns the
    /// completed form and resets the machine to step 1 with all fields
    /// cleared. Anywhere else it is a no-op returning `None`.
    pub fn submit(&mut self) -> Option<RequestForm> {
        if self.step != WizardStep::Review {
            return None;
        }
        let form = std::mem::take(&mut self.form);
        self.step = WizardStep::BasicInfo;
        Some(form)
    }

    /// Build a full request entity from a submitted form. The caller
    /// decides whether to keep it; the current UI raises a confirmation
    /// and discards the draft (no persistence in this application).
    pub fn into_request(form: RequestForm) -> ServiceRequest {
        let now = Utc::now();
        ServiceRequest {
            id: Uuid::new_v4().to_string(),
            title: form.title,
            description: form.description,
            category: form.category,
            priority: Priority::from_code(&form.priority).unwrap_or(Priority::Medium),
            status: RequestStatus::Open,
            requester: String::new(),
            assigned_to: String::new(),
            created_at: now,
            updated_at: now,
            due_date: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_basic() -> Wizard {
        let mut w = Wizard::new();
        w.form.title = "X".into();
        w.form.category = "Hardware".into();
        w.form.priority = "high".into();
        w
    }

    #[test]
    fn test_next_blocked_without_title() {
        let mut w = Wizard::new();
        w.form.category = "Hardware".into();
        w.form.priority = "high".into();
        w.next();
        assert_eq!(w.step(), WizardStep::BasicInfo);
    }

    #[test]
    fn test_next_advances_when_basic_info_complete() {
        let mut w = filled_basic();
        w.next();
        assert_eq!(w.step(), WizardStep::Details);
    }

    #[test]
    fn test_details_step_requires_description() {
        let mut w = filled_basic();
        w.next();
        w.next();
        assert_eq!(w.step(), WizardStep::Details);
        w.form.description = "Broken dock".into();
        w.next();
        assert_eq!(w.step(), WizardStep::Review);
    }

    #[test]
    fn test_previous_is_unconditional_and_bounded() {
        let mut w = filled_basic();
        w.next();
        w.previous();
        assert_eq!(w.step(), WizardStep::BasicInfo);
        w.previous();
        assert_eq!(w.step(), WizardStep::BasicInfo);
    }

    #[test]
    fn test_submit_only_from_review() {
        let mut w = filled_basic();
        assert!(w.submit().is_none());
        w.next();
        assert!(w.submit().is_none());
    }

    #[test]
    fn test_submit_clears_form_and_restarts() {
        let mut w = filled_basic();
        w.form.description = "Broken dock".into();
        w.next();
        w.next();
        assert_eq!(w.step(), WizardStep::Review);
        let submitted = w.submit().expect("submit from review");
        assert_eq!(submitted.title, "X");
        assert_eq!(w.step(), WizardStep::BasicInfo);
        assert_eq!(w.form, RequestForm::default());
    }

    #[test]
    fn test_into_request_initializes_open() {
        let mut form = RequestForm::default();
        form.title = "VPN access".into();
        form.priority = "critical".into();
        let request = Wizard::into_request(form);
        assert_eq!(request.status, crate::enums::RequestStatus::Open);
        assert_eq!(request.priority, crate::enums::Priority::Critical);
        assert!(request.updated_at >= request.created_at);
    }
}
