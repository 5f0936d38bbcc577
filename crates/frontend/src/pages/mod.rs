pub mod analytics;
pub mod catalog;
pub mod create_request;
pub mod dashboard;
pub mod home;
pub mod not_found;
pub mod requests;
pub mod settings;
pub mod users;

pub use analytics::AnalyticsPage;
