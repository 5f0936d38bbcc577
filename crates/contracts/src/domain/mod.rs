pub mod analytics;
pub mod catalog_item;
pub mod comment;
pub mod service_request;
pub mod user;

pub use analytics::{AgentPerformance, AnalyticsSnapshot, ChartBucket, TrendPoint};
pub use catalog_item::CatalogItem;
pub use comment::Comment;
pub use service_request::ServiceRequest;
pub use user::User;
