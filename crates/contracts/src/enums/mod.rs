pub mod colors;
pub mod priority;
pub mod request_status;
pub mod user_role;
pub mod user_status;

pub use colors::{priority_color, role_color, status_color, DEFAULT_COLOR};
pub use priority::Priority;
pub use request_status::RequestStatus;
pub use user_role::UserRole;
pub use user_status::UserStatus;
