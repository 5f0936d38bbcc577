mod state;
mod view;

pub use view::UsersPage;
