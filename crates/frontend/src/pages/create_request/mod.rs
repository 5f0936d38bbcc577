mod view;

pub use view::CreateRequestPage;
