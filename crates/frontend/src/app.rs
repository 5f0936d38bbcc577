use crate::routes::AppRoutes;
use crate::shared::toast::{ToastService, Toaster};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the toast service to the whole app via context.
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <Toaster />
            <AppRoutes />
        </AuthProvider>
    }
}
