//! Named-route surface of the application. Every route except the landing
//! page and the not-found fallback requires an authenticated session.

use crate::layout::nav::NavBar;
use crate::pages::catalog::CatalogPage;
use crate::pages::create_request::CreateRequestPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::requests::RequestsPage;
use crate::pages::settings::SettingsPage;
use crate::pages::users::UsersPage;
use crate::pages::AnalyticsPage;
use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <NavBar />
            <main class="app__main">
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage />
                    <Route
                        path=path!("/dashboard")
                        view=|| view! { <RequireAuth><DashboardPage /></RequireAuth> }
                    />
                    <Route
                        path=path!("/requests")
                        view=|| view! { <RequireAuth><RequestsPage /></RequireAuth> }
                    />
                    <Route
                        path=path!("/create-request")
                        view=|| view! { <RequireAuth><CreateRequestPage /></RequireAuth> }
                    />
                    <Route
                        path=path!("/service-catalog")
                        view=|| view! { <RequireAuth><CatalogPage /></RequireAuth> }
                    />
                    <Route
                        path=path!("/analytics")
                        view=|| view! { <RequireAuth><AnalyticsPage /></RequireAuth> }
                    />
                    <Route
                        path=path!("/users")
                        view=|| view! { <RequireAuth><UsersPage /></RequireAuth> }
                    />
                    <Route
                        path=path!("/settings")
                        view=|| view! { <RequireAuth><SettingsPage /></RequireAuth> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
