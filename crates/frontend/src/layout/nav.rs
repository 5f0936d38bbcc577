use crate::system::auth::context::{do_sign_in, do_sign_out, use_auth};
use leptos::prelude::*;
use leptos_router::components::A;

/// (path, label); these mirror the gated routes
const NAV_ITEMS: [(&str, &str); 6] = [
    ("/dashboard", "Dashboard"),
    ("/requests", "Requests"),
    ("/service-catalog", "Catalog"),
    ("/analytics", "Analytics"),
    ("/users", "Users"),
    ("/settings", "Settings"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <header class="nav">
            <div class="nav__inner">
                <A href="/" attr:class="nav__brand">"ServiceFlow"</A>
                <Show when=move || auth_state.get().signed_in>
                    <nav class="nav__links">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|(path, label)| {
                                view! { <A href=path attr:class="nav__link">{label}</A> }
                            })
                            .collect_view()}
                    </nav>
                </Show>
                <div class="nav__session">
                    <UserButton />
                </div>
            </div>
        </header>
    }
}

/// Profile display widget with sign-in/sign-out affordance
#[component]
pub fn UserButton() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().signed_in
            fallback=move || {
                view! {
                    <button class="btn btn--gradient" on:click=move |_| do_sign_in(set_auth_state)>
                        "Sign In"
                    </button>
                }
            }
        >
            <span class="nav__profile">{move || auth_state.get().display_name}</span>
            <button class="btn btn--outline" on:click=move |_| do_sign_out(set_auth_state)>
                "Sign Out"
            </button>
        </Show>
    }
}
