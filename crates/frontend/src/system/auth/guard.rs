use leptos::prelude::*;

use super::context::{do_sign_in, use_auth};

/// Component that requires an authenticated session.
/// Shows the sign-in affordance instead of the gated content.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().signed_in
            fallback=|| view! { <SignInCard /> }
        >
            {children()}
        </Show>
    }
}

/// Sign-in affordance presented on gated routes
#[component]
pub fn SignInCard() -> impl IntoView {
    let (_, set_auth_state) = use_auth();

    view! {
        <div class="signin">
            <div class="card signin__card">
                <h2 class="signin__title">"Sign in required"</h2>
                <p class="signin__hint">
                    "You need an active session to view this page."
                </p>
                <button class="btn btn--gradient" on:click=move |_| do_sign_in(set_auth_state)>
                    "Sign In"
                </button>
            </div>
        </div>
    }
}
