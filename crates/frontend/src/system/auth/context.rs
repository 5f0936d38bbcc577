use leptos::prelude::*;

use super::storage;

/// Opaque authentication state: the application only ever asks "is there
/// a session" plus the profile strings to display. Credentials live with
/// the external identity provider.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub signed_in: bool,
    pub display_name: String,
    pub email: String,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let initial = match storage::get_session() {
        Some((name, email)) => AuthState {
            signed_in: true,
            display_name: name,
            email,
        },
        None => AuthState::default(),
    };
    let (auth_state, set_auth_state) = signal(initial);

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Establish the demo session. A real deployment delegates this to the
/// identity provider's own sign-in flow.
pub fn do_sign_in(set_auth_state: WriteSignal<AuthState>) {
    let name = "Sarah Johnson";
    let email = "sarah.johnson@company.com";
    log::info!("session established for {email}");
    storage::save_session(name, email);
    set_auth_state.set(AuthState {
        signed_in: true,
        display_name: name.to_string(),
        email: email.to_string(),
    });
}

pub fn do_sign_out(set_auth_state: WriteSignal<AuthState>) {
    log::info!("session cleared");
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
