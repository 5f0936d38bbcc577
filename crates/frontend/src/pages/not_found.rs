use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <A href="/" attr:class="btn btn--outline">"Back to Home"</A>
        </div>
    }
}
