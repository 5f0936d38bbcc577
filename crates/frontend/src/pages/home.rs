use leptos::prelude::*;
use leptos_router::components::A;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "clock",
        title: "Fast Turnaround",
        description: "Most catalog services are fulfilled within the hour.",
    },
    Feature {
        icon: "bar-chart",
        title: "Full Visibility",
        description: "Track every request from submission to closure.",
    },
    Feature {
        icon: "users",
        title: "Team Management",
        description: "Roles, permissions and departments in one place.",
    },
    Feature {
        icon: "shield",
        title: "Secure by Default",
        description: "Sessions are handled by your identity provider.",
    },
];

/// Public landing page; the only route besides the not-found fallback
/// that renders without a session.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <section class="hero">
                <h1 class="hero__title">"Service requests, without the friction"</h1>
                <p class="hero__subtitle">
                    "Submit, track and resolve IT service requests from a single dashboard."
                </p>
                <div class="hero__actions">
                    <A href="/dashboard" attr:class="btn btn--gradient">"Open Dashboard"</A>
                    <A href="/service-catalog" attr:class="btn btn--outline">"Browse Catalog"</A>
                </div>
            </section>

            <section class="features">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="card feature">
                                <span class="feature__icon">
                                    {crate::shared::icons::icon(feature.icon)}
                                </span>
                                <h3 class="feature__title">{feature.title}</h3>
                                <p class="feature__description">{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <footer class="footer">
                <p>"ServiceFlow Inc."</p>
            </footer>
        </div>
    }
}
