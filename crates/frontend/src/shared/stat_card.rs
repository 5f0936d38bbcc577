use crate::shared::icons::icon;
use leptos::prelude::*;

/// Metric card used by the dashboard, user administration and analytics
/// headers: a label, a big number and a glyph.
#[component]
pub fn StatCard(
    label: &'static str,
    value: String,
    /// Icon key from `shared::icons`
    glyph: &'static str,
    /// CSS modifier for the value color, e.g. "stat-card__value--green"
    #[prop(optional)]
    tone: &'static str,
) -> impl IntoView {
    let value_class = if tone.is_empty() {
        "stat-card__value".to_string()
    } else {
        format!("stat-card__value {tone}")
    };

    view! {
        <div class="card stat-card">
            <div class="stat-card__body">
                <div>
                    <p class="stat-card__label">{label}</p>
                    <p class=value_class>{value}</p>
                </div>
                <span class="stat-card__icon">{icon(glyph)}</span>
            </div>
        </div>
    }
}
