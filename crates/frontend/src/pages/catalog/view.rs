use super::state::{category_options, create_state, CatalogTab};
use crate::shared::icons::icon;
use contracts::data;
use contracts::domain::CatalogItem;
use contracts::views::{category_count, filter_catalog, top_popular};
use leptos::prelude::*;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let state = create_state();

    let filtered = move || {
        let s = state.get();
        filter_catalog(data::catalog_items(), &s.q, &s.category)
    };

    view! {
        <div class="page page--catalog">
            <div class="page__header">
                <h1>"Service Catalog"</h1>
                <p class="page__subtitle">"Browse and request IT services"</p>
            </div>

            <div class="card catalog__filters">
                <div class="search-box">
                    <span class="search-box__icon">{icon("search")}</span>
                    <input
                        type="text"
                        placeholder="Search services..."
                        value=move || state.get().q
                        on:input=move |ev| {
                            let q = event_target_value(&ev);
                            state.update(|s| s.q = q);
                        }
                    />
                </div>
                <select on:change=move |ev| {
                    let category = event_target_value(&ev);
                    state.update(|s| s.category = category);
                }>
                    {category_options()
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <option
                                    value=value
                                    selected=move || state.get().category == value
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="tabs">
                <button
                    class="tabs__trigger"
                    class:tabs__trigger--active=move || state.get().tab == CatalogTab::All
                    on:click=move |_| state.update(|s| s.tab = CatalogTab::All)
                >
                    "All Services"
                </button>
                <button
                    class="tabs__trigger"
                    class:tabs__trigger--active=move || state.get().tab == CatalogTab::Popular
                    on:click=move |_| state.update(|s| s.tab = CatalogTab::Popular)
                >
                    "Popular"
                </button>
            </div>

            {move || match state.get().tab {
                CatalogTab::All => view! {
                    <div class="catalog__grid">
                        {filtered()
                            .into_iter()
                            .map(|item| view! { <ServiceCard item=item /> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
                CatalogTab::Popular => view! { <PopularTab /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ServiceCard(item: CatalogItem) -> impl IntoView {
    view! {
        <div class="card service-card">
            <div class="service-card__top">
                <span class="service-card__icon">{icon(&item.icon)}</span>
                <span class="service-card__popularity">
                    {format!("{}%", item.popularity)}
                </span>
            </div>
            <h3>{item.name.clone()}</h3>
            <p class="service-card__description">{item.description.clone()}</p>
            <div class="service-card__meta">
                <span class="badge badge--outline">{item.category.clone()}</span>
                <span class="service-card__time">{item.estimated_time.clone()}</span>
            </div>
            <button class="btn btn--gradient service-card__request">"Request Service"</button>
        </div>
    }
}

#[component]
fn PopularTab() -> impl IntoView {
    // top three by popularity, active items only
    let popular = top_popular(data::catalog_items(), 3);

    view! {
        <div class="catalog__popular">
            <h2>"Most Requested Services"</h2>
            <div class="catalog__grid catalog__grid--popular">
                {popular
                    .into_iter()
                    .map(|item| {
                        view! {
                            <div class="card service-card service-card--featured">
                                <span class="service-card__icon">{icon(&item.icon)}</span>
                                <h3>{item.name.clone()}</h3>
                                <p class="service-card__description">{item.description.clone()}</p>
                                <div class="service-card__stats">
                                    <div>
                                        <span class="service-card__stat">
                                            {format!("{}%", item.popularity)}
                                        </span>
                                        <span class="fact__label">"Popularity"</span>
                                    </div>
                                    <div>
                                        <span class="service-card__stat">
                                            {item.estimated_time.clone()}
                                        </span>
                                        <span class="fact__label">"Est. Time"</span>
                                    </div>
                                </div>
                                <button class="btn btn--gradient">"Request Now"</button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card catalog__categories">
                <h3>"Service Categories"</h3>
                <div class="catalog__category-grid">
                    {category_options()
                        .into_iter()
                        .skip(1)
                        .map(|(value, label)| {
                            let count = category_count(data::catalog_items(), value);
                            view! {
                                <div class="catalog__category">
                                    <h4>{label}</h4>
                                    <p>{format!("{count} services")}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
