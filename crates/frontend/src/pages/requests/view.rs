use super::state::{create_state, DetailTab};
use crate::shared::badge::{PriorityBadge, StatusBadge};
use crate::shared::format::{format_date, format_datetime};
use crate::shared::icons::icon;
use contracts::data;
use contracts::domain::ServiceRequest;
use contracts::timeline::timeline_for;
use contracts::views::filter_requests;
use leptos::prelude::*;

#[component]
pub fn RequestsPage() -> impl IntoView {
    let state = create_state();

    let filtered = move || filter_requests(data::service_requests(), &state.get().q);

    let selected = move || -> Option<ServiceRequest> {
        let id = state.get().selected_id?;
        data::service_requests().iter().find(|r| r.id == id).cloned()
    };

    view! {
        <div class="page page--requests">
            <div class="page__header">
                <h1>"Request Tracking"</h1>
                <p class="page__subtitle">"Track the progress of your service requests"</p>
            </div>

            <div class="requests__columns">
                <div class="card requests__list">
                    <div class="search-box">
                        <span class="search-box__icon">{icon("search")}</span>
                        <input
                            type="text"
                            placeholder="Search requests..."
                            value=move || state.get().q
                            on:input=move |ev| {
                                let q = event_target_value(&ev);
                                state.update(|s| s.q = q);
                            }
                        />
                    </div>

                    {move || {
                        filtered()
                            .into_iter()
                            .map(|request| {
                                let id = request.id.clone();
                                let is_selected = state.get().selected_id.as_deref()
                                    == Some(request.id.as_str());
                                view! {
                                    <div
                                        class="request-card"
                                        class:request-card--selected=is_selected
                                        on:click=move |_| {
                                            let id = id.clone();
                                            state.update(|s| s.selected_id = Some(id));
                                        }
                                    >
                                        <div class="request-card__top">
                                            <h3>{request.title.clone()}</h3>
                                            <StatusBadge status=request.status />
                                        </div>
                                        <p class="request-card__description">
                                            {request.description.clone()}
                                        </p>
                                        <div class="request-card__bottom">
                                            <PriorityBadge priority=request.priority />
                                            <span class="request-card__id">
                                                {format!("#{}", request.id)}
                                            </span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div class="requests__detail">
                    {move || {
                        selected()
                            .map(|request| view! { <RequestDetail request=request state=state /> })
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn RequestDetail(
    request: ServiceRequest,
    state: RwSignal<super::state::RequestsState>,
) -> impl IntoView {
    let tab = move || state.get().tab;
    let set_tab = move |value: DetailTab| state.update(|s| s.tab = value);

    let request_for_tabs = request.clone();

    view! {
        <div class="card request-detail">
            <div class="request-detail__header">
                <div>
                    <h2>{request.title.clone()}</h2>
                    <p class="page__subtitle">{format!("Request #{}", request.id)}</p>
                </div>
                <div class="request-detail__badges">
                    <PriorityBadge priority=request.priority />
                    <StatusBadge status=request.status />
                </div>
            </div>

            <div class="request-detail__facts">
                <div class="fact">
                    <span class="fact__label">"Requester"</span>
                    <span class="fact__value">{request.requester.clone()}</span>
                </div>
                <div class="fact">
                    <span class="fact__label">"Assigned To"</span>
                    <span class="fact__value">{request.assigned_to.clone()}</span>
                </div>
                <div class="fact">
                    <span class="fact__label">"Due Date"</span>
                    <span class="fact__value">{format_date(&request.due_date)}</span>
                </div>
            </div>

            <div class="tabs">
                <button
                    class="tabs__trigger"
                    class:tabs__trigger--active=move || tab() == DetailTab::Timeline
                    on:click=move |_| set_tab(DetailTab::Timeline)
                >
                    "Timeline"
                </button>
                <button
                    class="tabs__trigger"
                    class:tabs__trigger--active=move || tab() == DetailTab::Details
                    on:click=move |_| set_tab(DetailTab::Details)
                >
                    "Details"
                </button>
                <button
                    class="tabs__trigger"
                    class:tabs__trigger--active=move || tab() == DetailTab::Attachments
                    on:click=move |_| set_tab(DetailTab::Attachments)
                >
                    "Files"
                </button>
            </div>

            {move || {
                let request = request_for_tabs.clone();
                match tab() {
                    DetailTab::Timeline => view! { <TimelineTab request=request /> }.into_any(),
                    DetailTab::Details => view! { <DetailsTab request=request /> }.into_any(),
                    DetailTab::Attachments => view! { <AttachmentsTab /> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn TimelineTab(request: ServiceRequest) -> impl IntoView {
    let steps = timeline_for(request.status);

    view! {
        <div class="timeline">
            {steps
                .into_iter()
                .map(|step| {
                    view! {
                        <div class="timeline__step">
                            <span
                                class="timeline__dot"
                                class:timeline__dot--done=step.completed
                            >
                                {step.completed.then(|| icon("check-circle"))}
                            </span>
                            <div class="timeline__body">
                                <p class:timeline__label--pending=!step.completed>
                                    {step.label}
                                </p>
                                {step
                                    .timestamp
                                    .map(|ts| view! { <p class="timeline__timestamp">{ts}</p> })}
                            </div>
                        </div>
                    }
                })
                .collect_view()}

            <div class="comments">
                <h3>"Communications"</h3>
                {data::comments()
                    .iter()
                    .map(|comment| {
                        view! {
                            <div class="comment">
                                <img class="comment__avatar" src=comment.avatar.clone() alt=comment.user.clone() />
                                <div class="comment__body">
                                    <div class="comment__meta">
                                        <span class="comment__user">{comment.user.clone()}</span>
                                        <span class="comment__timestamp">{comment.timestamp.clone()}</span>
                                    </div>
                                    <p>{comment.message.clone()}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn DetailsTab(request: ServiceRequest) -> impl IntoView {
    view! {
        <div class="request-detail__tab">
            <h3>"Description"</h3>
            <p class="request-detail__description">{request.description.clone()}</p>
            <h3>"Category"</h3>
            <p>{request.category.clone()}</p>
            <div class="request-detail__dates">
                <div>
                    <h3>"Created"</h3>
                    <p>{format_datetime(&request.created_at)}</p>
                </div>
                <div>
                    <h3>"Last Updated"</h3>
                    <p>{format_datetime(&request.updated_at)}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn AttachmentsTab() -> impl IntoView {
    view! {
        <div class="request-detail__tab request-detail__tab--empty">
            <p>"No attachments for this request"</p>
        </div>
    }
}
