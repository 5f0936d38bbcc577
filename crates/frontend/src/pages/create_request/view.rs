use crate::shared::toast::ToastService;
use contracts::enums::Priority;
use contracts::wizard::{impact_options, Wizard, WizardStep, CATEGORIES};
use leptos::prelude::*;

#[component]
pub fn CreateRequestPage() -> impl IntoView {
    let wizard = RwSignal::new(Wizard::new());
    let toast = use_context::<ToastService>().expect("ToastService not provided in context");

    let step = move || wizard.get().step();
    let can_advance = move || wizard.get().can_advance();

    let on_submit = move |_| {
        let submitted = wizard.try_update(|w| w.submit()).flatten();
        if submitted.is_some() {
            // The draft is deliberately discarded: this application has no
            // persistence layer. `Wizard::into_request` is the seam where
            // a real deployment would append to a store.
            toast.push(
                "Request Submitted",
                "Your service request has been submitted successfully. \
                 You'll receive updates via email.",
            );
        }
    };

    view! {
        <div class="page page--create">
            <div class="page__header">
                <h1>"Create Service Request"</h1>
                <p class="page__subtitle">"Submit a new service request to our support team"</p>
            </div>

            <ProgressIndicator step=Signal::derive(step) />

            <div class="card wizard">
                {move || match step() {
                    WizardStep::BasicInfo => view! { <BasicInfoStep wizard=wizard /> }.into_any(),
                    WizardStep::Details => view! { <DetailsStep wizard=wizard /> }.into_any(),
                    WizardStep::Review => view! { <ReviewStep wizard=wizard /> }.into_any(),
                }}

                <div class="wizard__nav">
                    <button
                        class="btn btn--outline"
                        disabled=move || step() == WizardStep::BasicInfo
                        on:click=move |_| wizard.update(|w| w.previous())
                    >
                        "Previous"
                    </button>

                    <Show
                        when=move || step() != WizardStep::Review
                        fallback=move || {
                            view! {
                                <button class="btn btn--gradient" on:click=on_submit>
                                    "Submit Request"
                                </button>
                            }
                        }
                    >
                        <button
                            class="btn btn--gradient"
                            disabled=move || !can_advance()
                            on:click=move |_| wizard.update(|w| w.next())
                        >
                            "Next"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProgressIndicator(step: Signal<WizardStep>) -> impl IntoView {
    view! {
        <div class="wizard__progress">
            <div class="wizard__steps">
                {[WizardStep::BasicInfo, WizardStep::Details, WizardStep::Review]
                    .into_iter()
                    .map(|marker| {
                        view! {
                            <span
                                class="wizard__step-dot"
                                class:wizard__step-dot--reached=move || {
                                    step.get().number() >= marker.number()
                                }
                            >
                                {marker.number()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="wizard__caption">
                {move || {
                    let current = step.get();
                    format!("Step {} of 3: {}", current.number(), current.title())
                }}
            </p>
        </div>
    }
}

#[component]
fn BasicInfoStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    view! {
        <div class="wizard__form">
            <h2>"Basic Information"</h2>

            <label class="field">
                <span>"Request Title *"</span>
                <input
                    type="text"
                    placeholder="Brief description of your request"
                    value=move || wizard.get().form.title.clone()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        wizard.update(|w| w.form.title = value);
                    }
                />
            </label>

            <label class="field">
                <span>"Category *"</span>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| w.form.category = value);
                }>
                    <option value="" selected=move || wizard.get().form.category.is_empty()>
                        "Select a category"
                    </option>
                    {CATEGORIES
                        .into_iter()
                        .map(|category| {
                            view! {
                                <option
                                    value=category
                                    selected=move || wizard.get().form.category == category
                                >
                                    {category}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>

            <label class="field">
                <span>"Priority *"</span>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| w.form.priority = value);
                }>
                    <option value="" selected=move || wizard.get().form.priority.is_empty()>
                        "Select priority level"
                    </option>
                    {Priority::all()
                        .into_iter()
                        .map(|priority| {
                            view! {
                                <option
                                    value=priority.code()
                                    selected=move || wizard.get().form.priority == priority.code()
                                >
                                    {priority.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>

            <label class="field">
                <span>"Department"</span>
                <input
                    type="text"
                    placeholder="Your department"
                    value=move || wizard.get().form.department.clone()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        wizard.update(|w| w.form.department = value);
                    }
                />
            </label>
        </div>
    }
}

#[component]
fn DetailsStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    view! {
        <div class="wizard__form">
            <h2>"Request Details"</h2>

            <label class="field">
                <span>"Detailed Description *"</span>
                <textarea
                    placeholder="Provide a detailed description of your request, including any error messages or specific requirements..."
                    prop:value=move || wizard.get().form.description.clone()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        wizard.update(|w| w.form.description = value);
                    }
                ></textarea>
            </label>

            <label class="field">
                <span>"Business Impact"</span>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| w.form.urgency = value);
                }>
                    <option value="" selected=move || wizard.get().form.urgency.is_empty()>
                        "How does this impact your work?"
                    </option>
                    {impact_options()
                        .into_iter()
                        .map(|(code, label)| {
                            view! {
                                <option
                                    value=code
                                    selected=move || wizard.get().form.urgency == code
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
        </div>
    }
}

#[component]
fn ReviewStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let field = |value: String| {
        if value.is_empty() {
            "Not specified".to_string()
        } else {
            value
        }
    };

    view! {
        <div class="wizard__form">
            <h2>"Review & Submit"</h2>

            <div class="wizard__summary">
                <div class="wizard__summary-grid">
                    <div>
                        <span class="fact__label">"Title"</span>
                        <p>{move || field(wizard.get().form.title.clone())}</p>
                    </div>
                    <div>
                        <span class="fact__label">"Category"</span>
                        <p>{move || field(wizard.get().form.category.clone())}</p>
                    </div>
                    <div>
                        <span class="fact__label">"Priority"</span>
                        <p>{move || field(wizard.get().form.priority.clone())}</p>
                    </div>
                    <div>
                        <span class="fact__label">"Department"</span>
                        <p>{move || field(wizard.get().form.department.clone())}</p>
                    </div>
                </div>
                <div>
                    <span class="fact__label">"Description"</span>
                    <p>{move || field(wizard.get().form.description.clone())}</p>
                </div>
                <div>
                    <span class="fact__label">"Business Impact"</span>
                    <p>{move || field(wizard.get().form.urgency.clone())}</p>
                </div>
            </div>

            <div class="wizard__notice">
                <p class="wizard__notice-title">"What happens next?"</p>
                <p>
                    "Your request will be reviewed and assigned to the appropriate team member. \
                     You'll receive email updates as your request progresses."
                </p>
            </div>
        </div>
    }
}
