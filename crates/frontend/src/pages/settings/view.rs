use super::state::{create_state, SettingsState, SettingsTab};
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let state = create_state();
    let toast = use_context::<ToastService>().expect("ToastService not provided in context");

    let save_section = move |section: &'static str| {
        toast.push(
            "Settings Saved",
            &format!("{section} settings have been updated successfully."),
        );
    };

    let tab_button = move |tab: SettingsTab, label: &'static str| {
        view! {
            <button
                class="tabs__trigger"
                class:tabs__trigger--active=move || state.get().tab == tab
                on:click=move |_| state.update(|s| s.tab = tab)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="page page--settings">
            <div class="page__header">
                <h1>"Settings"</h1>
                <p class="page__subtitle">"Manage your workspace configuration"</p>
            </div>

            <div class="tabs">
                {tab_button(SettingsTab::General, "General")}
                {tab_button(SettingsTab::Notifications, "Notifications")}
                {tab_button(SettingsTab::Security, "Security")}
                {tab_button(SettingsTab::Integrations, "Integrations")}
            </div>

            {move || match state.get().tab {
                SettingsTab::General => {
                    view! { <GeneralTab state=state on_save=save_section /> }.into_any()
                }
                SettingsTab::Notifications => {
                    view! { <NotificationsTab state=state on_save=save_section /> }.into_any()
                }
                SettingsTab::Security => {
                    view! { <SecurityTab state=state on_save=save_section /> }.into_any()
                }
                SettingsTab::Integrations => {
                    view! { <IntegrationsTab state=state on_save=save_section /> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn GeneralTab(
    state: RwSignal<SettingsState>,
    on_save: impl Fn(&'static str) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="card settings__section">
            <h3>"General Settings"</h3>
            <p class="page__subtitle">"Basic workspace information and localization"</p>

            <div class="settings__field">
                <label>"Company Name"</label>
                <input
                    type="text"
                    prop:value=move || state.get().general.company_name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.general.company_name = value);
                    }
                />
            </div>

            <div class="settings__field">
                <label>"Timezone"</label>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.general.timezone = value);
                }>
                    {["UTC-8", "UTC-5", "UTC+0", "UTC+1", "UTC+8"]
                        .into_iter()
                        .map(|tz| {
                            view! {
                                <option
                                    value=tz
                                    selected=move || state.get().general.timezone == tz
                                >
                                    {tz}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="settings__field">
                <label>"Date Format"</label>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.general.date_format = value);
                }>
                    {["MM/DD/YYYY", "DD/MM/YYYY", "YYYY-MM-DD"]
                        .into_iter()
                        .map(|fmt| {
                            view! {
                                <option
                                    value=fmt
                                    selected=move || state.get().general.date_format == fmt
                                >
                                    {fmt}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="settings__field">
                <label>"Language"</label>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.general.language = value);
                }>
                    {[("en", "English"), ("es", "Spanish"), ("fr", "French"), ("de", "German")]
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <option
                                    value=value
                                    selected=move || state.get().general.language == value
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <button class="btn btn--gradient" on:click=move |_| on_save("General")>
                "Save Changes"
            </button>
        </div>
    }
}

#[component]
fn NotificationsTab(
    state: RwSignal<SettingsState>,
    on_save: impl Fn(&'static str) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="card settings__section">
            <h3>"Notification Preferences"</h3>
            <p class="page__subtitle">"Choose how the team gets notified about request activity"</p>

            <div class="settings__toggle">
                <div>
                    <label>"Email Notifications"</label>
                    <p class="page__subtitle">"Receive updates by email"</p>
                </div>
                <input
                    type="checkbox"
                    prop:checked=move || state.get().notifications.email_enabled
                    on:change=move |_| {
                        state.update(|s| {
                            s.notifications.email_enabled = !s.notifications.email_enabled
                        });
                    }
                />
            </div>

            <div class="settings__toggle">
                <div>
                    <label>"SMS Notifications"</label>
                    <p class="page__subtitle">"Receive urgent alerts by text message"</p>
                </div>
                <input
                    type="checkbox"
                    prop:checked=move || state.get().notifications.sms_enabled
                    on:change=move |_| {
                        state.update(|s| {
                            s.notifications.sms_enabled = !s.notifications.sms_enabled
                        });
                    }
                />
            </div>

            <div class="settings__toggle">
                <div>
                    <label>"Push Notifications"</label>
                    <p class="page__subtitle">"Receive browser push notifications"</p>
                </div>
                <input
                    type="checkbox"
                    prop:checked=move || state.get().notifications.push_enabled
                    on:change=move |_| {
                        state.update(|s| {
                            s.notifications.push_enabled = !s.notifications.push_enabled
                        });
                    }
                />
            </div>

            <div class="settings__field">
                <label>"Digest Frequency"</label>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.notifications.digest_frequency = value);
                }>
                    {[("realtime", "Real-time"), ("daily", "Daily"), ("weekly", "Weekly")]
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <option
                                    value=value
                                    selected=move || {
                                        state.get().notifications.digest_frequency == value
                                    }
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <button class="btn btn--gradient" on:click=move |_| on_save("Notification")>
                "Save Changes"
            </button>
        </div>
    }
}

#[component]
fn SecurityTab(
    state: RwSignal<SettingsState>,
    on_save: impl Fn(&'static str) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="card settings__section">
            <h3>"Security Settings"</h3>
            <p class="page__subtitle">"Authentication and credential policies"</p>

            <div class="settings__toggle">
                <div>
                    <label>"Two-Factor Authentication"</label>
                    <p class="page__subtitle">"Require a second factor at sign-in"</p>
                </div>
                <input
                    type="checkbox"
                    prop:checked=move || state.get().security.two_factor_enabled
                    on:change=move |_| {
                        state.update(|s| {
                            s.security.two_factor_enabled = !s.security.two_factor_enabled
                        });
                    }
                />
            </div>

            <div class="settings__field">
                <label>"Session Timeout (hours)"</label>
                <input
                    type="text"
                    prop:value=move || state.get().security.session_timeout
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.security.session_timeout = value);
                    }
                />
            </div>

            <div class="settings__field">
                <label>"Password Expiry (days)"</label>
                <input
                    type="text"
                    prop:value=move || state.get().security.password_expiry
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.security.password_expiry = value);
                    }
                />
            </div>

            <div class="settings__field">
                <label>"API Key Rotation"</label>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.security.api_key_rotation = value);
                }>
                    {[("weekly", "Weekly"), ("monthly", "Monthly"), ("quarterly", "Quarterly")]
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <option
                                    value=value
                                    selected=move || {
                                        state.get().security.api_key_rotation == value
                                    }
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <button class="btn btn--gradient" on:click=move |_| on_save("Security")>
                "Save Changes"
            </button>
        </div>
    }
}

#[component]
fn IntegrationsTab(
    state: RwSignal<SettingsState>,
    on_save: impl Fn(&'static str) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="card settings__section">
            <h3>"Integrations"</h3>
            <p class="page__subtitle">"Connect external services and data pipelines"</p>

            <div class="settings__field">
                <label>"Email Provider"</label>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.integrations.email_provider = value);
                }>
                    {[("smtp", "SMTP"), ("sendgrid", "SendGrid"), ("ses", "Amazon SES")]
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <option
                                    value=value
                                    selected=move || {
                                        state.get().integrations.email_provider == value
                                    }
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="settings__field">
                <label>"Webhook URL"</label>
                <input
                    type="text"
                    placeholder="https://example.com/webhooks/serviceflow"
                    prop:value=move || state.get().integrations.webhook_url
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.integrations.webhook_url = value);
                    }
                />
            </div>

            <div class="settings__field">
                <label>"API Key"</label>
                <input
                    type="password"
                    placeholder="Enter API key"
                    prop:value=move || state.get().integrations.api_key
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.integrations.api_key = value);
                    }
                />
            </div>

            <div class="settings__field">
                <label>"Database Backup"</label>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.integrations.database_backup = value);
                }>
                    {[("hourly", "Hourly"), ("daily", "Daily"), ("weekly", "Weekly")]
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <option
                                    value=value
                                    selected=move || {
                                        state.get().integrations.database_backup == value
                                    }
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <button class="btn btn--gradient" on:click=move |_| on_save("Integration")>
                "Save Changes"
            </button>
        </div>
    }
}
