use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen
const TOAST_DISMISS_MS: u32 = 4000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
}

/// Centralized fire-and-forget notification service. Pages push a toast
/// and move on; delivery and dismissal are this service's concern.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Show a toast and schedule its dismissal
    pub fn push(&self, title: &str, description: &str) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                title: title.to_string(),
                description: description.to_string(),
            })
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            toasts.update(|items| items.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|items| items.retain(|t| t.id != id));
    }

    pub fn current(&self) -> Vec<Toast> {
        self.toasts.get()
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the active toasts in a fixed corner stack
#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div class="toaster">
            {move || {
                service
                    .current()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class="toast" on:click=move |_| service.dismiss(id)>
                                <p class="toast__title">{toast.title}</p>
                                <p class="toast__description">{toast.description}</p>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
