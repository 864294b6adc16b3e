use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::ApiError;
use super::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast--success",
            NotificationKind::Error => "toast toast--error",
            NotificationKind::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub message: String,
}

/// Transient notifications shown in the corner of the screen
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    timeout_ms: u32,
}

/// Get the `NotificationService` provided by `App`
pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

impl NotificationService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            timeout_ms,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NotificationKind::Info, message.into());
    }

    /// Surface a failed API call. Session expiry is announced by the login screen instead.
    pub fn report(&self, error: &ApiError) {
        if !error.is_session_expired() {
            self.error(error.to_string());
        }
    }

    pub fn dismiss(&self, id: &str) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    fn push(&self, kind: NotificationKind, message: String) {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.update(|items| {
            items.push(Notification {
                id: id.clone(),
                kind,
                message,
            })
        });

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.timeout_ms).await;
            this.dismiss(&id);
        });
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toast-host">
            <For
                each=move || notifications.items.get()
                key=|n| n.id.clone()
                children=move |n| {
                    let id = n.id.clone();
                    view! {
                        <div class=n.kind.class() role="status">
                            <span class="toast__message">{n.message}</span>
                            <button class="toast__close" on:click=move |_| notifications.dismiss(&id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
