use crate::config::AppConfig;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api::ApiClient;
use crate::shared::notifications::{NotificationService, ToastHost};
use crate::system::auth::{api, SessionManager};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();

    // Session first: the client reads its token and reports 401s to it.
    let session = SessionManager::new();
    session.init();
    let client = ApiClient::new(&config, session);
    let notifications = NotificationService::new(config.notifications.timeout_ms);

    log::info!("admin client talking to {}", client.url(""));

    provide_context(config);
    provide_context(session);
    provide_context(client.clone());
    provide_context(notifications);
    provide_context(AppGlobalContext::new());

    api::revalidate(client, session);

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
