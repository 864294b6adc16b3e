use contracts::domain::dashboard::DashboardSummary;
use contracts::system::permissions::Capability;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::dashboard::api;
use crate::layout::left::sidebar::visible_menu_items;
use crate::shared::api::{required_data, use_api};
use crate::shared::components::stat_card::StatFormat;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::system::auth::{use_session, RequirePermission};

/// Counters from the analytics endpoint; only mounted for users who may view analytics
#[component]
fn AnalyticsCards() -> impl IntoView {
    let client = use_api();
    let notifications = use_notifications();
    let summary: RwSignal<Option<DashboardSummary>> = RwSignal::new(None);

    spawn_local(async move {
        match api::fetch_summary(&client).await.and_then(required_data) {
            Ok(s) => summary.set(Some(s)),
            Err(e) => {
                log::warn!("failed to load dashboard summary: {}", e);
                notifications.report(&e);
            }
        }
    });

    let stat = move |f: fn(&DashboardSummary) -> f64| Signal::derive(move || summary.with(|s| s.as_ref().map(f)));

    view! {
        <div class="stat-grid">
            <StatCard label="Revenue today" icon_name="orders" value=stat(|s| s.revenue_today) format=StatFormat::Money />
            <StatCard label="Orders" icon_name="orders" value=stat(|s| s.total_orders as f64) format=StatFormat::Count />
            <StatCard label="Pending orders" icon_name="calendar" value=stat(|s| s.pending_orders as f64) format=StatFormat::Count />
            <StatCard label="Products" icon_name="products" value=stat(|s| s.total_products as f64) format=StatFormat::Count />
            <StatCard label="Low stock items" icon_name="inventory" value=stat(|s| s.low_stock_items as f64) format=StatFormat::Count />
            <StatCard label="Pending returns" icon_name="returns" value=stat(|s| s.pending_returns as f64) format=StatFormat::Count />
        </div>
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_session();
    let greeting = move || {
        session
            .user()
            .map(|u| format!("Welcome back, {}", u.name))
            .unwrap_or_else(|| "Welcome".to_string())
    };

    view! {
        <div class="page">
            <PageHeader title="Dashboard" subtitle=Signal::derive(move || Some(greeting())) />

            <div class="page__content">
                <RequirePermission
                    capability=Capability::CanViewAnalytics
                    fallback=|| view! {
                        <div class="info-message">"Store analytics are available to accounts with analytics access."</div>
                    }
                >
                    <AnalyticsCards />
                </RequirePermission>

                <h2 class="section-title">"Quick links"</h2>
                <div class="quick-links">
                    {move || {
                        visible_menu_items(|c| session.has_permission(c))
                            .into_iter()
                            .filter(|item| item.path != "/")
                            .map(|item| view! {
                                <A href=item.path attr:class="quick-link">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </A>
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}
