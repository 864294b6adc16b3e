use contracts::domain::return_exchange::{ReturnExchange, ReturnKind, ReturnStatus};
use futures::FutureExt;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

use crate::config::AppConfig;
use crate::domain::return_exchange::api;
use crate::shared::api::{use_api, ApiClient};
use crate::shared::components::PageHeader;
use crate::shared::data_grid::{ColumnDef, DataGrid, GridSelection, RowSelection};
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::icons::icon;
use crate::shared::notifications::{use_notifications, NotificationService};
use crate::shared::paged_list::PagedList;

fn kind_label(kind: ReturnKind) -> &'static str {
    match kind {
        ReturnKind::Return => "Return",
        ReturnKind::Exchange => "Exchange",
    }
}

fn columns() -> Vec<ColumnDef<ReturnExchange>> {
    vec![
        ColumnDef::text("order_number", "Order", |r: &ReturnExchange| r.order_number.clone())
            .sortable()
            .filterable(),
        ColumnDef::text("customer", "Customer", |r: &ReturnExchange| r.customer_name.clone()).sortable(),
        ColumnDef::text("kind", "Type", |r: &ReturnExchange| kind_label(r.kind).to_string()).sortable(),
        ColumnDef::text("reason", "Reason", |r: &ReturnExchange| r.reason.clone().unwrap_or_default()),
        ColumnDef::text("status", "Status", |r: &ReturnExchange| r.status.label().to_string())
            .sortable()
            .with_cell(|r: &ReturnExchange| {
                let class = match r.status {
                    ReturnStatus::Requested => "badge badge--warning",
                    ReturnStatus::Approved | ReturnStatus::Completed => "badge badge--success",
                    ReturnStatus::Rejected => "badge badge--muted",
                };
                view! { <span class=class>{r.status.label()}</span> }.into_any()
            }),
        ColumnDef::text("created_at", "Requested", |r: &ReturnExchange| {
            format_optional_datetime(r.created_at.as_deref())
        }),
    ]
}

/// Review every selected request with the same decision, one call per request
fn review_selected(
    client: ApiClient,
    selected: RwSignal<RowSelection>,
    list: PagedList<ReturnExchange>,
    notifications: NotificationService,
    decision: ReturnStatus,
) {
    let ids = selected.with_untracked(|s| s.selected_keys());
    if ids.is_empty() {
        return;
    }
    spawn_local(async move {
        let mut reviewed = 0;
        for id in &ids {
            match api::review(&client, id, decision, None).await {
                Ok(_) => reviewed += 1,
                Err(e) => {
                    notifications.report(&e);
                    break;
                }
            }
        }
        if reviewed > 0 {
            notifications.success(format!("{} request(s) {}", reviewed, decision.label().to_lowercase()));
        }
        selected.update(|s| s.clear());
        list.reload();
    });
}

#[component]
pub fn ReturnExchangeList() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let client = StoredValue::new(use_api());
    let notifications = use_notifications();
    let list = PagedList::new(config.grid.default_page_size, notifications, move |query| {
        let client = client.get_value();
        async move { api::fetch_returns(&client, query).await }.boxed_local()
    });
    let selected = RwSignal::new(RowSelection::new());

    list.reload();

    let decide = move |decision: ReturnStatus| {
        review_selected(client.get_value(), selected, list, notifications, decision);
    };
    let nothing_selected = Signal::derive(move || selected.with(|s| s.is_empty()));

    view! {
        <div class="page">
            <PageHeader title="Returns & exchanges" subtitle="Only requested items can be approved or rejected">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| decide(ReturnStatus::Approved)
                    disabled=nothing_selected
                >
                    "Approve"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| decide(ReturnStatus::Rejected)
                    disabled=nothing_selected
                >
                    "Reject"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| list.reload()>
                    {icon("refresh")}
                </Button>
            </PageHeader>

            <div class="page__content">
                <DataGrid
                    columns=columns()
                    data=list.rows
                    is_loading=list.loading
                    pagination=list.page
                    set_pagination=list.set_pagination()
                    filter_placeholder="Filter by order number..."
                    selection=GridSelection::controlled(selected, |r: &ReturnExchange| r.id.clone())
                    enable_row_selection=Arc::new(|r: &ReturnExchange| r.status.is_pending())
                    page_size_options=config.grid.page_size_options.clone()
                />
            </div>
        </div>
    }
}
