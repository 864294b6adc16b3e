use contracts::domain::order::{Order, OrderStatus};
use futures::FutureExt;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::config::AppConfig;
use crate::domain::order::api;
use crate::shared::api::use_api;
use crate::shared::components::stat_card::{format_stat, StatFormat};
use crate::shared::components::PageHeader;
use crate::shared::data_grid::{ColumnDef, DataGrid};
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::paged_list::PagedList;

fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge badge--warning",
        OrderStatus::Confirmed | OrderStatus::OrderPlaced => "badge badge--info",
        OrderStatus::Shipped | OrderStatus::Delivered => "badge badge--success",
        OrderStatus::Cancelled => "badge badge--muted",
    }
}

fn columns() -> Vec<ColumnDef<Order>> {
    vec![
        ColumnDef::text("order_number", "Order", |o: &Order| o.order_number.clone())
            .sortable()
            .filterable(),
        ColumnDef::text("customer", "Customer", |o: &Order| o.customer_name.clone()).sortable(),
        ColumnDef::text("status", "Status", |o: &Order| o.status.label().to_string())
            .sortable()
            .with_cell(|o: &Order| {
                view! { <span class=status_class(o.status)>{o.status.label()}</span> }.into_any()
            }),
        ColumnDef::text("items", "Items", |o: &Order| o.item_count.to_string()).sortable(),
        ColumnDef::text("total", "Total", |o: &Order| format_stat(o.total_amount, StatFormat::Money)).sortable(),
        ColumnDef::text("created_at", "Placed", |o: &Order| format_optional_datetime(o.created_at.as_deref())),
    ]
}

#[component]
pub fn OrderList() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let client = use_api();
    let list = PagedList::new(config.grid.default_page_size, use_notifications(), move |query| {
        let client = client.clone();
        async move { api::fetch_orders(&client, query).await }.boxed_local()
    });

    list.reload();

    view! {
        <div class="page">
            <PageHeader title="Orders" subtitle=Signal::derive(move || Some(format!("{} order(s)", list.total.get())))>
                <A href="/orders/daily" attr:class="btn-link">
                    {icon("calendar")}
                    " Today's orders"
                </A>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| list.reload()>
                    {icon("refresh")}
                    " Refresh"
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
                    page_size_options=config.grid.page_size_options.clone()
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_a_badge() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::OrderPlaced,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert!(status_class(status).starts_with("badge "));
        }
    }
}
