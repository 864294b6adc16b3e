use contracts::domain::inventory::{InventoryItem, InventoryKind};
use futures::FutureExt;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::config::AppConfig;
use crate::domain::inventory::api;
use crate::shared::api::{use_api, ApiClient};
use crate::shared::components::PageHeader;
use crate::shared::data_grid::{ColumnDef, DataGrid};
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::icons::icon;
use crate::shared::notifications::{use_notifications, NotificationService};
use crate::shared::paged_list::PagedList;

/// Quantity typed into a cell: a whole number, zero or more
pub fn parse_quantity(input: &str) -> Result<i64, String> {
    let input = input.trim();
    match input.parse::<i64>() {
        Ok(q) if q >= 0 => Ok(q),
        Ok(_) => Err("Quantity cannot be negative".to_string()),
        Err(_) => Err(format!("\"{}\" is not a whole number", input)),
    }
}

fn columns(
    client: ApiClient,
    kind: RwSignal<InventoryKind>,
    list: PagedList<InventoryItem>,
    notifications: NotificationService,
) -> Vec<ColumnDef<InventoryItem>> {
    vec![
        ColumnDef::text("product", "Product", |i: &InventoryItem| i.product_name.clone())
            .sortable()
            .filterable(),
        ColumnDef::text("sku", "SKU", |i: &InventoryItem| i.sku.clone()).sortable(),
        ColumnDef::text("size", "Size", |i: &InventoryItem| i.size.clone().unwrap_or_else(|| "-".to_string())),
        ColumnDef::text("quantity", "Quantity", |i: &InventoryItem| i.quantity.to_string())
            .sortable()
            .with_cell(move |item: &InventoryItem| {
                let client = client.clone();
                let id = item.id.clone();
                let current = item.quantity;
                view! {
                    <input
                        type="number"
                        min="0"
                        class="cell-input"
                        prop:value=current.to_string()
                        on:click=move |ev| ev.stop_propagation()
                        on:change=move |ev| {
                            let quantity = match parse_quantity(&event_target_value(&ev)) {
                                Ok(q) if q == current => return,
                                Ok(q) => q,
                                Err(e) => {
                                    notifications.error(e);
                                    list.reload();
                                    return;
                                }
                            };
                            let client = client.clone();
                            let id = id.clone();
                            let kind = kind.get_untracked();
                            spawn_local(async move {
                                match api::update_quantity(&client, kind, &id, quantity).await {
                                    Ok(_) => notifications.success("Quantity updated"),
                                    Err(e) => notifications.report(&e),
                                }
                                list.reload();
                            });
                        }
                    />
                }
                .into_any()
            }),
        ColumnDef::text("updated_at", "Updated", |i: &InventoryItem| {
            format_optional_datetime(i.updated_at.as_deref())
        }),
    ]
}

#[component]
pub fn InventoryList() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let client = use_api();
    let notifications = use_notifications();
    let kind = RwSignal::new(InventoryKind::Soft);
    let fetch_client = client.clone();
    let list = PagedList::new(config.grid.default_page_size, notifications, move |query| {
        let client = fetch_client.clone();
        let kind = kind.get_untracked();
        async move { api::fetch_inventory(&client, kind, query).await }.boxed_local()
    });

    list.reload();

    let switch_to = move |next: InventoryKind| {
        if kind.get_untracked() != next {
            kind.set(next);
            list.restart();
        }
    };

    let tab = move |k: InventoryKind| {
        view! {
            <button
                class="tabs__tab"
                class:tabs__tab--active=move || kind.get() == k
                on:click=move |_| switch_to(k)
            >
                {k.label()}
            </button>
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Inventory" subtitle="Soft stock is what the storefront sells; hard stock is what the warehouse holds">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| list.reload()>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="tabs">
                {tab(InventoryKind::Soft)}
                {tab(InventoryKind::Hard)}
            </div>

            <div class="page__content">
                <DataGrid
                    columns=columns(client, kind, list, notifications)
                    data=list.rows
                    is_loading=list.loading
                    pagination=list.page
                    set_pagination=list.set_pagination()
                    filter_placeholder="Filter by product..."
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
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(" 12 "), Ok(12));
        assert_eq!(parse_quantity("0"), Ok(0));
        assert!(parse_quantity("-1").is_err());
        assert!(parse_quantity("1.5").is_err());
        assert!(parse_quantity("").is_err());
    }
}
