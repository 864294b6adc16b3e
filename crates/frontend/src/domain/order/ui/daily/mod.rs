use contracts::domain::inventory::InventoryKind;
use contracts::domain::order::StockStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::inventory::api as inventory_api;
use crate::domain::order::api;
use crate::domain::order::workflow::{batch_request, build_rows, override_status, Availability, DailyLineRow};
use crate::shared::api::{required_data, use_api, RequestTracker};
use crate::shared::components::PageHeader;
use crate::shared::data_grid::{ColumnDef, DataGrid, GridSelection, PageState, RowSelection};
use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;

/// Page size used while reading the whole soft inventory
const INVENTORY_PAGE_SIZE: usize = 500;

fn columns(rows: RwSignal<Vec<DailyLineRow>>) -> Vec<ColumnDef<DailyLineRow>> {
    vec![
        ColumnDef::text("order_number", "Order", |r: &DailyLineRow| r.line.order_number.clone())
            .sortable()
            .filterable(),
        ColumnDef::text("product", "Product", |r: &DailyLineRow| r.line.product_name.clone()).sortable(),
        ColumnDef::text("sku", "SKU", |r: &DailyLineRow| r.line.sku.clone()),
        ColumnDef::text("size", "Size", |r: &DailyLineRow| r.line.size.clone().unwrap_or_else(|| "-".to_string())),
        ColumnDef::text("ordered", "Ordered", |r: &DailyLineRow| r.line.quantity.to_string()).sortable(),
        ColumnDef::text("available", "Soft stock", |r: &DailyLineRow| {
            r.available.map(|a| a.to_string()).unwrap_or_else(|| "no record".to_string())
        })
        .sortable(),
        ColumnDef::text("status", "Stock status", |r: &DailyLineRow| r.status.label().to_string())
            .sortable()
            .with_cell(move |r: &DailyLineRow| {
                let id = r.line.id.clone();
                let current = r.status;
                let class = if r.overridden { "cell-select cell-select--manual" } else { "cell-select" };
                view! {
                    <select
                        class=class
                        prop:value=current.key()
                        on:click=move |ev| ev.stop_propagation()
                        on:change=move |ev| {
                            if let Some(status) = StockStatus::from_key(&event_target_value(&ev)) {
                                rows.update(|rows| override_status(rows, &id, status));
                            }
                        }
                    >
                        {StockStatus::CHOICES
                            .into_iter()
                            .map(|s| view! { <option value=s.key() selected={s == current}>{s.label()}</option> })
                            .collect_view()}
                    </select>
                }
                .into_any()
            }),
    ]
}

#[component]
pub fn DailyOrders() -> impl IntoView {
    let client = StoredValue::new(use_api());
    let notifications = use_notifications();
    let date = StoredValue::new(today_iso());
    let rows: RwSignal<Vec<DailyLineRow>> = RwSignal::new(Vec::new());
    let selected = RwSignal::new(RowSelection::new());
    let (loading, set_loading) = signal(false);
    let (submitting, set_submitting) = signal(false);
    let tracker = StoredValue::new(RequestTracker::new());

    let load = move || {
        let client = client.get_value();
        let tracker = tracker.get_value();
        let ticket = tracker.begin();
        set_loading.set(true);
        spawn_local(async move {
            let day = date.get_value();
            let (lines, stock) = futures::join!(
                api::fetch_daily_lines(&client, &day),
                inventory_api::fetch_all_inventory(&client, InventoryKind::Soft, INVENTORY_PAGE_SIZE),
            );
            if !tracker.is_current(ticket) {
                log::debug!("discarding stale daily orders response");
                return;
            }
            match (lines.and_then(required_data), stock) {
                (Ok(lines), Ok(stock)) => {
                    let availability = Availability::from_items(&stock);
                    rows.set(build_rows(lines.into_items(), &availability));
                }
                (Err(e), _) | (_, Err(e)) => {
                    log::warn!("failed to load daily orders: {}", e);
                    rows.set(Vec::new());
                    notifications.report(&e);
                }
            }
            selected.update(|s| s.clear());
            set_loading.set(false);
        });
    };

    load();

    let submit = move || {
        let dto = rows.with_untracked(|rows| {
            selected.with_untracked(|sel| batch_request(&date.get_value(), rows, |id| sel.is_selected(id)))
        });
        let dto = match dto {
            Ok(dto) => dto,
            Err(e) => {
                notifications.error(e.to_string());
                return;
            }
        };

        set_submitting.set(true);
        let client = client.get_value();
        spawn_local(async move {
            match api::create_order_placed_batch(&client, &dto).await {
                Ok(_) => {
                    notifications.success(format!("Order-placed batch created with {} line(s)", dto.lines.len()));
                    load();
                }
                Err(e) => notifications.report(&e),
            }
            set_submitting.set(false);
        });
    };

    let unknown_selected = Memo::new(move |_| {
        rows.with(|rows| {
            selected.with(|sel| {
                rows.iter()
                    .filter(|r| sel.is_selected(&r.line.id) && r.status == StockStatus::Unknown)
                    .count()
            })
        })
    });
    let page = Signal::derive(move || PageState::new(rows.with(|r| r.len()).max(1)));

    view! {
        <div class="page">
            <PageHeader title="Daily orders" subtitle=format!("Order lines placed on {}", format_date(&date.get_value()))>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| submit()
                    disabled=Signal::derive(move || {
                        submitting.get() || selected.with(|s| s.is_empty()) || unknown_selected.get() > 0
                    })
                >
                    {icon("plus")}
                    " Create batch"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <Show when=move || { unknown_selected.get() > 0 }>
                <div class="warning-message">
                    {move || format!(
                        "{} selected line(s) have no stock record. Pick a status before creating the batch.",
                        unknown_selected.get()
                    )}
                </div>
            </Show>

            <div class="page__content">
                <DataGrid
                    columns=columns(rows)
                    data=rows
                    is_loading=loading
                    pagination=page
                    set_pagination=Callback::new(|_: PageState| {})
                    filter_placeholder="Filter by order number..."
                    selection=GridSelection::controlled(selected, |r: &DailyLineRow| r.line.id.clone())
                />
            </div>
        </div>
    }
}
