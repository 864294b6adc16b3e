use contracts::domain::product::Product;
use futures::future::join_all;
use futures::FutureExt;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::config::AppConfig;
use crate::domain::product::api;
use crate::shared::api::{use_api, ApiClient};
use crate::shared::components::stat_card::{format_stat, StatFormat};
use crate::shared::components::PageHeader;
use crate::shared::data_grid::{ColumnDef, DataGrid, GridSelection, RowSelection};
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::icons::icon;
use crate::shared::notifications::{use_notifications, NotificationService};
use crate::shared::paged_list::PagedList;

fn columns(client: ApiClient, list: PagedList<Product>, notifications: NotificationService) -> Vec<ColumnDef<Product>> {
    vec![
        ColumnDef::text("name", "Name", |p: &Product| p.name.clone())
            .sortable()
            .filterable(),
        ColumnDef::text("sku", "SKU", |p: &Product| p.sku.clone()).sortable(),
        ColumnDef::text("category", "Category", |p: &Product| {
            p.category_name.clone().unwrap_or_else(|| "-".to_string())
        })
        .sortable(),
        ColumnDef::text("brand", "Brand", |p: &Product| {
            p.brand_name.clone().unwrap_or_else(|| "-".to_string())
        })
        .sortable(),
        ColumnDef::text("price", "Price", |p: &Product| format_stat(p.price, StatFormat::Money)).sortable(),
        ColumnDef::text("is_active", "Active", |p: &Product| {
            let label = if p.is_active { "Yes" } else { "No" };
            label.to_string()
        })
        .with_cell(move |p: &Product| {
            let client = client.clone();
            let id = p.id.clone();
            let is_active = p.is_active;
            view! {
                <input
                    type="checkbox"
                    class="toggle"
                    prop:checked=is_active
                    on:click=move |ev| ev.stop_propagation()
                    on:change=move |_| {
                        let client = client.clone();
                        let id = id.clone();
                        spawn_local(async move {
                            match api::set_active(&client, &id, !is_active).await {
                                Ok(_) => list.reload(),
                                Err(e) => {
                                    notifications.report(&e);
                                    list.reload();
                                }
                            }
                        });
                    }
                />
            }
            .into_any()
        }),
        ColumnDef::text("created_at", "Created", |p: &Product| {
            format_optional_datetime(p.created_at.as_deref())
        }),
    ]
}

#[component]
pub fn ProductList() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let client = use_api();
    let notifications = use_notifications();
    let fetch_client = client.clone();
    let list = PagedList::new(config.grid.default_page_size, notifications, move |query| {
        let client = fetch_client.clone();
        async move { api::fetch_products(&client, query).await }.boxed_local()
    });
    let selected = RwSignal::new(RowSelection::new());
    let (deleting, set_deleting) = signal(false);

    list.reload();

    let delete_client = client.clone();
    let delete_selected = move |_| {
        let ids = selected.with_untracked(|s| s.selected_keys());
        if ids.is_empty() {
            return;
        }
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&format!("Delete {} product(s)?", ids.len())).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        set_deleting.set(true);
        let client = delete_client.clone();
        spawn_local(async move {
            let results = join_all(ids.iter().map(|id| api::delete_product(&client, id))).await;
            let failed: Vec<_> = results.into_iter().filter_map(Result::err).collect();
            let deleted = ids.len() - failed.len();
            if deleted > 0 {
                notifications.success(format!("Deleted {} product(s)", deleted));
            }
            if let Some(e) = failed.first() {
                notifications.report(e);
            }
            selected.update(|s| s.clear());
            set_deleting.set(false);
            list.reload();
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Products" subtitle="Catalogue items sold in the storefront">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=delete_selected
                    disabled=Signal::derive(move || deleting.get() || selected.with(|s| s.is_empty()))
                >
                    {icon("delete")}
                    {move || format!(" Delete ({})", selected.with(|s| s.len()))}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| list.reload()>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                // searches the whole catalogue server-side; the grid filter only sees this page
                <div class="search-bar">
                    <Input value=list.search placeholder="Search by name or SKU..." />
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| list.restart()>
                        {icon("search")}
                        " Search"
                    </Button>
                </div>
                <DataGrid
                    columns=columns(client, list, notifications)
                    data=list.rows
                    is_loading=list.loading
                    pagination=list.page
                    set_pagination=list.set_pagination()
                    filter_placeholder="Filter by name..."
                    selection=GridSelection::controlled(selected, |p: &Product| p.id.clone())
                    page_size_options=config.grid.page_size_options.clone()
                />
            </div>
        </div>
    }
}
