use contracts::domain::brand::Brand;
use futures::FutureExt;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::config::AppConfig;
use crate::domain::brand::api;
use crate::domain::brand::ui::details::CreateBrandForm;
use crate::shared::api::use_api;
use crate::shared::components::PageHeader;
use crate::shared::data_grid::{ColumnDef, DataGrid, GridSelection, RowSelection};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::paged_list::PagedList;

fn columns() -> Vec<ColumnDef<Brand>> {
    vec![
        ColumnDef::text("logo", "", |b: &Brand| b.logo_url.clone().unwrap_or_default()).with_cell(|b: &Brand| {
            match b.logo_url.clone() {
                Some(src) => view! { <img class="thumb" src=src alt="" /> }.into_any(),
                None => view! { <span class="thumb thumb--empty"></span> }.into_any(),
            }
        }),
        ColumnDef::text("name", "Name", |b: &Brand| b.name.clone())
            .sortable()
            .filterable(),
        ColumnDef::text("description", "Description", |b: &Brand| {
            b.description.clone().unwrap_or_default()
        }),
        ColumnDef::text("is_active", "Status", |b: &Brand| {
            let label = if b.is_active { "Active" } else { "Hidden" };
            label.to_string()
        })
        .sortable(),
    ]
}

#[component]
pub fn BrandList() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let client = use_api();
    let notifications = use_notifications();
    let fetch_client = client.clone();
    let list = PagedList::new(config.grid.default_page_size, notifications, move |query| {
        let client = fetch_client.clone();
        async move { api::fetch_brands(&client, query).await }.boxed_local()
    });
    let selected = RwSignal::new(RowSelection::new());
    let (show_create_form, set_show_create_form) = signal(false);

    list.reload();

    let close = Callback::new(move |_: ()| set_show_create_form.set(false));
    let created = Callback::new(move |_: ()| {
        set_show_create_form.set(false);
        list.restart();
    });

    let delete_selected = move |_| {
        let ids = selected.with_untracked(|s| s.selected_keys());
        if ids.is_empty() {
            return;
        }
        let client = client.clone();
        spawn_local(async move {
            let mut deleted = 0;
            for id in &ids {
                match api::delete_brand(&client, id).await {
                    Ok(_) => deleted += 1,
                    Err(e) => {
                        notifications.report(&e);
                        break;
                    }
                }
            }
            if deleted > 0 {
                notifications.success(format!("Deleted {} brand(s)", deleted));
            }
            selected.update(|s| s.clear());
            list.reload();
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Brands">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| set_show_create_form.set(true)>
                    {icon("plus")}
                    " New brand"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=delete_selected
                    disabled=Signal::derive(move || selected.with(|s| s.is_empty()))
                >
                    {icon("delete")}
                    " Delete"
                </Button>
            </PageHeader>

            <div class="page__content">
                <DataGrid
                    columns=columns()
                    data=list.rows
                    is_loading=list.loading
                    pagination=list.page
                    set_pagination=list.set_pagination()
                    filter_placeholder="Filter by name..."
                    selection=GridSelection::controlled(selected, |b: &Brand| b.id.clone())
                    page_size_options=config.grid.page_size_options.clone()
                />
            </div>

            <Show when=move || show_create_form.get()>
                <CreateBrandForm on_close=close on_created=created />
            </Show>
        </div>
    }
}
