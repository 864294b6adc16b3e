use contracts::domain::category::Category;
use futures::FutureExt;
use leptos::prelude::*;
use thaw::*;

use crate::config::AppConfig;
use crate::domain::category::api;
use crate::domain::category::ui::details::CreateCategoryForm;
use crate::shared::api::use_api;
use crate::shared::components::PageHeader;
use crate::shared::data_grid::{ColumnDef, DataGrid, GridSelection};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::paged_list::PagedList;

fn columns() -> Vec<ColumnDef<Category>> {
    vec![
        ColumnDef::text("image", "", |c: &Category| c.image_url.clone().unwrap_or_default()).with_cell(
            |c: &Category| match c.image_url.clone() {
                Some(src) => view! { <img class="thumb" src=src alt="" /> }.into_any(),
                None => view! { <span class="thumb thumb--empty"></span> }.into_any(),
            },
        ),
        ColumnDef::text("name", "Name", |c: &Category| c.name.clone())
            .sortable()
            .filterable(),
        ColumnDef::text("slug", "Slug", |c: &Category| c.slug.clone()),
        ColumnDef::text("parent", "Parent", |c: &Category| {
            c.parent_name.clone().unwrap_or_else(|| "-".to_string())
        })
        .sortable(),
        ColumnDef::text("product_count", "Products", |c: &Category| c.product_count.to_string()).sortable(),
    ]
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let client = use_api();
    let list = PagedList::new(config.grid.default_page_size, use_notifications(), move |query| {
        let client = client.clone();
        async move { api::fetch_categories(&client, query).await }.boxed_local()
    });
    let (show_create_form, set_show_create_form) = signal(false);

    list.reload();

    let close = Callback::new(move |_: ()| set_show_create_form.set(false));
    let created = Callback::new(move |_: ()| {
        set_show_create_form.set(false);
        list.restart();
    });

    view! {
        <div class="page">
            <PageHeader title="Categories">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| set_show_create_form.set(true)>
                    {icon("plus")}
                    " New category"
                </Button>
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
                    filter_placeholder="Filter by name..."
                    selection=GridSelection::Uncontrolled
                    page_size_options=config.grid.page_size_options.clone()
                />
            </div>

            <Show when=move || show_create_form.get()>
                <CreateCategoryForm on_close=close on_created=created />
            </Show>
        </div>
    }
}
