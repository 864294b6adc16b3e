use contracts::domain::faq::Faq;
use futures::FutureExt;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::config::AppConfig;
use crate::domain::faq::api;
use crate::domain::faq::ui::details::CreateFaqForm;
use crate::shared::api::use_api;
use crate::shared::components::PageHeader;
use crate::shared::data_grid::{ColumnDef, DataGrid, GridSelection, RowSelection};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::paged_list::PagedList;

fn columns() -> Vec<ColumnDef<Faq>> {
    vec![
        ColumnDef::text("question", "Question", |f: &Faq| f.question.clone())
            .sortable()
            .filterable(),
        ColumnDef::text("answer", "Answer", |f: &Faq| f.answer.clone()),
        ColumnDef::text("category", "Category", |f: &Faq| f.category.clone().unwrap_or_default()).sortable(),
        ColumnDef::text("sort_order", "Order", |f: &Faq| f.sort_order.to_string()).sortable(),
    ]
}

#[component]
pub fn FaqList() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let client = StoredValue::new(use_api());
    let notifications = use_notifications();
    let list = PagedList::new(config.grid.default_page_size, notifications, move |query| {
        let client = client.get_value();
        async move { api::fetch_faqs(&client, query).await }.boxed_local()
    });
    let selected = RwSignal::new(RowSelection::new());
    let (show_create_form, set_show_create_form) = signal(false);

    list.reload();

    let close = Callback::new(move |_: ()| set_show_create_form.set(false));
    let created = Callback::new(move |_: ()| {
        set_show_create_form.set(false);
        list.reload();
    });

    let delete_selected = move |_| {
        let ids = selected.with_untracked(|s| s.selected_keys());
        if ids.is_empty() {
            return;
        }
        let client = client.get_value();
        spawn_local(async move {
            for id in &ids {
                if let Err(e) = api::delete_faq(&client, id).await {
                    notifications.report(&e);
                    break;
                }
            }
            selected.update(|s| s.clear());
            list.reload();
        });
    };

    view! {
        <div class="page">
            <PageHeader title="FAQs" subtitle="Questions answered on the storefront help page">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| set_show_create_form.set(true)>
                    {icon("plus")}
                    " New FAQ"
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
                    filter_placeholder="Filter questions..."
                    selection=GridSelection::controlled(selected, |f: &Faq| f.id.clone())
                    page_size_options=config.grid.page_size_options.clone()
                />
            </div>

            <Show when=move || show_create_form.get()>
                <CreateFaqForm on_close=close on_created=created />
            </Show>
        </div>
    }
}
