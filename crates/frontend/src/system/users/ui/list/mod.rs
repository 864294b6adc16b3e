use contracts::system::permissions::{Capability, CapabilitySet};
use contracts::system::users::User;
use futures::FutureExt;
use leptos::prelude::*;
use thaw::*;

use crate::config::AppConfig;
use crate::shared::api::use_api;
use crate::shared::components::PageHeader;
use crate::shared::data_grid::{ColumnDef, DataGrid};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::paged_list::PagedList;
use crate::system::users::api;
use crate::system::users::ui::details::{CreateUserForm, EditUserForm};

/// Comma-separated labels of the granted capabilities
pub fn permission_summary(permissions: Option<&CapabilitySet>) -> String {
    let granted = permissions.map(CapabilitySet::granted).unwrap_or_default();
    if granted.is_empty() {
        "None".to_string()
    } else if granted.len() == Capability::ALL.len() {
        "All".to_string()
    } else {
        granted.iter().map(Capability::label).collect::<Vec<_>>().join(", ")
    }
}

fn columns() -> Vec<ColumnDef<User>> {
    vec![
        ColumnDef::text("name", "Name", |u: &User| u.name.clone())
            .sortable()
            .filterable(),
        ColumnDef::text("email", "Email", |u: &User| u.email.clone())
            .sortable()
            .filterable(),
        ColumnDef::text("role", "Role", |u: &User| u.role.label().to_string()).sortable(),
        ColumnDef::text("permissions", "Permissions", |u: &User| {
            permission_summary(u.permissions.as_ref())
        }),
        ColumnDef::text("is_active", "Status", |u: &User| {
            let label = if u.is_active { "Active" } else { "Disabled" };
            label.to_string()
        })
        .with_cell(|u: &User| {
            let class = if u.is_active { "badge badge--success" } else { "badge badge--muted" };
            let label = if u.is_active { "Active" } else { "Disabled" };
            view! { <span class=class>{label}</span> }.into_any()
        }),
    ]
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let client = use_api();
    let list = PagedList::new(config.grid.default_page_size, use_notifications(), move |query| {
        let client = client.clone();
        async move { api::fetch_users(&client, query).await }.boxed_local()
    });

    let (show_create_form, set_show_create_form) = signal(false);
    let editing_user: RwSignal<Option<User>> = RwSignal::new(None);

    list.reload();

    let on_row_click = Callback::new(move |user: User| editing_user.set(Some(user)));
    let close_create = Callback::new(move |_: ()| set_show_create_form.set(false));
    let created = Callback::new(move |_: ()| {
        set_show_create_form.set(false);
        list.reload();
    });
    let close_edit = Callback::new(move |_: ()| editing_user.set(None));
    let saved = Callback::new(move |_: ()| {
        editing_user.set(None);
        list.reload();
    });

    view! {
        <div class="page">
            <PageHeader title="Users" subtitle="Admin accounts and their permissions">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| set_show_create_form.set(true)>
                    {icon("plus")}
                    " New user"
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
                    filter_placeholder="Filter by name or email..."
                    on_row_click=on_row_click
                    page_size_options=config.grid.page_size_options.clone()
                />
            </div>

            <Show when=move || show_create_form.get()>
                <CreateUserForm on_close=close_create on_created=created />
            </Show>

            {move || editing_user.get().map(|user| view! {
                <EditUserForm user=user on_close=close_edit on_saved=saved />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_summary() {
        assert_eq!(permission_summary(None), "None");
        assert_eq!(permission_summary(Some(&CapabilitySet::default())), "None");

        let some = CapabilitySet {
            can_manage_orders: true,
            can_view_analytics: true,
            ..CapabilitySet::default()
        };
        assert_eq!(permission_summary(Some(&some)), "Orders, Analytics");

        let all = CapabilitySet {
            can_manage_users: true,
            can_manage_products: true,
            can_manage_orders: true,
            can_manage_inventory: true,
            can_manage_brands: true,
            can_view_analytics: true,
            can_manage_return_exchange: true,
        };
        assert_eq!(permission_summary(Some(&all)), "All");
    }
}
