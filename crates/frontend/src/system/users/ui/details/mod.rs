use contracts::system::auth::Role;
use contracts::system::permissions::{Capability, CapabilitySet};
use contracts::system::users::{CreateUserDto, UpdateUserDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api::use_api;
use crate::shared::notifications::use_notifications;
use crate::system::users::api;

const ROLES: [Role; 3] = [Role::Admin, Role::Manager, Role::Staff];

fn role_key(role: Role) -> &'static str {
    match role {
        Role::Admin => "admin",
        Role::Manager => "manager",
        Role::Staff => "staff",
    }
}

fn role_from_key(key: &str) -> Role {
    ROLES
        .into_iter()
        .find(|r| role_key(*r) == key)
        .unwrap_or(Role::Staff)
}

/// Set one flag of a capability set
pub fn with_capability(mut set: CapabilitySet, capability: Capability, granted: bool) -> CapabilitySet {
    let flag = match capability {
        Capability::CanManageUsers => &mut set.can_manage_users,
        Capability::CanManageProducts => &mut set.can_manage_products,
        Capability::CanManageOrders => &mut set.can_manage_orders,
        Capability::CanManageInventory => &mut set.can_manage_inventory,
        Capability::CanManageBrands => &mut set.can_manage_brands,
        Capability::CanViewAnalytics => &mut set.can_view_analytics,
        Capability::CanManageReturnExchange => &mut set.can_manage_return_exchange,
    };
    *flag = granted;
    set
}

#[component]
fn RoleSelect(role: RwSignal<Role>, #[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    view! {
        <select
            class="form-select"
            prop:value=move || role_key(role.get())
            on:change=move |ev| role.set(role_from_key(&event_target_value(&ev)))
            disabled=move || disabled.get()
        >
            {ROLES
                .into_iter()
                .map(|r| view! { <option value=role_key(r)>{r.label()}</option> })
                .collect_view()}
        </select>
    }
}

/// Seven checkboxes, one per capability
#[component]
fn CapabilityEditor(permissions: RwSignal<CapabilitySet>, #[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    view! {
        <fieldset class="capability-editor">
            <legend>"Permissions"</legend>
            {Capability::ALL
                .into_iter()
                .map(|capability| {
                    view! {
                        <label class="checkbox-label">
                            <input
                                type="checkbox"
                                prop:checked=move || permissions.with(|p| p.allows(capability))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    permissions.update(|p| *p = with_capability(*p, capability, checked));
                                }
                                disabled=move || disabled.get()
                            />
                            {capability.label()}
                        </label>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}

#[component]
pub fn CreateUserForm(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Staff);
    let permissions = RwSignal::new(CapabilitySet::default());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let client = use_api();
    let notifications = use_notifications();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let dto = CreateUserDto {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            role: role.get_untracked(),
            permissions: permissions.get_untracked(),
        };
        if dto.name.is_empty() || dto.email.is_empty() || dto.password.is_empty() {
            set_error_message.set(Some("Name, email and password are required".to_string()));
            return;
        }

        set_is_saving.set(true);
        set_error_message.set(None);

        let client = client.clone();
        spawn_local(async move {
            match api::create_user(&client, &dto).await {
                Ok(_) => {
                    notifications.success(format!("User {} created", dto.email));
                    on_created.run(());
                }
                Err(e) => set_error_message.set(Some(e.to_string())),
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>"Create user"</h3>
                    <button class="btn-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Name *"</label>
                        <Input value=name />
                    </div>
                    <div class="form-group">
                        <label>"Email *"</label>
                        <Input value=email input_type=InputType::Email />
                    </div>
                    <div class="form-group">
                        <label>"Password *"</label>
                        <Input value=password input_type=InputType::Password />
                    </div>
                    <div class="form-group">
                        <label>"Role"</label>
                        <RoleSelect role=role disabled=is_saving />
                    </div>
                    <CapabilityEditor permissions=permissions disabled=is_saving />

                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || is_saving.get()>
                            {move || if is_saving.get() { "Creating..." } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
pub fn EditUserForm(user: User, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let role = RwSignal::new(user.role);
    let permissions = RwSignal::new(user.permissions.unwrap_or_default());
    let is_active = RwSignal::new(user.is_active);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let client = use_api();
    let notifications = use_notifications();
    let id = StoredValue::new(user.id.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let dto = UpdateUserDto {
            role: role.get_untracked(),
            permissions: permissions.get_untracked(),
            is_active: is_active.get_untracked(),
        };

        set_is_saving.set(true);
        set_error_message.set(None);

        let client = client.clone();
        spawn_local(async move {
            match api::update_user(&client, &id.get_value(), &dto).await {
                Ok(_) => {
                    notifications.success("User updated");
                    on_saved.run(());
                }
                Err(e) => set_error_message.set(Some(e.to_string())),
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{format!("Edit {}", user.name)}</h3>
                    <button class="btn-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <div class="modal-subtitle">{user.email.clone()}</div>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Role"</label>
                        <RoleSelect role=role disabled=is_saving />
                    </div>
                    <CapabilityEditor permissions=permissions disabled=is_saving />
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || is_active.get()
                            on:change=move |ev| is_active.set(event_target_checked(&ev))
                        />
                        "Active"
                    </label>

                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || is_saving.get()>
                            {move || if is_saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_capability_touches_one_flag() {
        let set = with_capability(CapabilitySet::default(), Capability::CanManageBrands, true);
        assert_eq!(set.granted(), vec![Capability::CanManageBrands]);
        let set = with_capability(set, Capability::CanManageBrands, false);
        assert!(set.granted().is_empty());
    }

    #[test]
    fn test_role_keys_round_trip_and_default_to_staff() {
        for role in ROLES {
            assert_eq!(role_from_key(role_key(role)), role);
        }
        assert_eq!(role_from_key("owner"), Role::Staff);
    }
}
