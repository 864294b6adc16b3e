//! Navigation menu filtered by the signed-in user's capabilities

use contracts::system::permissions::Capability;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;
use crate::system::auth::use_session;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// `None` means every signed-in user sees the item
    pub capability: Option<Capability>,
}

pub const MENU_ITEMS: [MenuItem; 10] = [
    MenuItem { path: "/", label: "Dashboard", icon: "dashboard", capability: None },
    MenuItem { path: "/orders", label: "Orders", icon: "orders", capability: Some(Capability::CanManageOrders) },
    MenuItem { path: "/orders/daily", label: "Daily orders", icon: "calendar", capability: Some(Capability::CanManageOrders) },
    MenuItem { path: "/products", label: "Products", icon: "products", capability: Some(Capability::CanManageProducts) },
    MenuItem { path: "/categories", label: "Categories", icon: "categories", capability: Some(Capability::CanManageProducts) },
    MenuItem { path: "/brands", label: "Brands", icon: "brands", capability: Some(Capability::CanManageBrands) },
    MenuItem { path: "/inventory", label: "Inventory", icon: "inventory", capability: Some(Capability::CanManageInventory) },
    MenuItem { path: "/returns", label: "Returns & exchanges", icon: "returns", capability: Some(Capability::CanManageReturnExchange) },
    MenuItem { path: "/faqs", label: "FAQs", icon: "faqs", capability: None },
    MenuItem { path: "/users", label: "Users", icon: "users", capability: Some(Capability::CanManageUsers) },
];

/// Items the user may open, in menu order
pub fn visible_menu_items(allows: impl Fn(Capability) -> bool) -> Vec<MenuItem> {
    MENU_ITEMS
        .into_iter()
        .filter(|item| item.capability.map_or(true, &allows))
        .collect()
}

/// Exact match, ignoring a trailing slash
fn is_active(path: &str, current: &str) -> bool {
    path.trim_end_matches('/') == current.trim_end_matches('/')
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let location = use_location();

    view! {
        <nav class="app-sidebar__content">
            {move || {
                visible_menu_items(|c| session.has_permission(c))
                    .into_iter()
                    .map(|item| {
                        let pathname = location.pathname;
                        view! {
                            <A href=item.path attr:class="app-sidebar__link">
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || is_active(item.path, &pathname.get())
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(item.icon)}
                                        <span>{item.label}</span>
                                    </div>
                                </div>
                            </A>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_capabilities_shows_only_ungated_items() {
        let items = visible_menu_items(|_| false);
        let paths: Vec<_> = items.iter().map(|i| i.path).collect();
        assert_eq!(paths, vec!["/", "/faqs"]);
    }

    #[test]
    fn test_orders_capability_reveals_both_order_screens() {
        let items = visible_menu_items(|c| c == Capability::CanManageOrders);
        let paths: Vec<_> = items.iter().map(|i| i.path).collect();
        assert_eq!(paths, vec!["/", "/orders", "/orders/daily", "/faqs"]);
    }

    #[test]
    fn test_all_capabilities_show_everything() {
        assert_eq!(visible_menu_items(|_| true).len(), MENU_ITEMS.len());
    }

    #[test]
    fn test_every_capability_gates_some_item() {
        for capability in Capability::ALL {
            if capability == Capability::CanViewAnalytics {
                // analytics is a section of the dashboard, not a menu item
                continue;
            }
            assert!(MENU_ITEMS.iter().any(|i| i.capability == Some(capability)));
        }
    }

    #[test]
    fn test_active_item_matching() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/orders"));
        assert!(is_active("/orders", "/orders"));
        assert!(is_active("/orders", "/orders/"));
        assert!(!is_active("/orders", "/orders/daily"));
    }
}
