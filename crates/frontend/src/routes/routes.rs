use contracts::system::permissions::Capability;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::domain::brand::ui::list::BrandList;
use crate::domain::category::ui::list::CategoryList;
use crate::domain::dashboard::ui::Dashboard;
use crate::domain::faq::ui::list::FaqList;
use crate::domain::inventory::ui::list::InventoryList;
use crate::domain::order::ui::daily::DailyOrders;
use crate::domain::order::ui::list::OrderList;
use crate::domain::product::ui::list::ProductList;
use crate::domain::return_exchange::ui::list::ReturnExchangeList;
use crate::layout::Shell;
use crate::system::auth::{RequireAuth, RequirePermission};
use crate::system::users::ui::list::UsersListPage;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--empty">
            <h2>"Page not found"</h2>
            <A href="/">"Back to the dashboard"</A>
        </div>
    }
}

/// Every screen except the dashboard and FAQs sits behind one capability;
/// a denied screen is never constructed, so it never fetches.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <RequireAuth>
                <Shell>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=Dashboard />
                        <Route
                            path=path!("/products")
                            view=|| view! {
                                <RequirePermission capability=Capability::CanManageProducts>
                                    <ProductList />
                                </RequirePermission>
                            }
                        />
                        <Route
                            path=path!("/categories")
                            view=|| view! {
                                <RequirePermission capability=Capability::CanManageProducts>
                                    <CategoryList />
                                </RequirePermission>
                            }
                        />
                        <Route
                            path=path!("/brands")
                            view=|| view! {
                                <RequirePermission capability=Capability::CanManageBrands>
                                    <BrandList />
                                </RequirePermission>
                            }
                        />
                        <Route
                            path=path!("/inventory")
                            view=|| view! {
                                <RequirePermission capability=Capability::CanManageInventory>
                                    <InventoryList />
                                </RequirePermission>
                            }
                        />
                        <Route
                            path=path!("/orders")
                            view=|| view! {
                                <RequirePermission capability=Capability::CanManageOrders>
                                    <OrderList />
                                </RequirePermission>
                            }
                        />
                        <Route
                            path=path!("/orders/daily")
                            view=|| view! {
                                <RequirePermission capability=Capability::CanManageOrders>
                                    <DailyOrders />
                                </RequirePermission>
                            }
                        />
                        <Route
                            path=path!("/returns")
                            view=|| view! {
                                <RequirePermission capability=Capability::CanManageReturnExchange>
                                    <ReturnExchangeList />
                                </RequirePermission>
                            }
                        />
                        <Route path=path!("/faqs") view=FaqList />
                        <Route
                            path=path!("/users")
                            view=|| view! {
                                <RequirePermission capability=Capability::CanManageUsers>
                                    <UsersListPage />
                                </RequirePermission>
                            }
                        />
                    </Routes>
                </Shell>
            </RequireAuth>
        </Router>
    }
}
