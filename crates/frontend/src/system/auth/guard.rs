use contracts::system::permissions::Capability;
use leptos::prelude::*;

use super::session::use_session;
use crate::shared::icons::icon;
use crate::system::pages::login::LoginPage;

/// Component that requires authentication
/// Shows the login screen if there is no session
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show when=move || session.is_authenticated() fallback=|| view! { <LoginPage /> }>
            {children()}
        </Show>
    }
}

/// Component that requires one capability of the signed-in user
/// Shows `fallback` (or `AccessDenied`) otherwise
#[component]
pub fn RequirePermission(
    capability: Capability,
    #[prop(optional, into)] fallback: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let fallback = fallback.unwrap_or_else(|| {
        ViewFn::from(move || view! { <AccessDenied capability=capability /> })
    });

    let allowed = Memo::new(move |_| session.has_permission(capability));

    move || gated(allowed.get(), || children(), || fallback.run())
}

/// Build `screen` only when `allowed`; a denied screen is never constructed,
/// so none of its fetches start.
pub fn gated<V>(allowed: bool, screen: impl FnOnce() -> V, fallback: impl FnOnce() -> V) -> V {
    if allowed {
        screen()
    } else {
        fallback()
    }
}

#[component]
pub fn AccessDenied(#[prop(optional)] capability: Option<Capability>) -> impl IntoView {
    let detail = match capability {
        Some(c) => format!("Your account is missing the \"{}\" permission.", c.label()),
        None => "Your account cannot open this page.".to_string(),
    };

    view! {
        <div class="access-denied">
            {icon("lock")}
            <h2>"Access denied"</h2>
            <p>{detail}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::session::{SessionManager, SessionState};
    use contracts::system::auth::{Role, UserInfo};
    use contracts::system::permissions::CapabilitySet;
    use std::cell::Cell;

    fn order_manager() -> SessionState {
        SessionState {
            token: Some("tok".to_string()),
            user: Some(UserInfo {
                id: "u1".to_string(),
                name: "Asha".to_string(),
                email: "asha@wizzzey.test".to_string(),
                role: Role::Manager,
                permissions: Some(CapabilitySet {
                    can_manage_orders: true,
                    ..CapabilitySet::default()
                }),
            }),
            expired: false,
        }
    }

    #[test]
    fn test_denied_screen_is_never_built() {
        let owner = Owner::new();
        owner.set();
        let session = SessionManager::with_state(order_manager());
        let fetched = Cell::new(false);

        let shown = gated(
            session.has_permission(Capability::CanManageProducts),
            || {
                fetched.set(true);
                "products"
            },
            || "access denied",
        );
        assert_eq!(shown, "access denied");
        assert!(!fetched.get());

        let shown = gated(
            session.has_permission(Capability::CanManageOrders),
            || {
                fetched.set(true);
                "orders"
            },
            || "access denied",
        );
        assert_eq!(shown, "orders");
        assert!(fetched.get());
    }

    #[test]
    fn test_missing_user_denies_every_gate() {
        let owner = Owner::new();
        owner.set();
        let session = SessionManager::with_state(SessionState {
            user: None,
            ..order_manager()
        });
        for capability in Capability::ALL {
            assert!(!gated(session.has_permission(capability), || true, || false));
        }
    }
}
