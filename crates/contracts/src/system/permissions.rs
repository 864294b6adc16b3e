//! Capability flags and the permission evaluator.
//!
//! The evaluator only drives what the admin UI renders. The backend rejects
//! unauthorized requests on its own and remains the authorization boundary.

use serde::{Deserialize, Serialize};

use super::auth::UserInfo;

/// One gated feature area of the admin panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    CanManageUsers,
    CanManageProducts,
    CanManageOrders,
    CanManageInventory,
    CanManageBrands,
    CanViewAnalytics,
    CanManageReturnExchange,
}

impl Capability {
    pub const ALL: [Capability; 7] = [
        Capability::CanManageUsers,
        Capability::CanManageProducts,
        Capability::CanManageOrders,
        Capability::CanManageInventory,
        Capability::CanManageBrands,
        Capability::CanViewAnalytics,
        Capability::CanManageReturnExchange,
    ];

    /// Wire name of the flag
    pub fn key(&self) -> &'static str {
        match self {
            Capability::CanManageUsers => "canManageUsers",
            Capability::CanManageProducts => "canManageProducts",
            Capability::CanManageOrders => "canManageOrders",
            Capability::CanManageInventory => "canManageInventory",
            Capability::CanManageBrands => "canManageBrands",
            Capability::CanViewAnalytics => "canViewAnalytics",
            Capability::CanManageReturnExchange => "canManageReturnExchange",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Capability::CanManageUsers => "Users",
            Capability::CanManageProducts => "Products",
            Capability::CanManageOrders => "Orders",
            Capability::CanManageInventory => "Inventory",
            Capability::CanManageBrands => "Brands",
            Capability::CanViewAnalytics => "Analytics",
            Capability::CanManageReturnExchange => "Returns & exchanges",
        }
    }
}

/// Capability flags attached to a user by the backend at login.
///
/// A key missing on the wire deserializes as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CapabilitySet {
    pub can_manage_users: bool,
    pub can_manage_products: bool,
    pub can_manage_orders: bool,
    pub can_manage_inventory: bool,
    pub can_manage_brands: bool,
    pub can_view_analytics: bool,
    pub can_manage_return_exchange: bool,
}

impl CapabilitySet {
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::CanManageUsers => self.can_manage_users,
            Capability::CanManageProducts => self.can_manage_products,
            Capability::CanManageOrders => self.can_manage_orders,
            Capability::CanManageInventory => self.can_manage_inventory,
            Capability::CanManageBrands => self.can_manage_brands,
            Capability::CanViewAnalytics => self.can_view_analytics,
            Capability::CanManageReturnExchange => self.can_manage_return_exchange,
        }
    }

    pub fn granted(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|c| self.allows(*c))
            .collect()
    }
}

/// Decide whether `user` may access the feature behind `capability`.
///
/// Fails closed: no user, or a user without a capability set, is denied.
pub fn has_permission(user: Option<&UserInfo>, capability: Capability) -> bool {
    user.and_then(|u| u.permissions.as_ref())
        .map(|set| set.allows(capability))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::Role;

    fn user_with(permissions: Option<CapabilitySet>) -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            email: "asha@wizzzey.test".to_string(),
            role: Role::Manager,
            permissions,
        }
    }

    #[test]
    fn test_no_user_is_denied_everything() {
        for capability in Capability::ALL {
            assert!(!has_permission(None, capability));
        }
    }

    #[test]
    fn test_missing_capability_set_is_denied_everything() {
        let user = user_with(None);
        for capability in Capability::ALL {
            assert!(!has_permission(Some(&user), capability));
        }
    }

    #[test]
    fn test_missing_key_defaults_to_false() {
        let json = r#"{
            "id": "u1", "name": "Asha", "email": "asha@wizzzey.test", "role": "manager",
            "permissions": { "canManageOrders": true }
        }"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert!(has_permission(Some(&user), Capability::CanManageOrders));
        assert!(!has_permission(Some(&user), Capability::CanManageUsers));
    }

    #[test]
    fn test_null_permissions_deserialize_as_absent() {
        let json = r#"{ "id": "u1", "name": "A", "email": "a@b.c", "role": "admin", "permissions": null }"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert!(user.permissions.is_none());
        assert!(!has_permission(Some(&user), Capability::CanManageUsers));
    }

    #[test]
    fn test_granted_lists_only_true_flags() {
        let set = CapabilitySet {
            can_manage_brands: true,
            can_view_analytics: true,
            ..CapabilitySet::default()
        };
        assert_eq!(
            set.granted(),
            vec![Capability::CanManageBrands, Capability::CanViewAnalytics]
        );
    }

    #[test]
    fn test_capability_key_matches_serde_name() {
        for capability in Capability::ALL {
            let json = serde_json::to_string(&capability).unwrap();
            assert_eq!(json, format!("\"{}\"", capability.key()));
        }
    }
}
