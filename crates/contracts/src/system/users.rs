use serde::{Deserialize, Serialize};

use super::auth::Role;
use super::permissions::CapabilitySet;
use crate::shared::EntityCollection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub permissions: Option<CapabilitySet>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: Option<String>,
}

fn default_active() -> bool {
    true
}

impl EntityCollection for User {
    const COLLECTION: &'static str = "users";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub permissions: CapabilitySet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub role: Role,
    pub permissions: CapabilitySet,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_decodes_as_staff() {
        let json = r#"{ "id": "1", "name": "N", "email": "n@x.y", "role": "intern", "createdAt": null }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Staff);
        assert!(user.is_active);
        assert!(user.permissions.is_none());
    }
}
