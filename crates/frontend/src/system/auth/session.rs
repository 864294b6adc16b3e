//! Session of the signed-in operator.
//!
//! One `SessionManager` is created in `App` and handed down through context;
//! `init` hydrates it from localStorage and `teardown` clears both.

use contracts::system::auth::UserInfo;
use contracts::system::permissions::{has_permission, Capability};
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
    /// Set when the backend rejected the token; shown on the login screen
    pub expired: bool,
}

impl SessionState {
    /// Rebuild a session from stored values. A user record that no longer
    /// parses is dropped; the token alone keeps the session and `/auth/me`
    /// fills the user back in.
    pub fn hydrate(token: Option<String>, user_json: Option<String>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        let user = match (&token, user_json) {
            (Some(_), Some(json)) => match serde_json::from_str::<UserInfo>(&json) {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!("discarding cached user: {}", e);
                    None
                }
            },
            _ => None,
        };
        Self {
            token,
            user,
            expired: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn allows(&self, capability: Capability) -> bool {
        has_permission(self.user.as_ref(), capability)
    }
}

#[derive(Clone, Copy)]
pub struct SessionManager {
    state: RwSignal<SessionState>,
}

/// Get the `SessionManager` provided by `App`
pub fn use_session() -> SessionManager {
    use_context::<SessionManager>().expect("SessionManager not provided in context")
}

impl SessionManager {
    pub fn new() -> Self {
        Self::with_state(SessionState::default())
    }

    /// Session over an already built state, without touching storage
    pub fn with_state(state: SessionState) -> Self {
        Self {
            state: RwSignal::new(state),
        }
    }

    /// Hydrate from localStorage
    pub fn init(&self) {
        let state = SessionState::hydrate(storage::get_token(), storage::get_user_json());
        if state.is_authenticated() {
            log::info!("restored session from storage");
        }
        self.state.set(state);
    }

    pub fn login(&self, token: String, user: UserInfo) {
        storage::save_token(&token);
        storage::save_user(&user);
        log::info!("signed in as {}", user.email);
        self.state.set(SessionState {
            token: Some(token),
            user: Some(user),
            expired: false,
        });
    }

    pub fn set_user(&self, user: UserInfo) {
        storage::save_user(&user);
        self.state.update(|s| s.user = Some(user));
    }

    /// Sign out: clear storage and state
    pub fn teardown(&self) {
        storage::clear();
        self.state.set(SessionState::default());
    }

    /// The backend rejected the token (HTTP 401)
    pub fn expire(&self) {
        if !self.state.with_untracked(|s| s.is_authenticated()) {
            return;
        }
        storage::clear();
        self.state.set(SessionState {
            expired: true,
            ..SessionState::default()
        });
    }

    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.with(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated())
    }

    pub fn is_expired(&self) -> bool {
        self.state.with(|s| s.expired)
    }

    /// UX gate only; the backend enforces authorization independently
    pub fn has_permission(&self, capability: Capability) -> bool {
        self.state.with(|s| s.allows(capability))
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Role;
    use contracts::system::permissions::CapabilitySet;

    fn cached_user() -> String {
        serde_json::to_string(&UserInfo {
            id: "u7".to_string(),
            name: "Ravi".to_string(),
            email: "ravi@wizzzey.test".to_string(),
            role: Role::Manager,
            permissions: Some(CapabilitySet {
                can_manage_orders: true,
                ..CapabilitySet::default()
            }),
        })
        .unwrap()
    }

    #[test]
    fn test_hydrate_with_token_and_user() {
        let state = SessionState::hydrate(Some("tok".to_string()), Some(cached_user()));
        assert!(state.is_authenticated());
        assert!(state.allows(Capability::CanManageOrders));
        assert!(!state.allows(Capability::CanManageUsers));
    }

    #[test]
    fn test_hydrate_without_token_ignores_cached_user() {
        let state = SessionState::hydrate(None, Some(cached_user()));
        assert!(!state.is_authenticated());
        assert!(state.user.is_none());
        assert!(!state.allows(Capability::CanManageOrders));
    }

    #[test]
    fn test_corrupt_user_keeps_token_but_denies_everything() {
        let state = SessionState::hydrate(Some("tok".to_string()), Some("{not json".to_string()));
        assert!(state.is_authenticated());
        assert!(state.user.is_none());
        for capability in Capability::ALL {
            assert!(!state.allows(capability));
        }
    }

    #[test]
    fn test_blank_token_is_no_session() {
        let state = SessionState::hydrate(Some("  ".to_string()), None);
        assert!(!state.is_authenticated());
    }
}
