use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use leptos::task::spawn_local;

use super::session::SessionManager;
use crate::shared::api::{required_data, ApiClient, ApiError};

/// Exchange credentials for a token
pub async fn login(api: &ApiClient, email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    api.post_public("/auth/login", &request).await.and_then(required_data)
}

/// Current user as the backend sees it
pub async fn me(api: &ApiClient) -> Result<UserInfo, ApiError> {
    api.get("/auth/me").await.and_then(required_data)
}

/// Refresh the cached user (role and permissions may have changed since it
/// was stored). A 401 here expires the session through the client.
pub fn revalidate(api: ApiClient, session: SessionManager) {
    if session.token().is_none() {
        return;
    }
    spawn_local(async move {
        match me(&api).await {
            Ok(user) => session.set_user(user),
            Err(e) if e.is_session_expired() => log::info!("stored session is no longer valid"),
            Err(e) => log::warn!("could not revalidate session: {}", e),
        }
    });
}
