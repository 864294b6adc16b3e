use contracts::shared::{Collection, PageQuery};
use contracts::system::users::{CreateUserDto, UpdateUserDto, User};

use crate::shared::api::{ApiClient, ApiResult};

/// Fetch one page of admin users
pub async fn fetch_users(api: &ApiClient, query: PageQuery) -> ApiResult<Collection<User>> {
    api.get_page("/users", &query).await
}

/// Create new user
pub async fn create_user(api: &ApiClient, dto: &CreateUserDto) -> ApiResult<User> {
    api.post_json("/users", dto).await
}

/// Update role, permissions and active flag
pub async fn update_user(api: &ApiClient, id: &str, dto: &UpdateUserDto) -> ApiResult<User> {
    api.put_json(&format!("/users/{}", urlencoding::encode(id)), dto).await
}

/// Delete user
pub async fn delete_user(api: &ApiClient, id: &str) -> ApiResult<serde_json::Value> {
    api.delete(&format!("/users/{}", urlencoding::encode(id))).await
}
