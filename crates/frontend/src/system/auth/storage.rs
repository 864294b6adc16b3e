use contracts::system::auth::UserInfo;
use web_sys::window;

const TOKEN_KEY: &str = "wizzzey_admin_token";
const USER_KEY: &str = "wizzzey_admin_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save bearer token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Get bearer token from localStorage
pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Cache the signed-in user so permissions are known before `/auth/me` answers
pub fn save_user(user: &UserInfo) {
    if let (Some(storage), Ok(json)) = (get_local_storage(), serde_json::to_string(user)) {
        let _ = storage.set_item(USER_KEY, &json);
    }
}

/// Raw cached user JSON
pub fn get_user_json() -> Option<String> {
    get_local_storage()?.get_item(USER_KEY).ok()?
}

/// Clear token and cached user
pub fn clear() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
