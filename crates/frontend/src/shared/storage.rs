//! localStorage persistence for the auth session.

use contracts::system::auth::UserInfo;
use web_sys::window;

const AUTH_TOKEN_KEY: &str = "auth_token";
const AUTH_USER_KEY: &str = "auth_user";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the bearer token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(AUTH_TOKEN_KEY, token);
    }
}

/// Get the bearer token from localStorage
pub fn get_token() -> Option<String> {
    local_storage()?.get_item(AUTH_TOKEN_KEY).ok()?
}

/// Save the user snapshot next to the token.
pub fn save_user(user: &UserInfo) {
    if let Some(storage) = local_storage() {
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(AUTH_USER_KEY, &json);
        }
    }
}

/// Get the persisted user snapshot, if any.
pub fn get_user() -> Option<UserInfo> {
    let json = local_storage()?.get_item(AUTH_USER_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// Clear the whole persisted session (logout).
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(AUTH_TOKEN_KEY);
        let _ = storage.remove_item(AUTH_USER_KEY);
    }
}
