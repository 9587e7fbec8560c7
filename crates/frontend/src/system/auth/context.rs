use contracts::system::auth::{
    CreateAdminRequest, LoginRequest, RegisterRequest, UserInfo, UserRole,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::storage;

/// Shared auth session state. `Copy`, so event handlers can capture it.
#[derive(Clone, Copy)]
pub struct AuthStore {
    pub user: RwSignal<Option<UserInfo>>,
    pub token: RwSignal<Option<String>>,
    /// An auth operation (login/register) is in flight.
    pub loading: RwSignal<bool>,
}

impl AuthStore {
    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user
            .get()
            .map(|u| u.role.is_admin())
            .unwrap_or(false)
    }

    /// Login; on success the token and user snapshot are persisted and the
    /// signed-in user is returned (callers route by role).
    pub async fn login(self, request: LoginRequest) -> Result<UserInfo, String> {
        self.loading.set(true);
        let result = api::login(&request).await;
        self.loading.set(false);

        let response = result.map_err(|e| e.to_string())?;
        match (response.success, response.token, response.user) {
            (true, Some(token), Some(user)) => {
                storage::save_token(&token);
                storage::save_user(&user);
                self.token.set(Some(token));
                self.user.set(Some(user.clone()));
                log::info!("logged in as {}", user.email);
                Ok(user)
            }
            _ => Err(response
                .message
                .unwrap_or_else(|| "Login failed".to_string())),
        }
    }

    /// Register a customer account; returns the success note to display.
    pub async fn register(self, request: RegisterRequest) -> Result<String, String> {
        self.loading.set(true);
        let result = api::register(&request).await;
        self.loading.set(false);

        let response = result.map_err(|e| e.to_string())?;
        if response.success {
            Ok(response
                .message
                .unwrap_or_else(|| "Registration successful! Please login.".to_string()))
        } else {
            Err(response
                .message
                .unwrap_or_else(|| "Registration failed".to_string()))
        }
    }

    /// Clear the persisted session and the in-memory state.
    pub fn logout(self) {
        storage::clear_session();
        self.token.set(None);
        self.user.set(None);
    }

    pub async fn create_admin(self, request: CreateAdminRequest) -> Result<(), String> {
        let response = api::create_admin(&request).await.map_err(|e| e.to_string())?;
        if response.success {
            Ok(())
        } else {
            Err(response
                .message
                .unwrap_or_else(|| "Failed to create admin".to_string()))
        }
    }
}

/// Route for a user fresh off a successful login.
pub fn post_login_route(role: UserRole) -> &'static str {
    if role.is_admin() {
        "/admin"
    } else {
        "/menu"
    }
}

/// Auth context provider component.
///
/// Restores the persisted session synchronously, then validates the token
/// against the profile endpoint in the background; a rejected token clears
/// the session.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let store = AuthStore {
        user: RwSignal::new(storage::get_user()),
        token: RwSignal::new(storage::get_token()),
        loading: RwSignal::new(false),
    };
    provide_context(store);

    if store.token.get_untracked().is_some() {
        spawn_local(async move {
            match api::get_profile().await {
                Ok(env) => {
                    if let Some(user) = env.data {
                        storage::save_user(&user);
                        store.user.set(Some(user));
                    }
                }
                Err(e) => {
                    if e.status() == Some(401) {
                        log::warn!("stored token rejected, clearing session");
                        store.logout();
                    }
                    // Network trouble keeps the cached session; the next
                    // authenticated call will surface its own error.
                }
            }
        });
    }

    children()
}

/// Hook to access auth state.
pub fn use_auth() -> AuthStore {
    use_context::<AuthStore>().expect("AuthProvider not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admins_land_on_the_dashboard() {
        assert_eq!(post_login_route(UserRole::Admin), "/admin");
        assert_eq!(post_login_route(UserRole::Customer), "/menu");
    }
}
