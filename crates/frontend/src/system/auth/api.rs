use contracts::shared::api::ApiEnvelope;
use contracts::system::auth::{
    AuthResponse, CreateAdminRequest, LoginRequest, RegisterRequest, UserInfo,
};

use crate::shared::api::{self, ApiError};

/// Login with email and password
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    api::post_value("/auth/login", request).await
}

/// Register a new customer account
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    api::post_value("/auth/register", request).await
}

/// Create a new admin account (requires an admin bearer token)
pub async fn create_admin(request: &CreateAdminRequest) -> Result<AuthResponse, ApiError> {
    api::post_value("/auth/admin/create", request).await
}

/// Current profile for the persisted token; used to detect a token the
/// server no longer accepts.
pub async fn get_profile() -> Result<ApiEnvelope<UserInfo>, ApiError> {
    api::get_json("/auth/profile").await
}
