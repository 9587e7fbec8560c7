use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

/// Admin accounts are provisioned by an existing admin; same payload shape
/// as registration, different endpoint and required role on the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Customer,
    Admin,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

/// Body of the auth endpoints (login/register/admin-create). Login responds
/// with both a token and the user snapshot; register responds with neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_lowercase() {
        let user: UserInfo = serde_json::from_str(
            r#"{"_id": "u1", "name": "Ada", "email": "ada@example.com", "role": "admin"}"#,
        )
        .unwrap();
        assert!(user.role.is_admin());
        assert_eq!(user.phone_number, None);
    }

    #[test]
    fn role_defaults_to_customer() {
        let user: UserInfo = serde_json::from_str(
            r#"{"_id": "u2", "name": "Obi", "email": "obi@example.com"}"#,
        )
        .unwrap();
        assert!(!user.role.is_admin());
    }

    #[test]
    fn login_response_shape() {
        let resp: AuthResponse = serde_json::from_str(
            r#"{"success": true, "token": "jwt", "user": {"_id": "u1", "name": "Ada", "email": "a@b.c", "role": "admin"}}"#,
        )
        .unwrap();
        assert!(resp.success);
        assert_eq!(resp.token.as_deref(), Some("jwt"));
        assert!(resp.user.unwrap().role.is_admin());
    }
}
