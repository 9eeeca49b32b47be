use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Permission tier of a user.
///
/// Unknown role names are kept as `Other` and treated like `Standard`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Developer,
    #[default]
    Guest,
    Standard,
    Other(String),
}

impl Role {
    /// Admins and developers see every menu item.
    pub fn is_elevated(&self) -> bool {
        matches!(self, Role::Admin | Role::Developer)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Developer => "developer",
            Role::Guest => "guest",
            Role::Standard => "standard",
            Role::Other(name) => name,
        }
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        match name.as_str() {
            "admin" => Role::Admin,
            "developer" => Role::Developer,
            "guest" => Role::Guest,
            "standard" => Role::Standard,
            _ => Role::Other(name),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(default)]
    pub role: Role,
    /// Ids of the menu items the user may visit
    #[serde(default)]
    pub visit: Vec<String>,
}

impl Permissions {
    pub fn can_visit(&self, id: &str) -> bool {
        self.visit.iter().any(|v| v == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub permissions: Permissions,
}

/// Answer of the "who am I" endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryUserResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Any further fields the server sent, kept for error reporting
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        let role: Role = serde_json::from_str("\"developer\"").unwrap();
        assert_eq!(role, Role::Developer);
        assert_eq!(serde_json::to_string(&Role::Guest).unwrap(), "\"guest\"");
        assert!(Role::Admin.is_elevated());
        assert!(!Role::Guest.is_elevated());
    }

    #[test]
    fn test_unknown_role_decodes_as_non_elevated() {
        let json = r#"{
            "success": true,
            "user": {"id": "7", "username": "ed", "permissions": {"role": "editor", "visit": ["1"]}}
        }"#;
        let resp: QueryUserResponse = serde_json::from_str(json).unwrap();
        let role = resp.user.unwrap().permissions.role;
        assert_eq!(role, Role::Other("editor".to_string()));
        assert!(!role.is_elevated());
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"editor\"");

        let standard: Role = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(standard, Role::Standard);
        assert!(!standard.is_elevated());
    }

    #[test]
    fn test_logout_failure_keeps_extra_fields() {
        let json = r#"{"success":false,"message":"denied","statusCode":409}"#;
        let resp: LogoutResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.message.as_deref(), Some("denied"));
        assert_eq!(resp.extra.get("statusCode"), Some(&serde_json::json!(409)));
    }

    #[test]
    fn test_query_user_without_user() {
        let resp: QueryUserResponse =
            serde_json::from_str(r#"{"success":false,"message":"Not Login"}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.user.is_none());
    }

    #[test]
    fn test_user_with_permissions() {
        let json = r#"{
            "success": true,
            "user": {"id": "0", "username": "guest", "permissions": {"role": "guest", "visit": ["1", "2"]}}
        }"#;
        let resp: QueryUserResponse = serde_json::from_str(json).unwrap();
        let user = resp.user.unwrap();
        assert_eq!(user.permissions.role, Role::Guest);
        assert!(user.permissions.can_visit("2"));
        assert!(!user.permissions.can_visit("3"));
    }
}
