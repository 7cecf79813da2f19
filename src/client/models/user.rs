//! User models

use serde::{Serialize, Serializer};

/// User permission level as encoded by Nessus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionLevel {
    /// Read-only access
    Basic,
    /// Can create scans and policies
    Standard,
    /// Administrator
    Admin,
    /// System administrator
    SystemAdmin,
}

impl PermissionLevel {
    pub fn as_u8(self) -> u8 {
        match self {
            PermissionLevel::Basic => 16,
            PermissionLevel::Standard => 32,
            PermissionLevel::Admin => 64,
            PermissionLevel::SystemAdmin => 128,
        }
    }
}

impl Serialize for PermissionLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// Account backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Local,
    Ldap,
}

/// Body for `POST /users`
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub permissions: PermissionLevel,
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        permissions: PermissionLevel,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            permissions,
            user_type: UserType::default(),
            name: None,
            email: None,
        }
    }
}

/// Body for `PUT /users/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct UserUpdate {
    pub permissions: PermissionLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_user_serialization() {
        let mut user = NewUser::new("jdoe", "s3cret!", PermissionLevel::Standard);
        user.email = Some("jdoe@example.com".to_string());

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({
                "username": "jdoe",
                "password": "s3cret!",
                "permissions": 32,
                "type": "local",
                "email": "jdoe@example.com"
            })
        );
    }

    #[test]
    fn test_permission_levels() {
        assert_eq!(PermissionLevel::Basic.as_u8(), 16);
        assert_eq!(PermissionLevel::SystemAdmin.as_u8(), 128);
    }
}
