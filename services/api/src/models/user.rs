//! User model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Document;

/// User entity
///
/// The password is kept and returned exactly as submitted at registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub friends: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create an unsaved user with no friends, stamped with the current time
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            password: password.into(),
            friends: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

impl Document for User {
    const COLLECTION: &'static str = "user";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Request for user registration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<RegisterRequest> for User {
    fn from(payload: RegisterRequest) -> Self {
        User::new(payload.name, payload.email, payload.password)
    }
}

/// Request for user login
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registration_drops_friends() {
        let payload: RegisterRequest = serde_json::from_value(json!({
            "name": "Bob",
            "email": "b@x",
            "password": "p",
            "friends": ["alice"]
        }))
        .unwrap();

        let user = User::from(payload);
        assert!(user.friends.is_empty());
        assert_eq!(user.email, "b@x");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let payload: LoginRequest = serde_json::from_value(json!({"email": "b@x"})).unwrap();
        assert_eq!(payload.email, "b@x");
        assert!(payload.password.is_empty());
    }

    #[test]
    fn test_user_json_field_names() {
        let value = serde_json::to_value(User::new("Bob", "b@x", "p")).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            vec!["createdAt", "email", "friends", "name", "password"]
        );
    }
}
