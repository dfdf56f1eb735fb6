//! User model

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::common::object_id_string;

/// User document
///
/// `hashed_password` stores the password exactly as submitted and login
/// compares it verbatim. Password security is an explicit non-goal of this
/// backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub hashed_password: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Request to register a new user
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request to log in
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User response (for API, without the password field)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: object_id_string(&u.id),
            name: u.name,
            email: u.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_is_skipped_when_absent() {
        let user = User {
            id: None,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            hashed_password: "pw".to_string(),
            is_active: true,
        };
        let doc = bson::to_document(&user).unwrap();
        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("email").unwrap(), "ada@example.com");
    }

    #[test]
    fn test_is_active_defaults_true() {
        let doc = bson::doc! {
            "name": "Ada",
            "email": "ada@example.com",
            "hashed_password": "pw",
        };
        let user: User = bson::from_document(doc).unwrap();
        assert!(user.is_active);
    }

    #[test]
    fn test_response_omits_password() {
        let user = User {
            id: Some(bson::oid::ObjectId::new()),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            hashed_password: "pw".to_string(),
            is_active: true,
        };
        let resp = UserResponse::from(user);
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("hashed_password").is_none());
        assert_eq!(json["email"], "ada@example.com");
        assert!(json["id"].as_str().unwrap().len() == 24);
    }
}
