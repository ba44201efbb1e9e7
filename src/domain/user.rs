//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier
    #[serde(rename = "user_id")]
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "alice")]
    pub user_name: String,
    #[schema(example = "Alice")]
    pub first_name: String,
    #[schema(example = "Anderson")]
    pub last_name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: Option<String>,
    /// Single-character status code, e.g. "A" for active
    #[schema(example = "A")]
    pub user_status: String,
}

impl User {
    /// Attach a store-assigned id to a not-yet-persisted user.
    pub fn from_new(id: i64, new_user: NewUser) -> Self {
        Self {
            id,
            user_name: new_user.user_name,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            department: new_user.department,
            user_status: new_user.user_status,
        }
    }
}

/// User fields before the store has assigned an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Option<String>,
    pub user_status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> NewUser {
        NewUser {
            user_name: "alice".into(),
            first_name: "Alice".into(),
            last_name: "A".into(),
            email: "a@x.com".into(),
            department: Some("Eng".into()),
            user_status: "A".into(),
        }
    }

    #[test]
    fn serializes_with_wire_keys() {
        let user = User::from_new(1, alice());
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({
                "user_id": 1,
                "user_name": "alice",
                "first_name": "Alice",
                "last_name": "A",
                "email": "a@x.com",
                "department": "Eng",
                "user_status": "A"
            })
        );
    }

    #[test]
    fn missing_department_is_null() {
        let user = User::from_new(
            2,
            NewUser {
                department: None,
                ..alice()
            },
        );
        let value = serde_json::to_value(&user).unwrap();
        assert!(value["department"].is_null());
    }
}
