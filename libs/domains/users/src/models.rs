use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User entity - matches the SQL schema and the API wire shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Server-assigned unique identifier (SERIAL, always positive)
    pub id: i32,
    /// Display name, non-empty after trimming
    pub name: String,
    /// Email address, syntactically validated on write
    pub email: String,
}

/// Request body for create and update
///
/// Both fields are required: a missing field is a decode failure, not a
/// silently defaulted value. Unknown fields (such as a client-sent `id`)
/// are ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
}

/// Confirmation body returned by a successful delete
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    pub fn user_deleted() -> Self {
        Self {
            message: "User deleted successfully".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_json_shape() {
        let user = User {
            id: 7,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 7, "name": "Alice", "email": "alice@example.com"})
        );
    }

    #[test]
    fn test_payload_requires_both_fields() {
        let missing_email: Result<UserPayload, _> =
            serde_json::from_str(r#"{"name": "Alice"}"#);
        assert!(missing_email.is_err());

        let missing_name: Result<UserPayload, _> =
            serde_json::from_str(r#"{"email": "alice@example.com"}"#);
        assert!(missing_name.is_err());
    }

    #[test]
    fn test_payload_ignores_unknown_fields() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"id": 99, "name": "Alice", "email": "a@b.c"}"#).unwrap();
        assert_eq!(payload.name, "Alice");
        assert_eq!(payload.email, "a@b.c");
    }
}
