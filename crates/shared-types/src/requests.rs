use crate::models::SessionUser;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Body of `POST /api/auth/login`.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub user: SessionUser,
}

/// Body of a rejected login. Every field is optional so that bare
/// `{"message": "..."}` bodies and full [`crate::AppError`] payloads both parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl LoginErrorBody {
    /// Parse a rejection body. Returns `None` when the body is not JSON at
    /// all (an HTML error page, an empty reply) or is a bare `null`. Any
    /// other JSON value yields a body, with `message` taken only when it is
    /// a string.
    pub fn try_parse(body: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(body).ok()?;
        let Value::Object(map) = value else {
            return (!value.is_null()).then(Self::default);
        };
        let message = map
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);
        let field_errors = map
            .get("field_errors")
            .and_then(Value::as_object)
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(|(k, v)| Some((k.clone(), v.as_str()?.to_string())))
                    .collect()
            })
            .unwrap_or_default();
        Some(Self {
            message,
            field_errors,
        })
    }
}
