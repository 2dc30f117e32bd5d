use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Session store key under which the signed-in user is persisted.
pub const SESSION_USER_KEY: &str = "user";

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const HR_DASHBOARD_PATH: &str = "/hr/dashboard";
pub const CANDIDATE_DASHBOARD_PATH: &str = "/candidate/dashboard";

/// Portal role deciding which dashboard a user lands on.
///
/// - `Hr`: recruiters and hiring managers.
/// - `Candidate`: applicants. Any role string other than `"HR"` maps here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Role {
    #[serde(rename = "HR")]
    Hr,
    #[default]
    Candidate,
}

impl Role {
    /// Parse a role claim. Only the exact string `"HR"` is the HR role.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "HR" => Role::Hr,
            _ => Role::Candidate,
        }
    }

    /// Wire representation stored in the session record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Hr => "HR",
            Role::Candidate => "Candidate",
        }
    }

    /// Landing route after sign-in.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Hr => HR_DASHBOARD_PATH,
            Role::Candidate => CANDIDATE_DASHBOARD_PATH,
        }
    }

    /// Role assigned to a synthetic demo session: HR when the email
    /// contains `hr` anywhere, Candidate otherwise.
    pub fn for_demo_email(email: &str) -> Self {
        if email.contains("hr") {
            Role::Hr
        } else {
            Role::Candidate
        }
    }
}

/// Identity record persisted client-side after a successful sign-in.
///
/// `role` is kept as the raw string the service sent so the stored record
/// matches the response exactly; use [`SessionUser::role`] for branching.
/// Attributes the portal does not know about are carried in `extra`.
///
/// Every known field is optional on the wire. A missing or `null` value
/// decodes as an empty string and is left out again when the record is
/// stored, so a missing or empty role lands on the candidate dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "String::is_empty")]
    pub role: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionUser {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.as_str().to_string(),
            extra: Map::new(),
        }
    }

    /// Synthetic user fabricated when the auth service is unreachable.
    pub fn demo(email: &str) -> Self {
        Self::new("1", "Demo User", email, Role::for_demo_email(email))
    }

    pub fn role(&self) -> Role {
        Role::from_str_or_default(&self.role)
    }

    pub fn dashboard_path(&self) -> &'static str {
        self.role().dashboard_path()
    }
}

/// Strings pass through, numbers are rendered, `null` becomes empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}
