use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Auth request timeout used when none (or zero) is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Feature flags controlling optional sign-in behavior.
///
/// Loaded from `config.toml` at startup. A missing or incomplete file
/// leaves every flag at its default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Substitute a synthetic session when the auth service cannot be reached.
    #[serde(default = "default_true")]
    pub demo_mode: bool,
    /// Show the "Demo Credentials" card with the fill buttons.
    #[serde(default = "default_true")]
    pub demo_credentials: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            demo_mode: true,
            demo_credentials: true,
        }
    }
}

/// Where and how to reach the auth service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSettings {
    /// Origin prefixed to `/api/auth/login`, e.g. `http://localhost:8080`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// JSON file backing the session store on desktop builds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_file: Option<String>,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            api_base_url: None,
            timeout_secs: default_timeout_secs(),
            session_file: None,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub auth: AuthSettings,
}
