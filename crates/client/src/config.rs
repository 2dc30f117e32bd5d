use std::sync::OnceLock;
use std::time::Duration;

use shared_types::{AppConfig, FeatureFlags, DEFAULT_TIMEOUT_SECS};

use crate::error::ClientError;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Used when neither the config file nor the environment names an origin.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Parse `config.toml` contents.
pub fn parse_config(contents: &str) -> Result<AppConfig, ClientError> {
    toml::from_str(contents).map_err(|e| ClientError::Config(e.to_string()))
}

/// Apply `AUTH_API_URL`, `AUTH_TIMEOUT_SECS`, `SESSION_FILE` and `DEMO_MODE`
/// overrides obtained from `lookup`.
pub fn apply_env_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup("AUTH_API_URL").filter(|v| !v.is_empty()) {
        config.auth.api_base_url = Some(url);
    }
    if let Some(raw) = lookup("AUTH_TIMEOUT_SECS") {
        match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => config.auth.timeout_secs = secs,
            _ => tracing::warn!(value = %raw, "ignoring AUTH_TIMEOUT_SECS; expected a positive number of seconds"),
        }
    }
    if let Some(path) = lookup("SESSION_FILE").filter(|v| !v.is_empty()) {
        config.auth.session_file = Some(path);
    }
    if let Some(flag) = lookup("DEMO_MODE") {
        match flag.to_ascii_lowercase().as_str() {
            "1" | "true" | "on" | "yes" => config.features.demo_mode = true,
            "0" | "false" | "off" | "no" => config.features.demo_mode = false,
            other => tracing::warn!(value = other, "ignoring unrecognised DEMO_MODE"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> AppConfig {
    let _ = dotenvy::dotenv();

    let mut config = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to parse {CONFIG_PATH}; using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            tracing::info!(error = %e, "{CONFIG_PATH} not found; using defaults");
            AppConfig::default()
        }
    };
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    config
}

/// Browser builds have no filesystem or process environment; the origin is
/// baked in at compile time.
#[cfg(target_arch = "wasm32")]
fn read_config() -> AppConfig {
    let mut config = AppConfig::default();
    apply_env_overrides(&mut config, |key| match key {
        "AUTH_API_URL" => option_env!("AUTH_API_URL").map(str::to_string),
        "DEMO_MODE" => option_env!("DEMO_MODE").map(str::to_string),
        _ => None,
    });
    config
}

/// Load configuration once and keep it for the process lifetime. Safe to
/// call repeatedly; only the first call reads the file.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = read_config();
        tracing::info!(features = ?config.features, "sign-in configuration loaded");
        config
    })
}

/// Loaded configuration, or defaults if [`load_config`] has not run.
pub fn config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

pub fn feature_flags() -> &'static FeatureFlags {
    &config().features
}

/// Origin of the auth service, without a trailing slash.
pub fn api_base_url(config: &AppConfig) -> String {
    config
        .auth
        .api_base_url
        .as_deref()
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Per-request timeout. A zero `timeout_secs` falls back to
/// [`DEFAULT_TIMEOUT_SECS`].
pub fn request_timeout(config: &AppConfig) -> Duration {
    match config.auth.timeout_secs {
        0 => {
            tracing::warn!("timeout_secs = 0 is not usable; using {DEFAULT_TIMEOUT_SECS}s");
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        }
        secs => Duration::from_secs(secs),
    }
}
