//! Auth service port and its HTTP adapter.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use shared_types::{
    AppConfig, AppErrorKind, LoginErrorBody, LoginRequest, LoginResponse, SessionUser,
};

use crate::config;
use crate::error::ClientError;

/// Path of the sign-in endpoint, appended to the configured origin.
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";

/// Result of one sign-in call.
///
/// `Unreachable` means the call itself could not be completed; it is kept
/// apart from `Rejected` so the form can apply its demo fallback policy.
#[derive(Debug)]
pub enum AuthOutcome {
    Authenticated(SessionUser),
    Rejected {
        kind: AppErrorKind,
        message: Option<String>,
        field_errors: HashMap<String, String>,
    },
    Unreachable(ClientError),
}

impl AuthOutcome {
    pub fn rejected(kind: AppErrorKind, message: impl Into<String>) -> Self {
        AuthOutcome::Rejected {
            kind,
            message: Some(message.into()),
            field_errors: HashMap::new(),
        }
    }
}

/// External authentication service.
#[async_trait(?Send)]
pub trait AuthService {
    async fn login(&self, request: &LoginRequest) -> AuthOutcome;
}

#[async_trait(?Send)]
impl<A: AuthService + ?Sized> AuthService for &A {
    async fn login(&self, request: &LoginRequest) -> AuthOutcome {
        (**self).login(request).await
    }
}

/// Calls `POST {origin}/api/auth/login` with a JSON body.
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    client: reqwest::Client,
    login_url: String,
}

impl HttpAuthService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(timeout);
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let client = builder
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self {
            client,
            login_url: format!("{}{LOGIN_ENDPOINT}", base_url.trim_end_matches('/')),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(&config::api_base_url(config), config::request_timeout(config))
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    async fn send(&self, request: &LoginRequest) -> Result<AuthOutcome, ClientError> {
        let response = self.client.post(&self.login_url).json(request).send().await?;
        let status = response.status();

        if status.is_success() {
            let body: LoginResponse = response
                .json()
                .await
                .map_err(|e| ClientError::Decode(e.to_string()))?;
            return Ok(AuthOutcome::Authenticated(body.user));
        }

        // A reply that is not JSON did not come from the sign-in service
        // (proxy error page, missing route) and is treated like no reply.
        let text = response.text().await?;
        let body = LoginErrorBody::try_parse(&text).ok_or_else(|| {
            ClientError::Decode(format!("non-JSON error body with status {status}"))
        })?;
        Ok(AuthOutcome::Rejected {
            kind: AppErrorKind::from_status(status.as_u16()),
            message: body.message.filter(|m| !m.is_empty()),
            field_errors: body.field_errors,
        })
    }
}

#[async_trait(?Send)]
impl AuthService for HttpAuthService {
    #[tracing::instrument(skip(self, request), fields(url = %self.login_url, email = %request.email))]
    async fn login(&self, request: &LoginRequest) -> AuthOutcome {
        match self.send(request).await {
            Ok(outcome) => {
                if let AuthOutcome::Rejected { kind, .. } = &outcome {
                    tracing::info!(%kind, "sign-in rejected");
                }
                outcome
            }
            Err(e) => {
                tracing::warn!(error = %e, "auth service call did not complete");
                AuthOutcome::Unreachable(e)
            }
        }
    }
}
