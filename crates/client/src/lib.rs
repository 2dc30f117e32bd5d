//! Client-side sign-in services for the talent portal.
//!
//! The [`form::LoginForm`] state machine talks to three injected
//! collaborators: an [`auth::AuthService`], a [`session::SessionStore`],
//! and a [`navigation::Navigator`].

pub mod auth;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod navigation;
pub mod session;

pub use auth::{AuthOutcome, AuthService, HttpAuthService};
pub use controller::LoginController;
pub use error::ClientError;
pub use form::{LoginForm, SubmitOutcome, SubmitPhase, SubmitRejected, UiState};
pub use navigation::Navigator;
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
