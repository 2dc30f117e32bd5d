//! Sign-in form state machine.
//!
//! `Idle → Validating → Submitting → {Success, Failed, DemoFallback} → Idle`
//!
//! The form is driven through explicit transitions so it can be tested
//! without a renderer. An async caller runs [`LoginForm::begin_submit`],
//! awaits the auth service, then hands the result to
//! [`LoginForm::complete_submit`]. [`crate::LoginController`] does both.

use shared_types::{
    validate, DemoPersona, ErrorMap, FeatureFlags, FormData, FormField, LoginRequest, SessionUser,
};
use thiserror::Error;

use crate::auth::AuthOutcome;
use crate::navigation::Navigator;
use crate::session::{store_user, SessionStore};

/// Banner text when the service rejects the attempt without a message.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Login failed";
/// Banner text for a transport failure while demo mode is off.
pub const UNREACHABLE_MESSAGE: &str = "Unable to reach the sign-in service. Please try again.";
/// Banner text when the session could not be persisted after sign-in.
pub const SESSION_SAVE_FAILED_MESSAGE: &str =
    "Signed in, but your session could not be saved. Please try again.";

/// Transient presentation flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub is_loading: bool,
    pub show_password: bool,
}

/// Where the form is in a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Waiting on the auth service. Holds the email captured when the
    /// attempt began, used if a demo session has to be created.
    Submitting { email: String },
}

/// Why a submit trigger did not start a service call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    /// Validation failed; the map is what the form now shows.
    #[error("form has {} validation error(s)", .0.len())]
    Invalid(ErrorMap),
    /// A previous submission is still waiting on the auth service.
    #[error("a sign-in attempt is already in progress")]
    InFlight,
    /// `complete_submit` was called with no attempt outstanding.
    #[error("no sign-in attempt is in progress")]
    NotInFlight,
}

/// Terminal state of one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing was sent (or the completion was stray).
    Aborted(SubmitRejected),
    /// The service accepted the credentials.
    Success(SessionUser),
    /// The service was unreachable and a synthetic session was created.
    DemoFallback(SessionUser),
    /// The attempt ended with the given banner message.
    Failed(String),
}

impl SubmitOutcome {
    /// User now has a session and has been navigated to a dashboard.
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SubmitOutcome::Success(_) | SubmitOutcome::DemoFallback(_))
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SubmitOutcome::Success(user) | SubmitOutcome::DemoFallback(user) => Some(user),
            _ => None,
        }
    }
}

/// Field values, error map and presentation flags for the sign-in screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginForm {
    data: FormData,
    errors: ErrorMap,
    ui: UiState,
    demo_mode: bool,
    phase: SubmitPhase,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new(&FeatureFlags::default())
    }
}

impl LoginForm {
    pub fn new(flags: &FeatureFlags) -> Self {
        Self {
            data: FormData::default(),
            errors: ErrorMap::new(),
            ui: UiState::default(),
            demo_mode: flags.demo_mode,
            phase: SubmitPhase::Idle,
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn ui(&self) -> UiState {
        self.ui
    }

    pub fn is_loading(&self) -> bool {
        self.ui.is_loading
    }

    pub fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    /// Record user input. Clears that field's error and no other.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.data.set(field, value.into());
        self.errors.clear_field(field);
    }

    pub fn toggle_password_visibility(&mut self) {
        self.ui.show_password = !self.ui.show_password;
    }

    /// Overwrite both fields with a sample account and drop every error.
    pub fn fill_demo(&mut self, persona: DemoPersona) {
        self.data = persona.credentials();
        self.errors.clear();
    }

    /// [`Self::fill_demo`] keyed by the tag the screen buttons use.
    pub fn fill_demo_tag(&mut self, tag: &str) {
        self.fill_demo(DemoPersona::from_tag(tag));
    }

    /// Run the validator and replace the error map with its result.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.data);
        self.errors.is_empty()
    }

    /// Submit trigger: validate and, if clean, enter `Submitting`.
    ///
    /// Returns the request to send. `isLoading` is only set when this
    /// returns `Ok`.
    pub fn begin_submit(&mut self) -> Result<LoginRequest, SubmitRejected> {
        if matches!(self.phase, SubmitPhase::Submitting { .. }) {
            return Err(SubmitRejected::InFlight);
        }
        if !self.validate() {
            return Err(SubmitRejected::Invalid(self.errors.clone()));
        }

        self.ui.is_loading = true;
        self.errors.clear_general();
        self.phase = SubmitPhase::Submitting {
            email: self.data.email.clone(),
        };
        Ok(self.data.to_request())
    }

    /// Apply the auth service result, persist and navigate as required,
    /// and return to `Idle`.
    pub fn complete_submit(
        &mut self,
        outcome: AuthOutcome,
        store: &mut dyn SessionStore,
        navigator: &mut dyn Navigator,
    ) -> SubmitOutcome {
        let SubmitPhase::Submitting { email } = std::mem::take(&mut self.phase) else {
            tracing::warn!("ignoring sign-in completion with no attempt outstanding");
            return SubmitOutcome::Aborted(SubmitRejected::NotInFlight);
        };

        let result = match outcome {
            AuthOutcome::Authenticated(user) => {
                self.enter_session(user, SubmitOutcome::Success, store, navigator)
            }
            AuthOutcome::Rejected {
                message,
                field_errors,
                ..
            } => {
                let message = message.unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string());
                self.errors = ErrorMap::new();
                self.errors.set_general(message.clone());
                for (key, msg) in field_errors {
                    if let Some(field) = FormField::from_key(&key) {
                        self.errors.set_field(field, msg);
                    }
                }
                SubmitOutcome::Failed(message)
            }
            AuthOutcome::Unreachable(err) if self.demo_mode => {
                tracing::warn!(error = %err, "auth service unreachable; signing in with a demo session");
                let user = SessionUser::demo(&email);
                self.enter_session(user, SubmitOutcome::DemoFallback, store, navigator)
            }
            AuthOutcome::Unreachable(err) => {
                tracing::warn!(error = %err, "auth service unreachable");
                self.errors = ErrorMap::new();
                self.errors.set_general(UNREACHABLE_MESSAGE);
                SubmitOutcome::Failed(UNREACHABLE_MESSAGE.to_string())
            }
        };

        self.ui.is_loading = false;
        result
    }

    fn enter_session(
        &mut self,
        user: SessionUser,
        wrap: fn(SessionUser) -> SubmitOutcome,
        store: &mut dyn SessionStore,
        navigator: &mut dyn Navigator,
    ) -> SubmitOutcome {
        if let Err(e) = store_user(store, &user) {
            tracing::error!(error = %e, "failed to persist session user");
            self.errors = ErrorMap::new();
            self.errors.set_general(SESSION_SAVE_FAILED_MESSAGE);
            return SubmitOutcome::Failed(SESSION_SAVE_FAILED_MESSAGE.to_string());
        }
        tracing::info!(role = %user.role, "signed in");
        navigator.navigate(user.dashboard_path());
        wrap(user)
    }
}
