use shared_types::{DemoPersona, FeatureFlags, FormField};

use crate::auth::AuthService;
use crate::form::{LoginForm, SubmitOutcome};
use crate::navigation::Navigator;
use crate::session::SessionStore;

/// Owns a [`LoginForm`] together with its collaborators and runs whole
/// submissions.
pub struct LoginController<A, S, N> {
    form: LoginForm,
    auth: A,
    store: S,
    navigator: N,
}

impl<A, S, N> LoginController<A, S, N>
where
    A: AuthService,
    S: SessionStore,
    N: Navigator,
{
    pub fn new(auth: A, store: S, navigator: N, flags: &FeatureFlags) -> Self {
        Self {
            form: LoginForm::new(flags),
            auth,
            store,
            navigator,
        }
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    pub fn fill_demo(&mut self, persona: DemoPersona) {
        self.form.fill_demo(persona);
    }

    pub fn toggle_password_visibility(&mut self) {
        self.form.toggle_password_visibility();
    }

    /// Validate, call the auth service at most once, then persist and
    /// navigate according to the outcome.
    #[tracing::instrument(skip(self), fields(email = %self.form.data().email))]
    pub async fn submit(&mut self) -> SubmitOutcome {
        let request = match self.form.begin_submit() {
            Ok(request) => request,
            Err(rejected) => {
                tracing::debug!(%rejected, "submission aborted");
                return SubmitOutcome::Aborted(rejected);
            }
        };

        let outcome = self.auth.login(&request).await;
        self.form
            .complete_submit(outcome, &mut self.store, &mut self.navigator)
    }

    pub fn into_parts(self) -> (LoginForm, A, S, N) {
        (self.form, self.auth, self.store, self.navigator)
    }
}
