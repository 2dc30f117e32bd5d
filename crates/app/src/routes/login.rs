use client::{AuthOutcome, AuthService, ClientError, HttpAuthService, LoginForm};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdBrain;
use dioxus_free_icons::Icon;
use shared_types::{DemoPersona, FeatureFlags, FormField};
use shared_ui::{
    Alert, AlertVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, Input, Label, PasswordInput,
};

use crate::auth::{use_auth, use_session, RouterNavigator};
use crate::routes::Route;

/// Sign-in page: email/password form plus the demo credentials card.
#[component]
pub fn Login() -> Element {
    let flags: FeatureFlags = use_context();
    let mut auth = use_auth();
    let session = use_session();
    let mut login = use_signal(|| LoginForm::new(&flags));
    let service = use_hook(|| {
        HttpAuthService::from_config(client::config::config()).map_err(|e| e.to_string())
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let service = service.clone();
        async move {
            let request = match login.write().begin_submit() {
                Ok(request) => request,
                Err(rejected) => {
                    tracing::debug!(%rejected, "submission aborted");
                    return;
                }
            };

            let outcome = match &service {
                Ok(service) => service.login(&request).await,
                Err(e) => AuthOutcome::Unreachable(ClientError::Config(e.clone())),
            };

            let mut store = session.store;
            let result = login.write().complete_submit(
                outcome,
                &mut **store.write(),
                &mut RouterNavigator,
            );
            if let Some(user) = result.user() {
                auth.set_user(user.clone());
                if let Err(e) = session.flush().await {
                    tracing::error!(error = %e, "signed in, but the session was not saved to browser storage");
                }
            }
        }
    };

    let (data, errors, ui) = {
        let state = login.read();
        (state.data().clone(), state.errors().clone(), state.ui())
    };
    let email_error = errors.field(FormField::Email).unwrap_or_default().to_string();
    let password_error = errors.field(FormField::Password).unwrap_or_default().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-column",
                div { class: "auth-heading",
                    div { class: "auth-logo",
                        Icon::<LdBrain> { icon: LdBrain, width: 24, height: 24 }
                    }
                    h1 { "Welcome Back" }
                    p { "Sign in to your account" }
                }

                Card {
                    CardHeader {
                        CardTitle { "Sign In" }
                        CardDescription { "Enter your credentials to access your account" }
                    }
                    CardContent {
                        form { class: "auth-form", onsubmit: handle_submit,
                            if let Some(general) = errors.general() {
                                Alert { variant: AlertVariant::Destructive, "{general}" }
                            }

                            div { class: "auth-field",
                                Label { html_for: "email", "Email Address" }
                                Input {
                                    id: "email",
                                    input_type: "email",
                                    placeholder: "Enter your email",
                                    value: data.email.clone(),
                                    error: email_error,
                                    on_input: move |e: FormEvent| login.write().set_field(FormField::Email, e.value()),
                                }
                            }

                            div { class: "auth-field",
                                Label { html_for: "password", "Password" }
                                PasswordInput {
                                    id: "password",
                                    placeholder: "Enter your password",
                                    value: data.password.clone(),
                                    visible: ui.show_password,
                                    error: password_error,
                                    on_toggle: move |_| login.write().toggle_password_visibility(),
                                    on_input: move |e: FormEvent| login.write().set_field(FormField::Password, e.value()),
                                }
                            }

                            Button {
                                class: "auth-submit",
                                button_type: "submit",
                                loading: ui.is_loading,
                                if ui.is_loading { "Signing In..." } else { "Sign In" }
                            }
                        }

                        div { class: "auth-links",
                            p {
                                "Don't have an account? "
                                Link { to: Route::Register {}, "Sign up" }
                            }
                            Link { to: Route::Home {}, class: "auth-back", "← Back to Home" }
                        }
                    }
                }

                if flags.demo_credentials {
                    DemoCredentials { login }
                }
            }
        }
    }
}

/// Sample accounts with buttons that copy them into the form.
#[component]
fn DemoCredentials(login: Signal<LoginForm>) -> Element {
    rsx! {
        Card { muted: true,
            CardContent {
                h3 { class: "demo-title", "Demo Credentials" }
                div { class: "demo-list",
                    for persona in DemoPersona::ALL {
                        DemoRow { key: "{persona:?}", persona, login }
                    }
                }
            }
        }
    }
}

#[component]
fn DemoRow(persona: DemoPersona, mut login: Signal<LoginForm>) -> Element {
    let label = persona.label();
    let credentials = persona.credentials();

    rsx! {
        div { class: "demo-row",
            p { class: "demo-account",
                strong { "{label}:" }
                " {credentials.email} / {credentials.password}"
            }
            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Sm,
                onclick: move |_| login.write().fill_demo(persona),
                "Use {label}"
            }
        }
    }
}
