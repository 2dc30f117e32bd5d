use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use client::form::DEFAULT_REJECTION_MESSAGE;
use client::SubmitOutcome;
use pretty_assertions::assert_eq;
use shared_types::{AppError, FeatureFlags, FormField};

use crate::common::{self, MockAuthServer};

async fn submit_against(server: &MockAuthServer) -> common::TestController {
    let mut ctl = common::controller(&server.base_url, &FeatureFlags::default());
    ctl.set_field(FormField::Email, "hr@demo.com");
    ctl.set_field(FormField::Password, "wrong");
    ctl.submit().await;
    ctl
}

#[tokio::test]
async fn test_unauthorized_shows_service_message() {
    let server = MockAuthServer::start(|_| {
        AppError::unauthorized("Invalid email or password").into_response()
    })
    .await;
    let mut ctl = common::controller(&server.base_url, &FeatureFlags::default());
    ctl.set_field(FormField::Email, "hr@demo.com");
    ctl.set_field(FormField::Password, "wrong");

    let outcome = ctl.submit().await;

    assert_eq!(outcome, SubmitOutcome::Failed("Invalid email or password".into()));
    assert_eq!(ctl.form().errors().general(), Some("Invalid email or password"));
    assert!(ctl.store().is_empty());
    assert!(ctl.navigator().history().is_empty());
    assert!(!ctl.form().is_loading());
}

#[tokio::test]
async fn test_bare_message_body_is_used() {
    let server = MockAuthServer::start(|_| {
        common::raw(
            StatusCode::FORBIDDEN,
            "application/json",
            r#"{"message":"Account locked"}"#,
        )
    })
    .await;

    let ctl = submit_against(&server).await;

    assert_eq!(ctl.form().errors().general(), Some("Account locked"));
}

#[tokio::test]
async fn test_json_string_body_falls_back_to_default_message() {
    let server = MockAuthServer::start(|_| {
        common::raw(StatusCode::FORBIDDEN, "application/json", r#""forbidden""#)
    })
    .await;

    let ctl = submit_against(&server).await;

    assert_eq!(ctl.form().errors().general(), Some(DEFAULT_REJECTION_MESSAGE));
    assert!(ctl.store().is_empty());
    assert!(ctl.navigator().history().is_empty());
}

#[tokio::test]
async fn test_empty_message_falls_back_to_default() {
    let server = MockAuthServer::start(|_| {
        common::raw(StatusCode::UNAUTHORIZED, "application/json", r#"{"message":""}"#)
    })
    .await;

    let ctl = submit_against(&server).await;

    assert_eq!(ctl.form().errors().general(), Some(DEFAULT_REJECTION_MESSAGE));
}

#[tokio::test]
async fn test_service_field_errors_are_shown_inline() {
    let server = MockAuthServer::start(|_| {
        let fields = HashMap::from([
            ("email".to_string(), "No account with that email".to_string()),
            ("otp".to_string(), "ignored".to_string()),
        ]);
        AppError::validation("Check the highlighted fields", fields).into_response()
    })
    .await;

    let ctl = submit_against(&server).await;

    let errors = ctl.form().errors();
    assert_eq!(errors.general(), Some("Check the highlighted fields"));
    assert_eq!(errors.field(FormField::Email), Some("No account with that email"));
    assert_eq!(errors.field(FormField::Password), None);
    assert_eq!(errors.len(), 2);
}

#[tokio::test]
async fn test_rejection_never_triggers_demo_fallback() {
    let server = MockAuthServer::start(|_| {
        AppError::unavailable("Maintenance window").into_response()
    })
    .await;

    let ctl = submit_against(&server).await;

    assert!(ctl.store().is_empty());
    assert_eq!(ctl.form().errors().general(), Some("Maintenance window"));
}

#[tokio::test]
async fn test_next_edit_clears_only_that_field_error() {
    let server = MockAuthServer::start(|_| {
        let fields = HashMap::from([
            ("email".to_string(), "Unknown".to_string()),
            ("password".to_string(), "Too short".to_string()),
        ]);
        AppError::validation("Nope", fields).into_response()
    })
    .await;
    let mut ctl = submit_against(&server).await;

    ctl.set_field(FormField::Password, "longer password");

    let errors = ctl.form().errors();
    assert_eq!(errors.field(FormField::Password), None);
    assert_eq!(errors.field(FormField::Email), Some("Unknown"));
    assert_eq!(errors.general(), Some("Nope"));
}
