use std::time::Duration;

use axum::http::StatusCode;
use client::form::UNREACHABLE_MESSAGE;
use client::session::stored_user;
use client::SubmitOutcome;
use pretty_assertions::assert_eq;
use shared_types::{FeatureFlags, FormField, Role, SessionUser};

use crate::common::{self, MockAuthServer};

fn fill(ctl: &mut common::TestController, email: &str) {
    ctl.set_field(FormField::Email, email);
    ctl.set_field(FormField::Password, "anything");
}

#[tokio::test]
async fn test_unreachable_hr_email_gets_demo_hr_session() {
    let mut ctl = common::controller(&common::unused_base_url(), &FeatureFlags::default());
    fill(&mut ctl, "qa-hr@example.com");

    let outcome = ctl.submit().await;

    let expected = SessionUser::demo("qa-hr@example.com");
    assert_eq!(outcome, SubmitOutcome::DemoFallback(expected.clone()));
    assert_eq!(expected.role(), Role::Hr);
    assert_eq!(expected.id, "1");
    assert_eq!(expected.name, "Demo User");
    assert_eq!(stored_user(ctl.store()), Some(expected));
    assert_eq!(ctl.navigator().current(), Some("/hr/dashboard"));
    assert!(!ctl.form().is_loading());
}

#[tokio::test]
async fn test_unreachable_other_email_gets_demo_candidate_session() {
    let mut ctl = common::controller(&common::unused_base_url(), &FeatureFlags::default());
    fill(&mut ctl, "qa@example.com");

    let outcome = ctl.submit().await;

    assert_eq!(outcome.user().map(SessionUser::role), Some(Role::Candidate));
    assert_eq!(ctl.navigator().current(), Some("/candidate/dashboard"));
}

#[tokio::test]
async fn test_unreachable_with_demo_mode_off_shows_error() {
    let mut ctl = common::controller(&common::unused_base_url(), &common::demo_off());
    fill(&mut ctl, "hr@demo.com");

    let outcome = ctl.submit().await;

    assert_eq!(outcome, SubmitOutcome::Failed(UNREACHABLE_MESSAGE.into()));
    assert_eq!(ctl.form().errors().general(), Some(UNREACHABLE_MESSAGE));
    assert!(ctl.store().is_empty());
    assert!(ctl.navigator().history().is_empty());
    assert!(!ctl.form().is_loading());
}

#[tokio::test]
async fn test_undecodable_success_body_uses_demo_session() {
    let server = MockAuthServer::start(|_| {
        common::raw(StatusCode::OK, "text/plain", "welcome!")
    })
    .await;
    let mut ctl = common::controller(&server.base_url, &FeatureFlags::default());
    fill(&mut ctl, "candidate@demo.com");

    let outcome = ctl.submit().await;

    assert_eq!(outcome, SubmitOutcome::DemoFallback(SessionUser::demo("candidate@demo.com")));
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn test_success_body_without_user_uses_demo_session() {
    let server = MockAuthServer::start(|_| {
        common::raw(StatusCode::OK, "application/json", r#"{"token":"abc"}"#)
    })
    .await;
    let mut ctl = common::controller(&server.base_url, &FeatureFlags::default());
    fill(&mut ctl, "qa@example.com");

    let outcome = ctl.submit().await;

    assert_eq!(outcome, SubmitOutcome::DemoFallback(SessionUser::demo("qa@example.com")));
}

#[tokio::test]
async fn test_html_error_page_uses_demo_session() {
    let server = MockAuthServer::start(|_| {
        common::raw(StatusCode::NOT_FOUND, "text/html", "Cannot POST /api/auth/login")
    })
    .await;
    let mut ctl = common::controller(&server.base_url, &FeatureFlags::default());
    fill(&mut ctl, "qa-hr@example.com");

    let outcome = ctl.submit().await;

    let expected = SessionUser::demo("qa-hr@example.com");
    assert_eq!(outcome, SubmitOutcome::DemoFallback(expected.clone()));
    assert_eq!(stored_user(ctl.store()), Some(expected));
    assert_eq!(ctl.navigator().current(), Some("/hr/dashboard"));
    assert_eq!(ctl.form().errors().general(), None);
}

#[tokio::test]
async fn test_empty_error_body_uses_demo_session() {
    let server = MockAuthServer::start(|_| common::raw(StatusCode::BAD_GATEWAY, "text/plain", ""))
        .await;
    let mut ctl = common::controller(&server.base_url, &FeatureFlags::default());
    fill(&mut ctl, "candidate@demo.com");

    let outcome = ctl.submit().await;

    assert_eq!(outcome, SubmitOutcome::DemoFallback(SessionUser::demo("candidate@demo.com")));
    assert_eq!(ctl.navigator().current(), Some("/candidate/dashboard"));
}

#[tokio::test]
async fn test_html_error_page_with_demo_mode_off_shows_error() {
    let server = MockAuthServer::start(|_| {
        common::raw(StatusCode::BAD_GATEWAY, "text/html", "<html>502 Bad Gateway</html>")
    })
    .await;
    let mut ctl = common::controller(&server.base_url, &common::demo_off());
    fill(&mut ctl, "hr@demo.com");

    let outcome = ctl.submit().await;

    assert_eq!(outcome, SubmitOutcome::Failed(UNREACHABLE_MESSAGE.into()));
    assert_eq!(ctl.form().errors().general(), Some(UNREACHABLE_MESSAGE));
    assert!(ctl.store().is_empty());
}

#[tokio::test]
async fn test_slow_service_times_out_into_demo_session() {
    let server = MockAuthServer::start_with_delay(Duration::from_secs(3), |_| {
        common::raw(StatusCode::OK, "application/json", "{}")
    })
    .await;
    let mut ctl = common::controller_with_timeout(
        &server.base_url,
        &FeatureFlags::default(),
        Duration::from_millis(200),
    );
    fill(&mut ctl, "hr@demo.com");

    let outcome = ctl.submit().await;

    assert!(matches!(outcome, SubmitOutcome::DemoFallback(_)));
    assert_eq!(ctl.navigator().current(), Some("/hr/dashboard"));
}

#[tokio::test]
async fn test_demo_session_uses_email_typed_at_submit() {
    let mut ctl = common::controller(&common::unused_base_url(), &FeatureFlags::default());
    fill(&mut ctl, "hr-lead@corp.io");

    let outcome = ctl.submit().await;

    assert_eq!(outcome.user().map(|u| u.email.as_str()), Some("hr-lead@corp.io"));
}
