use std::time::Duration;

use client::navigation::HistoryNavigator;
use client::session::stored_user;
use client::{FileSessionStore, HttpAuthService, LoginController, SubmitOutcome, SubmitRejected};
use pretty_assertions::assert_eq;
use shared_types::{
    DemoPersona, FeatureFlags, FormField, Role, SessionUser, EMAIL_INVALID, EMAIL_REQUIRED,
    PASSWORD_REQUIRED,
};

use crate::common::{self, MockAuthServer};

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let user = SessionUser::new("1", "A", "a@b.co", Role::Hr);
    let server = MockAuthServer::start(move |_| common::ok_user(&user)).await;
    let mut ctl = common::controller(&server.base_url, &FeatureFlags::default());

    let outcome = ctl.submit().await;

    let SubmitOutcome::Aborted(SubmitRejected::Invalid(errors)) = &outcome else {
        panic!("expected a validation abort, got {outcome:?}");
    };
    assert_eq!(errors.field(FormField::Email), Some(EMAIL_REQUIRED));
    assert_eq!(errors.field(FormField::Password), Some(PASSWORD_REQUIRED));
    assert_eq!(server.hits(), 0);
    assert!(!ctl.form().is_loading());
}

#[tokio::test]
async fn test_malformed_email_sends_nothing() {
    let server = MockAuthServer::start(|_| unreachable!("no request expected")).await;
    let mut ctl = common::controller(&server.base_url, &FeatureFlags::default());
    ctl.set_field(FormField::Email, "not-an-email");
    ctl.set_field(FormField::Password, "pw");

    ctl.submit().await;

    assert_eq!(ctl.form().errors().field(FormField::Email), Some(EMAIL_INVALID));
    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn test_each_submit_sends_exactly_one_request() {
    let user = SessionUser::new("1", "A", "a@b.co", Role::Candidate);
    let server = MockAuthServer::start(move |_| common::ok_user(&user)).await;
    let mut ctl = common::controller(&server.base_url, &FeatureFlags::default());
    ctl.set_field(FormField::Email, "a@b.co");
    ctl.set_field(FormField::Password, "pw");

    ctl.submit().await;
    assert_eq!(server.hits(), 1);

    ctl.submit().await;
    assert_eq!(server.hits(), 2);
}

#[tokio::test]
async fn test_demo_fill_then_submit_signs_in_as_hr() {
    let server = MockAuthServer::start(|request| {
        let user = SessionUser::new("7", "Demo HR", request.email.clone(), Role::Hr);
        common::ok_user(&user)
    })
    .await;
    let mut ctl = common::controller(&server.base_url, &FeatureFlags::default());

    ctl.fill_demo(DemoPersona::Hr);
    let outcome = ctl.submit().await;

    assert!(outcome.is_signed_in());
    assert_eq!(server.requests()[0].email, "hr@demo.com");
    assert_eq!(server.requests()[0].password, "password");
    assert_eq!(ctl.navigator().current(), Some("/hr/dashboard"));
}

#[tokio::test]
async fn test_file_store_keeps_session_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let user = SessionUser::new("u-3", "Cal", "cal@mail.io", Role::Candidate);
    let reply = user.clone();
    let server = MockAuthServer::start(move |_| common::ok_user(&reply)).await;

    let auth = HttpAuthService::new(&server.base_url, Duration::from_secs(5)).unwrap();
    let store = FileSessionStore::open(&path).unwrap();
    let mut ctl = LoginController::new(auth, store, HistoryNavigator::new(), &FeatureFlags::default());
    ctl.set_field(FormField::Email, "cal@mail.io");
    ctl.set_field(FormField::Password, "pw");
    ctl.submit().await;
    drop(ctl);

    let reopened = FileSessionStore::open(&path).unwrap();
    assert_eq!(stored_user(&reopened), Some(user));
}

#[tokio::test]
async fn test_demo_fallback_with_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");

    let auth = HttpAuthService::new(&common::unused_base_url(), Duration::from_secs(2)).unwrap();
    let store = FileSessionStore::open(&path).unwrap();
    let mut ctl = LoginController::new(auth, store, HistoryNavigator::new(), &FeatureFlags::default());
    ctl.fill_demo(DemoPersona::Candidate);
    let outcome = ctl.submit().await;
    assert!(matches!(outcome, SubmitOutcome::DemoFallback(_)));

    let reopened = FileSessionStore::open(&path).unwrap();
    assert_eq!(stored_user(&reopened), Some(SessionUser::demo("candidate@demo.com")));
}
