mod common;

use std::time::Duration;

use musajjil::Route;
use musajjil::SubmitOutcome;
use musajjil::config::SessionConfig;
use musajjil::constants::ERR_EMAIL_INVALID;
use musajjil::constants::MSG_REGISTER_SUCCESS;
use musajjil::model::Field;
use musajjil::model::Lifecycle;
use musajjil::model::SubmissionState;
use pretty_assertions::assert_eq;
use tokio::time::Instant;

use common::*;

const LATENCY: Duration = Duration::from_millis(200);

#[test_log::test(tokio::test(start_paused = true))]
async fn rapid_double_submit_sends_one_request() {
    let client = ScriptedClient::new(LATENCY, vec![success(), success()]);
    let (session, _routes) = session_with(client.clone(), SessionConfig::default());
    fill(&session, &valid_form());

    let (first, second) = tokio::join!(session.submit(), session.submit());

    assert_eq!(first, SubmitOutcome::Registered);
    assert_eq!(second, SubmitOutcome::Busy);
    assert!(first.sent_request());
    assert!(!second.sent_request());
    assert_eq!(client.requests().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn busy_flag_covers_exactly_the_request() {
    let client = ScriptedClient::new(LATENCY, vec![rejected(409, Some("taken"))]);
    let (session, _routes) = session_with(client, SessionConfig::default());
    fill(&session, &valid_form());

    assert_eq!(session.submission_state(), SubmissionState::Idle);
    let submit = session.submit();
    tokio::pin!(submit);

    // drive the submission up to the network call
    tokio::select! {
        biased;
        _ = &mut submit => panic!("request finished too early"),
        _ = tokio::time::sleep(Duration::from_millis(1)) => {},
    }
    assert!(session.is_loading());
    assert_eq!(session.lifecycle(), Lifecycle::Submitting);

    let outcome = submit.await;
    assert!(matches!(outcome, SubmitOutcome::Rejected { status: 409, .. }));
    assert_eq!(session.submission_state(), SubmissionState::Idle);
}

#[tokio::test(start_paused = true)]
async fn success_message_expires_after_ttl() {
    let client = ScriptedClient::new(Duration::ZERO, vec![success()]);
    let (session, _routes) = session_with(client, SessionConfig::default());
    fill(&session, &valid_form());

    assert_eq!(session.submit().await, SubmitOutcome::Registered);
    let shown_at = Instant::now();
    assert_eq!(session.message_text(), MSG_REGISTER_SUCCESS);

    tokio::time::sleep_until(shown_at + Duration::from_millis(2999)).await;
    assert_eq!(session.message_text(), MSG_REGISTER_SUCCESS);

    tokio::time::sleep_until(shown_at + Duration::from_millis(3001)).await;
    assert_eq!(session.message_text(), "");
}

#[tokio::test(start_paused = true)]
async fn redirect_happens_at_one_second_and_not_before() {
    let client = ScriptedClient::new(Duration::ZERO, vec![success()]);
    let (session, mut routes) = session_with(client, SessionConfig::default());
    fill(&session, &valid_form());

    assert_eq!(session.submit().await, SubmitOutcome::Registered);
    let succeeded_at = Instant::now();

    tokio::time::sleep_until(succeeded_at + Duration::from_millis(999)).await;
    assert!(routes.try_recv().is_err());

    tokio::time::sleep_until(succeeded_at + Duration::from_millis(1001)).await;
    assert_eq!(routes.try_recv().ok(), Some(Route::Dashboard));
    assert!(routes.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn network_failure_releases_busy_flag() {
    let client = ScriptedClient::new(LATENCY, vec![network_failure()]);
    let (session, mut routes) = session_with(client, SessionConfig::default());
    fill(&session, &valid_form());

    let outcome = session.submit().await;

    assert!(matches!(outcome, SubmitOutcome::NetworkFailed(_)));
    assert!(outcome.sent_request());
    assert_eq!(session.submission_state(), SubmissionState::Idle);
    assert_eq!(session.lifecycle(), Lifecycle::Idle);
    assert_eq!(session.message_text(), "Register failed: Network error");

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(routes.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn server_rejection_shows_server_message() {
    let client = ScriptedClient::new(LATENCY, vec![rejected(400, Some("Email already exists")), rejected(500, None)]);
    let (session, _routes) = session_with(client, SessionConfig::default());
    fill(&session, &valid_form());

    let outcome = session.submit().await;
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            status: 400,
            message: "Email already exists".to_string()
        }
    );
    assert_eq!(session.message_text(), "Register failed: Email already exists");

    // a body without a message still produces the prefix
    session.submit().await;
    assert_eq!(session.message_text(), "Register failed: ");
    assert_eq!(session.submission_state(), SubmissionState::Idle);
}

#[tokio::test(start_paused = true)]
async fn resubmit_after_server_error_starts_fresh() {
    let client = ScriptedClient::new(LATENCY, vec![rejected(400, Some("Email already exists")), success()]);
    let (session, mut routes) = session_with(client.clone(), SessionConfig::default());
    fill(&session, &valid_form());

    session.submit().await;
    assert_eq!(session.message_text(), "Register failed: Email already exists");

    session.set_email("not-an-email");
    let outcome = session.submit().await;
    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert_eq!(session.message_text(), "");
    assert_eq!(session.errors().fields().collect::<Vec<_>>(), vec![Field::Email]);
    assert_eq!(session.errors().get(Field::Email), Some(ERR_EMAIL_INVALID));

    session.set_email("jane.doe@example.org");
    assert_eq!(session.submit().await, SubmitOutcome::Registered);
    assert!(session.errors().is_empty());
    assert_eq!(client.requests().len(), 2);

    tokio::time::sleep(Duration::from_millis(1001)).await;
    assert_eq!(routes.try_recv().ok(), Some(Route::Dashboard));
}

#[tokio::test(start_paused = true)]
async fn request_uses_snapshot_taken_at_submit() {
    let client = ScriptedClient::new(LATENCY, vec![success()]);
    let (session, _routes) = session_with(client.clone(), SessionConfig::default());
    fill(&session, &valid_form());

    let submit = session.submit();
    tokio::pin!(submit);
    tokio::select! {
        biased;
        _ = &mut submit => panic!("request finished too early"),
        _ = tokio::time::sleep(Duration::from_millis(1)) => {},
    }

    session.set_email("changed@example.com");
    assert_eq!(submit.await, SubmitOutcome::Registered);

    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].email, "jane@example.com");
    assert_eq!(requests[0].name, "jane.doe");
    assert_eq!(session.form().email, "changed@example.com");
}

#[tokio::test(start_paused = true)]
async fn invalid_form_never_reaches_network() {
    let client = ScriptedClient::new(LATENCY, vec![success()]);
    let (session, _routes) = session_with(client.clone(), SessionConfig::default());
    session.set_username("jane");
    session.set_email("jane@example.com");
    session.set_password("abcdefgh");

    let outcome = session.submit().await;

    assert!(!outcome.sent_request());
    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected field errors, got {:?}", outcome);
    };
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Password, Field::Terms]);
    assert_eq!(errors.get(Field::Password), Some("Password must contain at least one uppercase letter"));
    assert!(client.requests().is_empty());
    assert_eq!(session.lifecycle(), Lifecycle::Idle);
}

#[tokio::test(start_paused = true)]
async fn configured_timings_are_honoured() {
    let client = ScriptedClient::new(Duration::ZERO, vec![success()]);
    let config = SessionConfig {
        message_ttl_ms: 500,
        redirect_delay_ms: 100,
    };
    let (session, mut routes) = session_with(client, config);
    fill(&session, &valid_form());

    session.submit().await;

    tokio::time::sleep(Duration::from_millis(101)).await;
    assert_eq!(routes.try_recv().ok(), Some(Route::Dashboard));
    assert_eq!(session.message_text(), MSG_REGISTER_SUCCESS);

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(session.message_text(), "");
}
