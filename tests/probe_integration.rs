//! Probe integration tests against a mock backend
//!
//! Each test stands up a wiremock server, points a runner at it, and
//! checks the transcript the probes produce.

use api_connection_tester::{
    config::Config,
    probe::{AuthStatusProbe, HealthProbe, LoginProbe},
    runner::SequentialRunner,
    transcript::{ResultRecord, Severity, Transcript, TranscriptSink},
};
use serde_json::json;
use std::sync::Arc;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn runner_for(base_url: &str) -> (Arc<Transcript>, SequentialRunner) {
    let mut config = Config::default();
    config.base_url = base_url.to_string();
    config.probe_delay_ms = 0;

    let sink = Arc::new(Transcript::new());
    let runner = SequentialRunner::from_config(&config, sink.clone()).unwrap();
    (sink, runner)
}

fn with_severity(records: &[ResultRecord], severity: Severity) -> Vec<&ResultRecord> {
    records.iter().filter(|r| r.severity == severity).collect()
}

#[tokio::test]
async fn health_ok_emits_two_success_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "OK", "message": "All systems go"})),
        )
        .mount(&server)
        .await;

    let (sink, runner) = runner_for(&server.uri());
    runner.run_probe(&HealthProbe).await;

    let records = sink.snapshot();
    let successes = with_severity(&records, Severity::Success);
    assert_eq!(successes.len(), 2);
    assert!(successes[1].message.contains("All systems go"));
    assert!(with_severity(&records, Severity::Error).is_empty());
}

#[tokio::test]
async fn health_unexpected_status_emits_one_error_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "FAIL"})))
        .mount(&server)
        .await;

    let (sink, runner) = runner_for(&server.uri());
    runner.run_probe(&HealthProbe).await;

    let records = sink.snapshot();
    let errors = with_severity(&records, Severity::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("unexpected data"));
    assert!(errors[0].message.contains("FAIL"));
}

#[tokio::test]
async fn unreachable_backend_emits_one_error_record() {
    // Nothing listens here; the connection is refused
    let (sink, runner) = runner_for("http://127.0.0.1:1");
    runner.run_probe(&HealthProbe).await;

    let records = sink.snapshot();
    let errors = with_severity(&records, Severity::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("Network error"));
    assert!(with_severity(&records, Severity::Success).is_empty());
}

#[tokio::test]
async fn non_json_response_emits_one_error_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let (sink, runner) = runner_for(&server.uri());
    runner.run_probe(&HealthProbe).await;

    let records = sink.snapshot();
    let errors = with_severity(&records, Severity::Error);
    assert_eq!(errors.len(), 1);
}

#[tokio::test]
async fn login_success_emits_welcome_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_partial_json(json!({"email": "admin@proto.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "user": {"name": "Alice", "email": "alice@proto.com"}
        })))
        .mount(&server)
        .await;

    let (sink, runner) = runner_for(&server.uri());
    runner
        .run_probe(&LoginProbe::new("admin@proto.com", "admin123"))
        .await;

    let records = sink.snapshot();
    let successes = with_severity(&records, Severity::Success);
    assert_eq!(successes.len(), 2);
    assert!(successes.iter().any(|r| r.message.contains("Alice")));
}

#[tokio::test]
async fn login_failure_carries_server_error_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"success": false, "error": "bad credentials"})),
        )
        .mount(&server)
        .await;

    let (sink, runner) = runner_for(&server.uri());
    runner
        .run_probe(&LoginProbe::new("admin@proto.com", "wrong"))
        .await;

    let records = sink.snapshot();
    let errors = with_severity(&records, Severity::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("bad credentials"));
}

#[tokio::test]
async fn auth_status_authenticated_emits_user_identity() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authenticated": true,
            "user": {"name": "Alice", "email": "alice@proto.com"}
        })))
        .mount(&server)
        .await;

    let (sink, runner) = runner_for(&server.uri());
    runner.run_probe(&AuthStatusProbe).await;

    let records = sink.snapshot();
    let successes = with_severity(&records, Severity::Success);
    assert_eq!(successes.len(), 2);
    assert!(successes[1].message.contains("Alice"));
    assert!(successes[1].message.contains("alice@proto.com"));
}

#[tokio::test]
async fn auth_status_unauthenticated_is_informational_not_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"authenticated": false})))
        .mount(&server)
        .await;

    let (sink, runner) = runner_for(&server.uri());
    runner.run_probe(&AuthStatusProbe).await;

    let records = sink.snapshot();
    assert!(with_severity(&records, Severity::Error).is_empty());
    assert!(records
        .iter()
        .any(|r| r.severity == Severity::Loading && r.message.contains("not authenticated")));
}

#[tokio::test]
async fn run_all_emits_probes_in_order_with_framing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "OK", "message": "up"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "user": {"name": "Admin", "email": "admin@proto.com"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"authenticated": false})))
        .mount(&server)
        .await;

    let (sink, runner) = runner_for(&server.uri());
    runner.run_all().await.unwrap();

    let messages: Vec<String> = sink.snapshot().iter().map(|r| r.message.clone()).collect();

    assert_eq!(messages.first().unwrap(), "Running all probes...");
    assert_eq!(messages.last().unwrap(), "All probes completed!");

    // Health outcomes come before login outcomes, which come before
    // auth-status outcomes; no interleaving.
    let health = messages.iter().position(|m| m.contains("up")).unwrap();
    let login = messages.iter().position(|m| m.contains("Admin")).unwrap();
    let auth = messages
        .iter()
        .position(|m| m.contains("not authenticated"))
        .unwrap();
    assert!(health < login);
    assert!(login < auth);
}

#[tokio::test]
async fn session_cookie_from_login_reaches_auth_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "OK", "message": "up"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=abc123")
                .set_body_json(json!({
                    "success": true,
                    "user": {"name": "Admin", "email": "admin@proto.com"}
                })),
        )
        .mount(&server)
        .await;
    // Only a request carrying the session cookie is authenticated
    Mock::given(method("GET"))
        .and(path("/auth/status"))
        .and(header("cookie", "session=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authenticated": true,
            "user": {"name": "Admin", "email": "admin@proto.com"}
        })))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"authenticated": false})))
        .with_priority(5)
        .mount(&server)
        .await;

    let (sink, runner) = runner_for(&server.uri());
    runner.run_all().await.unwrap();

    let messages: Vec<String> = sink.snapshot().iter().map(|r| r.message.clone()).collect();
    assert!(messages.iter().any(|m| m == "User is authenticated"));
    assert!(!messages.iter().any(|m| m.contains("not authenticated")));
}

#[tokio::test]
async fn run_named_runs_only_requested_probe() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "OK", "message": "up"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    // Login and auth-status must not be called
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(0)
        .mount(&server)
        .await;

    let (sink, runner) = runner_for(&server.uri());
    runner.run_named(&["health".to_string()]).await.unwrap();

    let messages: Vec<String> = sink.snapshot().iter().map(|r| r.message.clone()).collect();
    assert!(messages.iter().any(|m| m.contains("up")));
    assert!(!messages.iter().any(|m| m.contains("Login")));
    assert_eq!(messages.first().unwrap(), "Running selected probes: health...");
}

#[tokio::test]
async fn run_named_with_any_unknown_name_runs_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "OK", "message": "up"})),
        )
        .expect(0)
        .mount(&server)
        .await;

    let (sink, runner) = runner_for(&server.uri());
    let result = runner
        .run_named(&["health".to_string(), "bogus".to_string()])
        .await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("bogus"));
    assert!(sink.snapshot().is_empty());
}
