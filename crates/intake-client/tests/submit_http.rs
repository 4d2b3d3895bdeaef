//! End-to-end submission tests against a one-shot local HTTP server.

use std::io::Read;
use std::sync::mpsc;
use std::thread;

use chrono::NaiveDate;
use intake_client::{SubmissionClient, SubmissionError};
use intake_config::SubmissionConfig;
use intake_core::{OnboardingSubmission, Service};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

/// What the fixture server saw.
struct Captured {
    method: String,
    url: String,
    content_type: Option<String>,
    body: String,
}

/// Serve exactly one request with `status` and `body`, then shut down.
///
/// Returns the endpoint URL and a receiver for the captured request.
fn one_shot(status: u16, body: &'static str) -> (String, mpsc::Receiver<Captured>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind fixture server");
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .expect("ip listener");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let Ok(mut request) = server.recv() else {
            return;
        };
        let mut received = String::new();
        let _ = request.as_reader().read_to_string(&mut received);
        let content_type = request
            .headers()
            .iter()
            .find(|h| h.field.equiv("Content-Type"))
            .map(|h| h.value.as_str().to_string());
        let captured = Captured {
            method: request.method().as_str().to_string(),
            url: request.url().to_string(),
            content_type,
            body: received,
        };
        let response = tiny_http::Response::from_string(body)
            .with_status_code(tiny_http::StatusCode(status));
        let _ = request.respond(response);
        let _ = tx.send(captured);
    });

    (format!("http://127.0.0.1:{port}/onboard"), rx)
}

fn client_for(endpoint: &str) -> SubmissionClient {
    SubmissionClient::from_config(&SubmissionConfig {
        endpoint: endpoint.into(),
        ..Default::default()
    })
    .expect("client builds")
}

fn submission() -> OnboardingSubmission {
    OnboardingSubmission {
        full_name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        company_name: "Analytical Engines Ltd".into(),
        services: vec![Service::UiUx, Service::WebDev],
        budget_usd: Some(50_000),
        project_start_date: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap(),
        accept_terms: true,
    }
}

#[tokio::test]
async fn posts_json_and_reports_success() {
    let (endpoint, rx) = one_shot(200, "");
    let result = client_for(&endpoint).submit(&submission()).await;

    assert!(result.success, "unexpected failure: {}", result.message);
    assert_eq!(result.message, "Form submitted successfully!");
    assert!(result.data.is_none());

    let captured = rx.recv().expect("server saw the request");
    assert_eq!(captured.method, "POST");
    assert_eq!(captured.url, "/onboard");
    assert!(
        captured
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("application/json"))
    );

    let sent: Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(
        sent,
        json!({
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "companyName": "Analytical Engines Ltd",
            "services": ["UI/UX", "Web Dev"],
            "budgetUsd": 50000,
            "projectStartDate": "2030-01-15",
            "acceptTerms": true
        })
    );
}

#[tokio::test]
async fn echoed_record_is_returned_as_data() {
    let (endpoint, _rx) = one_shot(
        201,
        r#"{"data":{"fullName":"Ada Lovelace","email":"ada@example.com","companyName":"Analytical Engines Ltd","services":["UI/UX","Web Dev"],"budgetUsd":50000,"projectStartDate":"2030-01-15","acceptTerms":true}}"#,
    );
    let result = client_for(&endpoint).submit(&submission()).await;
    assert!(result.success);
    assert_eq!(result.data, Some(submission()));
}

#[tokio::test]
async fn non_json_success_body_is_still_success() {
    let (endpoint, _rx) = one_shot(200, "thanks!");
    let result = client_for(&endpoint).submit(&submission()).await;
    assert!(result.success);
    assert!(result.data.is_none());
}

#[tokio::test]
async fn bad_request_surfaces_server_detail() {
    let (endpoint, _rx) = one_shot(400, r#"{"error":"duplicate email"}"#);
    let result = client_for(&endpoint).submit(&submission()).await;

    assert!(!result.success);
    assert_eq!(
        result.message,
        "Invalid form data submitted. Details: duplicate email"
    );
    assert!(result.data.is_none());
}

#[tokio::test]
async fn server_error_hides_detail() {
    let (endpoint, _rx) = one_shot(500, "panic at handler.rs:12");
    let err = client_for(&endpoint)
        .deliver(&submission())
        .await
        .expect_err("500 is a rejection");

    assert!(matches!(err, SubmissionError::Rejected { status: 500, .. }));
    assert!(err.is_retryable());
    assert_eq!(
        err.to_string(),
        "Server error. Please try again later or contact support."
    );
}

#[tokio::test]
async fn forbidden_without_body_uses_default_text() {
    let (endpoint, _rx) = one_shot(403, "");
    let result = client_for(&endpoint).submit(&submission()).await;
    assert!(!result.success);
    assert_eq!(
        result.message,
        "Access denied. You don't have permission to submit this form."
    );
}

#[tokio::test]
async fn refused_connection_is_a_transport_failure() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = client_for(&format!("http://127.0.0.1:{port}/onboard"));

    let err = client.deliver(&submission()).await.expect_err("nothing listens");
    assert!(matches!(err, SubmissionError::Transport(_)));

    let result = client.submit(&submission()).await;
    assert!(!result.success);
    assert!(!result.message.trim().is_empty());
}

#[tokio::test]
async fn malformed_endpoint_is_a_transport_failure() {
    let client = client_for("not a url");
    let err = client
        .deliver(&submission())
        .await
        .expect_err("a relative URL cannot be posted to");
    assert!(matches!(err, SubmissionError::Transport(_)));

    let result = client.submit(&submission()).await;
    assert!(!result.success);
    assert!(!result.message.trim().is_empty());
}

#[tokio::test]
async fn placeholder_endpoint_is_simulated() {
    let client = SubmissionClient::from_config(&SubmissionConfig {
        endpoint: "https://example.com/api/onboard".into(),
        sandbox_delay_ms: 0,
        ..Default::default()
    })
    .unwrap();

    let result = client.submit(&submission()).await;
    assert!(result.success);
    assert_eq!(result.message, "Form submitted successfully!");
    assert_eq!(result.data, Some(submission()));
}

#[tokio::test]
async fn unset_endpoint_never_contacts_anything() {
    let client = client_for("  ");
    let err = client.deliver(&submission()).await.unwrap_err();
    assert!(matches!(err, SubmissionError::EndpointNotSet));
    assert!(!err.is_retryable());
}
