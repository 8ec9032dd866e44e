mod support;

use std::sync::Arc;

use client::{ApiClient, ClientError, Session};
use serde_json::json;
use support::{MockBackend, temp_token_file};

#[tokio::test]
async fn successful_login_stores_token_in_memory_and_on_disk() {
    let backend = MockBackend::start().await;
    backend.stub("POST", "/auth/login", 200, json!("abc123"));

    let token_file = temp_token_file("login-ok");
    let session = Arc::new(Session::with_file(token_file.clone()));
    let api = ApiClient::new(backend.url(), session.clone());

    let token = api.login("a@x.com", "secret").await.unwrap();

    assert_eq!(token, "abc123");
    assert_eq!(session.token().as_deref(), Some("abc123"));
    assert_eq!(std::fs::read_to_string(&token_file).unwrap(), "abc123");

    let calls = backend.calls_to("POST", "/auth/login");
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].body,
        Some(json!({"email": "a@x.com", "password": "secret"}))
    );
    // No token existed yet, so the login request itself carries none.
    assert_eq!(calls[0].bearer, None);

    std::fs::remove_file(&token_file).unwrap();
}

#[tokio::test]
async fn rejected_login_stores_nothing() {
    let backend = MockBackend::start().await;
    backend.stub(
        "POST",
        "/auth/login",
        401,
        json!({"message": "Credenciales incorrectas"}),
    );

    let token_file = temp_token_file("login-rejected");
    let session = Arc::new(Session::with_file(token_file.clone()));
    let api = ApiClient::new(backend.url(), session.clone());

    let err = api.login("a@x.com", "wrong").await.unwrap_err();

    assert!(matches!(err, ClientError::Unauthorized));
    assert!(session.token().is_none());
    assert!(!token_file.exists());
}

#[tokio::test]
async fn invalid_credentials_are_rejected_before_any_request() {
    let backend = MockBackend::start().await;
    let api = ApiClient::new(backend.url(), Arc::new(Session::in_memory()));

    let err = api.login("not-an-email", "secret").await.unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn logout_clears_memory_and_disk() {
    let backend = MockBackend::start().await;
    backend.stub("POST", "/auth/login", 200, json!("abc123"));

    let token_file = temp_token_file("logout");
    let session = Arc::new(Session::with_file(token_file.clone()));
    let api = ApiClient::new(backend.url(), session.clone());

    api.login("a@x.com", "secret").await.unwrap();
    assert!(token_file.exists());

    api.logout().unwrap();
    assert!(session.token().is_none());
    assert!(!token_file.exists());
}

#[tokio::test]
async fn unauthorized_response_clears_the_session() {
    let backend = MockBackend::start().await;
    backend.stub("GET", "/participantes", 401, json!({"message": "expired"}));

    let token_file = temp_token_file("expired");
    let session = Arc::new(Session::with_file(token_file.clone()));
    session.set_token("stale-token").unwrap();
    let api = ApiClient::new(backend.url(), session.clone());

    let err = api.participants().list().await.unwrap_err();

    assert!(err.is_auth());
    assert!(session.token().is_none());
    assert!(!token_file.exists());
}

#[tokio::test]
async fn bearer_token_is_attached_when_present_and_omitted_when_absent() {
    let backend = MockBackend::start().await;
    backend.stub("GET", "/pistas", 200, json!([]));

    let session = Arc::new(Session::in_memory());
    let api = ApiClient::new(backend.url(), session.clone());

    api.tracks().list().await.unwrap();

    session.set_token("abc123").unwrap();
    api.tracks().list().await.unwrap();

    let calls = backend.calls_to("GET", "/pistas");
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].bearer, None);
    assert_eq!(calls[1].bearer.as_deref(), Some("abc123"));
}
