//! Mock API tests for the HTTP transport.
//!
//! These tests use wiremock to simulate the Nanit cloud API and drive the
//! full session lifecycle over real HTTP, without network access or real
//! credentials.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nanit_core::error::AuthError;
use nanit_core::{
    AccessToken, ApiUrl, BabyUid, Credentials, Error, RefreshToken, SessionManager, TokenPair,
};
use nanit_http::HttpTransport;

/// Helper to build a session manager against a mock server.
fn mock_session(server: &MockServer) -> SessionManager<HttpTransport> {
    let base = ApiUrl::new(&format!("http://127.0.0.1:{}", server.address().port())).unwrap();
    SessionManager::new(HttpTransport::with_base_url(base))
}

/// Helper to build an already-authenticated manager, as a caller restoring
/// persisted tokens would.
fn restored_session(server: &MockServer, access: &str, refresh: &str) -> SessionManager<HttpTransport> {
    let base = ApiUrl::new(&format!("http://127.0.0.1:{}", server.address().port())).unwrap();
    SessionManager::with_tokens(
        HttpTransport::with_base_url(base),
        TokenPair::new(AccessToken::new(access), RefreshToken::new(refresh)),
    )
}

fn credentials() -> Credentials {
    Credentials::new("a@b.com", "pw")
}

// ============================================================================
// Login Initiation
// ============================================================================

#[tokio::test]
async fn test_initiate_login_challenge_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("nanit-api-version", "1"))
        .and(body_json(json!({
            "email": "a@b.com",
            "password": "pw",
            "channel": "email"
        })))
        .respond_with(ResponseTemplate::new(482).set_body_json(json!({
            "mfa_token": "tok1"
        })))
        .mount(&server)
        .await;

    let session = mock_session(&server);
    let mfa_token = session.initiate_login(&credentials()).await.unwrap();

    assert_eq!(mfa_token.as_str(), "tok1");
}

#[tokio::test]
async fn test_initiate_login_plain_ok_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "mfa_token": "tok2"
        })))
        .mount(&server)
        .await;

    let session = mock_session(&server);
    let mfa_token = session.initiate_login(&credentials()).await.unwrap();

    assert_eq!(mfa_token.as_str(), "tok2");
}

#[tokio::test]
async fn test_initiate_login_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid email or password"
        })))
        .mount(&server)
        .await;

    let session = mock_session(&server);
    let err = session.initiate_login(&credentials()).await.unwrap_err();

    match err {
        Error::Auth(AuthError::AuthenticationFailed { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid email or password"));
        }
        other => panic!("expected AuthenticationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_initiate_login_missing_mfa_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let session = mock_session(&server);
    let err = session.initiate_login(&credentials()).await.unwrap_err();

    assert!(matches!(err, Error::MalformedResponse(_)));
}

// ============================================================================
// Login Completion
// ============================================================================

#[tokio::test]
async fn test_complete_login_stores_tokens_and_authorizes_requests() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({
            "email": "a@b.com",
            "password": "pw",
            "channel": "email"
        })))
        .respond_with(ResponseTemplate::new(482).set_body_json(json!({
            "mfa_token": "tok1"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({
            "email": "a@b.com",
            "password": "pw",
            "channel": "email",
            "mfa_token": "tok1",
            "mfa_code": "000000"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "AT1",
            "refresh_token": "RT1"
        })))
        .mount(&server)
        .await;

    // The follow-up request must carry exactly the token just issued.
    Mock::given(method("GET"))
        .and(path("/babies"))
        .and(header("Authorization", "AT1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "babies": [{"uid": "dev1", "name": "Juno"}]
        })))
        .mount(&server)
        .await;

    let mut session = mock_session(&server);
    let creds = credentials();
    let mfa_token = session.initiate_login(&creds).await.unwrap();
    let tokens = session.complete_login(&creds, &mfa_token, "000000").await.unwrap();

    assert_eq!(tokens.access().as_str(), "AT1");
    assert_eq!(tokens.refresh().as_str(), "RT1");

    let babies = session.babies().await.unwrap();
    assert_eq!(babies["babies"][0]["uid"], "dev1");

    let uid = BabyUid::new("dev1").unwrap();
    assert_eq!(
        session.stream_url(&uid).unwrap(),
        "rtmps://media-secured.nanit.com/nanit/dev1.AT1"
    );
}

#[tokio::test]
async fn test_complete_login_bad_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid mfa code"
        })))
        .mount(&server)
        .await;

    let mut session = mock_session(&server);
    let creds = credentials();
    let mfa_token = nanit_core::MfaToken::new("tok1");

    let err = session
        .complete_login(&creds, &mfa_token, "999999")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Auth(AuthError::AuthenticationFailed { status: 401, .. })
    ));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_complete_login_missing_refresh_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "AT1"
        })))
        .mount(&server)
        .await;

    let mut session = mock_session(&server);
    let creds = credentials();
    let mfa_token = nanit_core::MfaToken::new("tok1");

    let err = session
        .complete_login(&creds, &mfa_token, "000000")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MalformedResponse(_)));
    assert!(!session.is_authenticated());
}

// ============================================================================
// Session Refresh
// ============================================================================

#[tokio::test]
async fn test_refresh_rotates_tokens_and_stream_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tokens/refresh"))
        .and(body_json(json!({"refresh_token": "RT1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "AT2",
            "refresh_token": "RT2"
        })))
        .mount(&server)
        .await;

    let mut session = restored_session(&server, "AT1", "RT1");
    let uid = BabyUid::new("dev1").unwrap();
    let stale = session.stream_url(&uid).unwrap();

    let pair = session.refresh_session().await.unwrap();
    assert_eq!(pair.access().as_str(), "AT2");
    assert_eq!(pair.refresh().as_str(), "RT2");

    // URLs minted before the rotation embed the dead token.
    assert_eq!(stale, "rtmps://media-secured.nanit.com/nanit/dev1.AT1");
    assert_eq!(
        session.stream_url(&uid).unwrap(),
        "rtmps://media-secured.nanit.com/nanit/dev1.AT2"
    );
}

#[tokio::test]
async fn test_second_refresh_uses_rotated_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tokens/refresh"))
        .and(body_json(json!({"refresh_token": "RT1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "AT2",
            "refresh_token": "RT2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/tokens/refresh"))
        .and(body_json(json!({"refresh_token": "RT2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "AT3",
            "refresh_token": "RT3"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = restored_session(&server, "AT1", "RT1");
    session.refresh_session().await.unwrap();
    session.refresh_session().await.unwrap();

    let stored = session.tokens().unwrap();
    assert_eq!(stored.access().as_str(), "AT3");
    assert_eq!(stored.refresh().as_str(), "RT3");
}

#[tokio::test]
async fn test_refresh_expired_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tokens/refresh"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "refresh token expired"
        })))
        .mount(&server)
        .await;

    let mut session = restored_session(&server, "AT1", "RT1");
    let err = session.refresh_session().await.unwrap_err();

    assert!(matches!(
        err,
        Error::Auth(AuthError::RefreshFailed { status: 401, .. })
    ));
}

// ============================================================================
// Authorized Data Requests
// ============================================================================

#[tokio::test]
async fn test_messages_sends_default_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/babies/dev1/messages"))
        .and(header("Authorization", "AT1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "messages": []
        })))
        .mount(&server)
        .await;

    let session = restored_session(&server, "AT1", "RT1");
    let uid = BabyUid::new("dev1").unwrap();
    let messages = session.messages(&uid, None).await.unwrap();

    assert!(messages["messages"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_events_sends_explicit_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/babies/dev1/events"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events": [{"type": "motion"}]
        })))
        .mount(&server)
        .await;

    let session = restored_session(&server, "AT1", "RT1");
    let uid = BabyUid::new("dev1").unwrap();
    let events = session.events(&uid, Some(50)).await.unwrap();

    assert_eq!(events["events"][0]["type"], "motion");
}

#[tokio::test]
async fn test_request_failure_statuses() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/babies"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let session = restored_session(&server, "AT1", "RT1");
    let err = session.babies().await.unwrap_err();

    // Status surfaces as-is; the non-JSON body must not cause a parse error.
    match err {
        Error::Request(failure) => assert_eq!(failure.status, 500),
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_expired_access_token_is_not_retried() {
    let server = MockServer::start().await;

    // The wrapper reports the 401 to the caller instead of refreshing;
    // exactly one request must arrive.
    Mock::given(method("GET"))
        .and(path("/babies"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "token expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = restored_session(&server, "stale-token", "RT1");
    let err = session.babies().await.unwrap_err();

    match err {
        Error::Request(failure) => {
            assert_eq!(failure.status, 401);
            assert!(failure.is_auth_error());
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

// ============================================================================
// Error Body Handling
// ============================================================================

#[tokio::test]
async fn test_non_json_login_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let session = mock_session(&server);
    let err = session.initiate_login(&credentials()).await.unwrap_err();

    let rendered = err.to_string();
    assert!(rendered.contains("500"));
    assert!(rendered.contains("Internal Server Error"));
}

#[tokio::test]
async fn test_empty_login_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let session = mock_session(&server);
    let err = session.initiate_login(&credentials()).await.unwrap_err();

    assert!(err.to_string().contains("503"));
}
