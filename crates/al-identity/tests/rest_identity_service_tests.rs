//! Integration tests for the REST identity client using a wiremock server

use al_core::Credential;
use al_identity::{IdentityError, IdentityService, RestIdentityService};

use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

fn service(server: &MockServer) -> RestIdentityService {
    RestIdentityService::new(&server.uri(), "test-key", Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_sign_up_success_returns_identity_with_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts:signUp"))
        .and(query_param("key", "test-key"))
        .and(body_json(json!({
            "email": "ann@example.com",
            "password": "secret1",
            "returnSecureToken": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "identitytoolkit#SignupNewUserResponse",
            "localId": "uid-123",
            "email": "ann@example.com",
            "idToken": "token-abc",
            "refreshToken": "refresh",
            "expiresIn": "3600"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service(&mock_server);
    let identity = service
        .create_credential(&Credential::new("ann@example.com", "secret1"))
        .await
        .unwrap();

    assert_eq!(identity.uid.as_str(), "uid-123");
    assert_eq!(identity.email, "ann@example.com");
    assert_eq!(identity.session.as_ref().map(|t| t.expose()), Some("token-abc"));
    assert_eq!(service.current_identity(), Some(identity));
}

#[tokio::test]
async fn test_sign_up_email_exists_passes_message_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts:signUp"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "EMAIL_EXISTS",
                "errors": [{ "message": "EMAIL_EXISTS", "domain": "global", "reason": "invalid" }]
            }
        })))
        .mount(&mock_server)
        .await;

    let service = service(&mock_server);
    let result = service
        .create_credential(&Credential::new("ann@example.com", "secret1"))
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, IdentityError::Rejected { .. }));
    assert_eq!(err.message(), "EMAIL_EXISTS");
    assert!(service.current_identity().is_none());
}

#[tokio::test]
async fn test_sign_in_success_sets_current_identity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts:signInWithPassword"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "uid-123",
            "email": "ann@example.com",
            "idToken": "token-xyz",
            "registered": true
        })))
        .mount(&mock_server)
        .await;

    let service = service(&mock_server);
    let identity = service
        .verify_credential(&Credential::new("ann@example.com", "secret1"))
        .await
        .unwrap();

    assert_eq!(identity.uid.as_str(), "uid-123");
    assert_eq!(service.current_identity(), Some(identity));

    service.sign_out();
    assert!(service.current_identity().is_none());
}

#[tokio::test]
async fn test_sign_in_wrong_password_passes_message_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "INVALID_LOGIN_CREDENTIALS" }
        })))
        .mount(&mock_server)
        .await;

    let result = service(&mock_server)
        .verify_credential(&Credential::new("ann@example.com", "wrong12"))
        .await;

    assert_eq!(result.unwrap_err().message(), "INVALID_LOGIN_CREDENTIALS");
}

#[tokio::test]
async fn test_non_json_error_body_reports_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&mock_server)
        .await;

    let result = service(&mock_server)
        .verify_credential(&Credential::new("ann@example.com", "secret1"))
        .await;

    let err = result.unwrap_err();
    assert!(err.message().contains("503"));
    assert!(err.message().contains("upstream unavailable"));
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts:signUp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "email": "ann@example.com" })))
        .mount(&mock_server)
        .await;

    let result = service(&mock_server)
        .create_credential(&Credential::new("ann@example.com", "secret1"))
        .await;

    assert!(matches!(result, Err(IdentityError::Decode { .. })));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let service = RestIdentityService::new(&uri, "test-key", Duration::from_secs(2)).unwrap();
    let result = service
        .verify_credential(&Credential::new("ann@example.com", "secret1"))
        .await;

    assert!(matches!(result, Err(IdentityError::Transport { .. })));
}

#[tokio::test]
async fn test_transport_error_does_not_expose_api_key() {
    let service = RestIdentityService::new(
        "http://127.0.0.1:1/v1",
        "SECRET-API-KEY",
        Duration::from_secs(2),
    )
    .unwrap();

    let err = service
        .verify_credential(&Credential::new("ann@example.com", "secret1"))
        .await
        .unwrap_err();

    assert!(matches!(err, IdentityError::Transport { .. }));
    assert!(!err.message().contains("SECRET-API-KEY"));
    assert!(!err.to_string().contains("SECRET-API-KEY"));
    assert!(!format!("{err:?}").contains("SECRET-API-KEY"));
    let source = std::error::Error::source(&err).unwrap();
    assert!(!source.to_string().contains("SECRET-API-KEY"));
}
