//! Unit tests for ApiClient against a mockito server.
//!
//! Covers bearer auth, status-code mapping, PATCH body shape, login and public submit.

use mockito::Matcher;
use ombudsman_core::{MessageStatus, MessageType, MessageUpdate, NewMessage, OmbudsmanError};
use serde_json::json;

use crate::api_client::ApiClient;
use crate::error::ClientError;
use crate::source::MessageSource;
use crate::token::mask_token;

const TOKEN: &str = "test-admin-token-123456";

fn messages_body() -> String {
    json!([
        {
            "id": "m-1",
            "name": "Ana",
            "email": "ana@example.com",
            "type": "suggestion",
            "content": "More benches",
            "status": "received",
            "createdAt": "2025-03-01T12:00:00Z"
        },
        {
            "id": "m-2",
            "type": "report",
            "content": "Broken light",
            "status": "responded",
            "createdAt": "2025-03-02T08:30:00Z",
            "adminResponse": "Fixed"
        }
    ])
    .to_string()
}

#[tokio::test]
async fn test_fetch_all_sends_bearer_and_decodes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/admin/messages")
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(messages_body())
        .create_async()
        .await;

    let client = ApiClient::new(&server.url()).unwrap().with_token(TOKEN);
    let messages = client.fetch_all().await.expect("fetch_all");

    mock.assert_async().await;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].message_type, MessageType::Suggestion);
    assert_eq!(messages[1].display_name(), "Anonymous");
    assert_eq!(messages[1].admin_response.as_deref(), Some("Fixed"));
}

#[tokio::test]
async fn test_admin_call_without_token_is_rejected_locally() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/admin/messages")
        .expect(0)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let result = client.fetch_all().await;

    assert!(matches!(result, Err(ClientError::MissingToken)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_maps_to_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/admin/messages")
        .with_status(401)
        .with_body(r#"{"message":"Unauthorized"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url()).unwrap().with_token("expired");
    assert!(matches!(client.fetch_all().await, Err(ClientError::Unauthorized)));
}

#[tokio::test]
async fn test_fetch_one_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/admin/messages/missing")
        .with_status(404)
        .create_async()
        .await;

    let client = ApiClient::new(&format!("{}/", server.url()))
        .unwrap()
        .with_token(TOKEN);
    match client.fetch_one("missing").await {
        Err(ClientError::NotFound(what)) => assert_eq!(what, "/admin/messages/missing"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_message_id_is_a_single_path_segment() {
    let mut server = mockito::Server::new_async().await;
    let patch = server
        .mock("PATCH", "/admin/messages/2024%2F05%3Fdraft%23x")
        .match_body(Matcher::Json(json!({ "status": "archived" })))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let other = server
        .mock("PATCH", Matcher::Regex("^/admin/messages/2024/".to_string()))
        .expect(0)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url()).unwrap().with_token(TOKEN);
    client
        .update(
            "2024/05?draft#x",
            &MessageUpdate::new().status(MessageStatus::Archived),
        )
        .await
        .expect("update");

    patch.assert_async().await;
    other.assert_async().await;
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/admin/messages/m-1")
        .with_status(404)
        .create_async()
        .await;

    let client = ApiClient::new(&format!("{}/api/v1/", server.url()))
        .unwrap()
        .with_token(TOKEN);
    match client.fetch_one("m-1").await {
        Err(ClientError::NotFound(what)) => assert_eq!(what, "/api/v1/admin/messages/m-1"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    mock.assert_async().await;
}

#[test]
fn test_invalid_base_url_is_rejected() {
    assert!(matches!(
        ApiClient::new("not a url"),
        Err(ClientError::InvalidUrl(_))
    ));
    assert!(matches!(
        ApiClient::new("mailto:desk@example.com"),
        Err(ClientError::InvalidUrl(_))
    ));
}

#[tokio::test]
async fn test_update_sends_patch_with_camel_case_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/admin/messages/m-1")
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .match_body(Matcher::Json(json!({
            "status": "responded",
            "adminResponse": "Thanks for reaching out"
        })))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = ApiClient::new(&server.url()).unwrap().with_token(TOKEN);
    let update = MessageUpdate::new()
        .status(MessageStatus::Responded)
        .admin_response("Thanks for reaching out");
    client.update("m-1", &update).await.expect("update");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_carries_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("PATCH", "/admin/messages/m-1")
        .with_status(500)
        .with_body(r#"{"message":"database unavailable"}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url()).unwrap().with_token(TOKEN);
    let err = client
        .update("m-1", &MessageUpdate::new().status(MessageStatus::Archived))
        .await
        .unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_returns_access_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/login")
        .match_body(Matcher::Json(json!({ "username": "admin", "password": "secret" })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"access_token":"{}"}}"#, TOKEN))
        .create_async()
        .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let token = client.login("admin", "secret").await.expect("login");

    mock.assert_async().await;
    assert_eq!(token, TOKEN);
}

#[tokio::test]
async fn test_login_failure_uses_server_message_or_default() {
    let mut server = mockito::Server::new_async().await;
    let _bad_password = server
        .mock("POST", "/auth/login")
        .match_body(Matcher::PartialJson(json!({ "password": "wrong" })))
        .with_status(401)
        .with_body(r#"{"message":"Wrong username or password"}"#)
        .create_async()
        .await;
    let _no_token = server
        .mock("POST", "/auth/login")
        .match_body(Matcher::PartialJson(json!({ "password": "empty" })))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = ApiClient::new(&server.url()).unwrap();

    match client.login("admin", "wrong").await {
        Err(ClientError::Login(message)) => assert_eq!(message, "Wrong username or password"),
        other => panic!("expected Login error, got {:?}", other),
    }
    match client.login("admin", "empty").await {
        Err(ClientError::Login(message)) => assert_eq!(message, "invalid credentials"),
        other => panic!("expected Login error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_submit_posts_public_form_without_auth() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/messages")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({
            "type": "compliment",
            "content": "Great service"
        })))
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;

    let client = ApiClient::new(&server.url()).unwrap().with_token(TOKEN);
    let payload = NewMessage::new("Great service")
        .with_name(Some(String::new()))
        .with_type(MessageType::Compliment);
    client.submit(&payload).await.expect("submit");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_submit_rejects_blank_content_before_sending() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/messages")
        .expect(0)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let result = client.submit(&NewMessage::new("   ")).await;

    assert!(matches!(
        result,
        Err(ClientError::Core(OmbudsmanError::EmptyContent))
    ));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_submit_validation_error_lists_messages() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/messages")
        .with_status(400)
        .with_body(r#"{"message":["email must be an email"],"statusCode":400}"#)
        .create_async()
        .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let payload = NewMessage::new("hi").with_email(Some("not-an-email".to_string()));

    match client.submit(&payload).await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "email must be an email");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[test]
fn test_mask_token() {
    assert_eq!(mask_token(""), "***");
    assert_eq!(mask_token("short-token"), "***");
    assert_eq!(mask_token("eyJhbGciOiJIUzI1NiJ9.payload"), "eyJhbGc***load");
}
