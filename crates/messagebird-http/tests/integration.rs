//! Integration tests for messagebird-http using mockito

use std::time::Duration;

use messagebird_http::{HttpClient, HttpError, HttpRequest, Method, Transport};

fn url(server: &mockito::Server, path: &str) -> url::Url {
    url::Url::parse(&format!("{}{}", server.url(), path)).expect("Valid mock URL")
}

#[tokio::test]
async fn test_send_get_returns_status_and_body() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/balance")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"amount": 10}"#)
        .create_async()
        .await;

    let client = HttpClient::new().expect("Client should build");
    let response = client
        .send(HttpRequest::new(Method::Get, url(&server, "/balance")))
        .await
        .expect("Request should succeed");

    assert_eq!(response.status(), 200);
    assert_eq!(response.header("Content-Type"), Some("application/json"));
    assert_eq!(
        response.text().await.expect("Body should be readable"),
        r#"{"amount": 10}"#
    );

    mock.assert_async().await;
}

#[tokio::test]
async fn test_send_forwards_headers_and_body_verbatim() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/messages")
        .match_header("content-type", "application/json")
        .match_header("authorization", "AccessKey test_key")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "originator": "TestName",
            "body": "Hello"
        })))
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;

    let client = HttpClient::new().expect("Client should build");
    let request = HttpRequest::new(Method::Post, url(&server, "/messages"))
        .with_header("Content-Type", "application/json")
        .with_header("Authorization", "AccessKey test_key")
        .with_body(r#"{"originator":"TestName","body":"Hello"}"#);
    let response = client.send(request).await.expect("Request should succeed");

    assert_eq!(response.status(), 201);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_send_reports_error_statuses_as_responses() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("DELETE", "/messages/abc")
        .with_status(422)
        .with_body(r#"{"errors":[]}"#)
        .create_async()
        .await;

    let client = HttpClient::new().expect("Client should build");
    let response = client
        .send(HttpRequest::new(Method::Delete, url(&server, "/messages/abc")))
        .await
        .expect("A 422 is still a transport success");

    assert!(response.is_client_error());
    assert_eq!(response.status(), 422);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_send_server_error_status() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/")
        .with_status(500)
        .create_async()
        .await;

    let client = HttpClient::new().expect("Client should build");
    let response = client
        .send(HttpRequest::new(Method::Get, url(&server, "/")))
        .await
        .expect("Request should succeed");

    assert!(response.is_server_error());
    assert!(!response.is_success());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_send_connection_refused() {
    let client = HttpClient::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .expect("Client should build");
    let target = url::Url::parse("http://127.0.0.1:1/unreachable").expect("Valid URL");

    let result = client.send(HttpRequest::new(Method::Get, target)).await;

    match result {
        Err(HttpError::Connection(_)) | Err(HttpError::Timeout) => {}
        other => panic!("Expected a connection failure, got {:?}", other),
    }
}
