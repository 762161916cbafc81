use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scene_machine::core::gateway::{ChatMessage, ChatTransport, HttpChatTransport};
use scene_machine::transport::relay::{AnthropicUpstream, RelayState, build_app, run_relay};
use scene_machine::{Config, GatewayError};

/// Serve the relay on a random loopback port in front of `upstream_url`.
async fn start_relay(upstream_url: &str, api_key: Option<&str>) -> String {
    let upstream = AnthropicUpstream::new(
        api_key,
        upstream_url,
        "claude-sonnet-4-20250514",
        Duration::from_secs(5),
    );
    let app = build_app(RelayState::new(Arc::new(upstream)), &[]);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn chat_is_forwarded_with_model_and_headers() {
    let upstream = MockServer::start().await;
    let reply = json!({
        "id": "msg_01",
        "type": "message",
        "content": [{"type": "text", "text": "{\"vividText\": \"Rain hammered the roof.\", \"highlights\": []}"}]
    });
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "sk-ant-test"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_json(json!({
            "model": "claude-sonnet-4-20250514",
            "max_tokens": 2000,
            "messages": [{"role": "user", "content": "Make it vivid."}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply))
        .expect(1)
        .mount(&upstream)
        .await;

    let relay = start_relay(&upstream.uri(), Some("sk-ant-test")).await;
    let transport = HttpChatTransport::new(&format!("{relay}/api/chat"), 10);
    let text = transport
        .complete(vec![ChatMessage::user("Make it vivid.")], 2000)
        .await
        .unwrap();

    assert!(text.contains("Rain hammered the roof."));
    upstream.verify().await;
}

#[tokio::test]
async fn upstream_failure_becomes_502_without_secrets() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string("invalid x-api-key: sk-ant-leaked-secret-value"),
        )
        .mount(&upstream)
        .await;

    let relay = start_relay(&upstream.uri(), Some("sk-ant-test")).await;
    let response = reqwest::Client::new()
        .post(format!("{relay}/api/chat"))
        .json(&json!({"messages": [{"role": "user", "content": "hi"}], "max_tokens": 10}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 502);
    let body: serde_json::Value = response.json().await.unwrap();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("401"));
    assert!(!message.contains("leaked-secret-value"));
}

#[tokio::test]
async fn missing_key_is_500_and_reaches_the_learner() {
    let upstream = MockServer::start().await;
    let relay = start_relay(&upstream.uri(), None).await;

    let transport = HttpChatTransport::new(&format!("{relay}/api/chat"), 10);
    let err = transport
        .complete(vec![ChatMessage::user("hi")], 10)
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Transport { status: Some(500), .. }));
    assert_eq!(err.user_message(), "The server has no API key configured.");
    assert!(upstream.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn invalid_requests_are_400() {
    let upstream = MockServer::start().await;
    let relay = start_relay(&upstream.uri(), Some("sk-ant-test")).await;
    let client = reqwest::Client::new();

    for body in [
        json!({"messages": [], "max_tokens": 10}),
        json!({"messages": [{"role": "user", "content": "hi"}], "max_tokens": 0}),
        json!({"messages": [{"role": "user", "content": "hi"}], "max_tokens": 5000}),
        json!({"messages": [{"role": "robot", "content": "hi"}], "max_tokens": 10}),
        json!({"prompt": "hi"}),
    ] {
        let response = client
            .post(format!("{relay}/api/chat"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 400, "{body}");
        let json: serde_json::Value = response.json().await.unwrap();
        assert!(json["error"].is_string());
    }
    assert!(upstream.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let upstream = MockServer::start().await;
    let relay = start_relay(&upstream.uri(), Some("sk-ant-test")).await;

    let huge = "a".repeat(70_000);
    let response = reqwest::Client::new()
        .post(format!("{relay}/api/chat"))
        .json(&json!({"messages": [{"role": "user", "content": huge}], "max_tokens": 10}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 413);
}

#[tokio::test]
async fn health_is_ok() {
    let upstream = MockServer::start().await;
    let relay = start_relay(&upstream.uri(), None).await;

    let body: serde_json::Value = reqwest::get(format!("{relay}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

#[test]
fn public_bind_is_refused_by_default() {
    let config = Arc::new(Config::default());
    let err = tokio_test::block_on(run_relay("0.0.0.0", 0, config)).unwrap_err();
    assert!(err.to_string().contains("refusing to bind to 0.0.0.0"));
}
