use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scene_machine::GatewayError;
use scene_machine::core::gateway::{
    ChatMessage, ChatTransport, GatewayOptions, HttpChatTransport, PromptGateway, WritingGateway,
};
use scene_machine::core::writing::OverallRating;

fn envelope(text: &str) -> serde_json::Value {
    json!({"content": [{"type": "text", "text": text}]})
}

fn endpoint(server: &MockServer) -> String {
    format!("{}/api/chat", server.uri())
}

#[tokio::test]
async fn transport_posts_messages_and_budget() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({
            "messages": [{"role": "user", "content": "hello"}],
            "max_tokens": 2000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope("hi back")))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpChatTransport::new(&endpoint(&server), 30);
    let text = transport
        .complete(vec![ChatMessage::user("hello")], 2000)
        .await
        .unwrap();

    assert_eq!(text, "hi back");
    server.verify().await;
}

#[tokio::test]
async fn non_2xx_carries_server_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "The writing coach is asleep."})),
        )
        .mount(&server)
        .await;

    let transport = HttpChatTransport::new(&endpoint(&server), 30);
    let err = transport
        .complete(vec![ChatMessage::user("x")], 10)
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Transport { status: Some(500), .. }));
    assert_eq!(err.user_message(), "The writing coach is asleep.");
}

#[tokio::test]
async fn non_2xx_without_error_field_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let transport = HttpChatTransport::new(&endpoint(&server), 30);
    let err = transport
        .complete(vec![ChatMessage::user("x")], 10)
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Something went wrong. Please try again.");
}

#[tokio::test]
async fn success_without_content_text_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "msg_1"})))
        .mount(&server)
        .await;

    let transport = HttpChatTransport::new(&endpoint(&server), 30);
    let err = transport
        .complete(vec![ChatMessage::user("x")], 10)
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::MalformedResponse(_)));
}

#[tokio::test]
async fn fenced_example_reply_is_extracted_end_to_end() {
    let server = MockServer::start().await;
    let reply = "Sure! Here it is:\n```json\n{\"vividText\": \"The cat ran fast into the dark room.\", \"highlights\": [{\"text\": \"dark room\", \"type\": \"setting\"}, {\"text\": \"ran fast\", \"type\": \"action\"}]}\n```";
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"max_tokens": 2000})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(reply)))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = PromptGateway::new(HttpChatTransport::new(&endpoint(&server), 30));
    let example = gateway
        .request_vivid_example("The cat went in the room.")
        .await
        .unwrap();

    assert_eq!(example.vivid_text, "The cat ran fast into the dark room.");
    assert_eq!(example.highlights.len(), 2);
    server.verify().await;
}

#[tokio::test]
async fn feedback_defaults_missing_detail_lists() {
    let server = MockServer::start().await;
    let reply = r#"{"similarityScore": 12, "vividnessScore": 74, "overallRating": "good", "isTooSimilar": false, "praise": "Nice verbs!"}"#;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"max_tokens": 1500})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(reply)))
        .mount(&server)
        .await;

    let gateway = PromptGateway::new(HttpChatTransport::new(&endpoint(&server), 30));
    let feedback = gateway
        .request_feedback("draft", "example", "my rewrite")
        .await
        .unwrap();

    assert_eq!(feedback.overall_rating, OverallRating::Good);
    assert_eq!(feedback.vividness_score, 74);
    assert!(feedback.sensory_details.is_empty());
    assert!(feedback.action_details.is_empty());
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope("{}"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let gateway = PromptGateway::with_options(
        HttpChatTransport::new(&endpoint(&server), 30),
        GatewayOptions {
            timeout: Duration::from_millis(200),
            ..GatewayOptions::default()
        },
    );
    let err = gateway.request_vivid_example("draft").await.unwrap_err();

    assert!(err.is_timeout());
    assert_eq!(
        err.user_message(),
        "The AI is taking too long to respond. Please try again."
    );
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_error() {
    let transport = HttpChatTransport::new("http://127.0.0.1:9/api/chat", 5);
    let err = transport
        .complete(vec![ChatMessage::user("x")], 10)
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Transport { status: None, .. }));
}
