use reviewmate::{ApiSettings, ChatClient, ChatRequest, DomainError, OpenAiChatClient};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
}

fn settings_for(server: &MockServer) -> ApiSettings {
    ApiSettings::default()
        .with_api_key("sk-test")
        .with_base_url(format!("{}/v1/", server.uri()))
        .with_model("test-model")
}

#[tokio::test]
async fn sends_one_chat_completion_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("hello")))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiChatClient::new();
    let request = ChatRequest::new("be helpful", "review this", 0.2);
    let content = client
        .complete(&settings_for(&server), &request)
        .await
        .expect("completion succeeds");

    assert_eq!(content, "hello");

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);
    let body: Value = serde_json::from_slice(&received[0].body).expect("json body");
    assert_eq!(body["model"], "test-model");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], "be helpful");
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][1]["content"], "review this");
    let temperature = body["temperature"].as_f64().expect("temperature");
    assert!((temperature - 0.2).abs() < 1e-6);
}

#[tokio::test]
async fn missing_key_fails_without_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("x")))
        .expect(0)
        .mount(&server)
        .await;

    let client = OpenAiChatClient::new();
    let settings = settings_for(&server).with_api_key("");
    let err = client
        .complete(&settings, &ChatRequest::new("s", "u", 0.2))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::MissingCredential));
    let received = server.received_requests().await.expect("recording enabled");
    assert!(received.is_empty());
}

#[tokio::test]
async fn non_success_status_is_an_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiChatClient::new();
    let err = client
        .complete(&settings_for(&server), &ChatRequest::new("s", "u", 0.4))
        .await
        .unwrap_err();

    match err {
        DomainError::Upstream {
            status,
            status_text,
            body,
        } => {
            assert_eq!(status, 429);
            assert_eq!(status_text, "Too Many Requests");
            assert_eq!(body, "rate limited");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn response_without_choices_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = OpenAiChatClient::new();
    let err = client
        .complete(&settings_for(&server), &ChatRequest::new("s", "u", 0.2))
        .await
        .unwrap_err();

    assert!(err.is_malformed());
}

#[tokio::test]
async fn null_content_reads_as_empty_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        })))
        .mount(&server)
        .await;

    let client = OpenAiChatClient::new();
    let content = client
        .complete(&settings_for(&server), &ChatRequest::new("s", "u", 0.2))
        .await
        .expect("completion succeeds");

    assert_eq!(content, "");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let settings = ApiSettings::default()
        .with_api_key("sk-test")
        .with_base_url("http://127.0.0.1:1/v1");

    let client = OpenAiChatClient::new();
    let err = client
        .complete(&settings, &ChatRequest::new("s", "u", 0.2))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Transport(_)));
}
