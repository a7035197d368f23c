use std::time::Duration;

use dreamscape_llm::CompletionModel;
use dreamscape_llm::error::LlmError;
use dreamscape_llm::openai::{OpenAiClient, parse_completion};

#[test]
fn first_choice_content_is_returned() {
    let body = br#"{
        "id": "chatcmpl-1",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": "**Hello** world"}},
            {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
        ]
    }"#;
    assert_eq!(parse_completion(body).unwrap(), "**Hello** world");
}

#[test]
fn null_content_becomes_empty_string() {
    let body = br#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
    assert_eq!(parse_completion(body).unwrap(), "");
}

#[test]
fn missing_choices_is_a_parse_error() {
    let err = parse_completion(br#"{"choices": []}"#).unwrap_err();
    assert!(matches!(err, LlmError::ResponseParse(_)));

    let err = parse_completion(br#"{"object": "error"}"#).unwrap_err();
    assert!(matches!(err, LlmError::ResponseParse(_)));
}

#[test]
fn malformed_body_is_a_serialization_error() {
    let err = parse_completion(b"not json").unwrap_err();
    assert!(matches!(err, LlmError::Serialization(_)));
}

#[test]
fn empty_api_key_is_rejected() {
    let result = OpenAiClient::new("", "gpt-4o", "https://api.openai.com/v1", Duration::from_secs(5));
    assert!(matches!(result, Err(LlmError::Config(_))));
}

#[test]
fn client_reports_configured_model() {
    let client = OpenAiClient::new(
        "sk-test",
        "gpt-4o-mini",
        "https://gateway.example/v1/",
        Duration::from_secs(5),
    )
    .unwrap();
    assert_eq!(client.model_id(), "gpt-4o-mini");
}

#[tokio::test]
async fn unreachable_endpoint_surfaces_transport_error() {
    let client = OpenAiClient::new(
        "sk-test",
        "gpt-4o",
        "http://127.0.0.1:1/v1",
        Duration::from_secs(5),
    )
    .unwrap();
    let err = client.complete("hello").await.unwrap_err();
    assert!(matches!(err, LlmError::Transport(_)));
}
