mod common;

use axum::http::StatusCode;
use common::MockCompletions;
use motamot::generation::{
    prompt::HUMOR_STYLES, GenerationError, SentenceClient, GENERATION_FAILED_MESSAGE,
};
use motamot::models::VocabularyEntry;
use motamot::vocabulary::find;

fn words() -> Vec<VocabularyEntry> {
    ["chat", "manger", "rouge", "souvent", "table"]
        .iter()
        .map(|w| *find(w).expect("word in vocabulary"))
        .collect()
}

#[tokio::test]
async fn returns_the_first_choice_without_quotes() {
    let mock = MockCompletions::replying("\"Le chat mange.\"");
    let client = SentenceClient::new(mock.start().await, "llama-3.3-70b-versatile");

    let sentence = client
        .generate(&words(), Some("gsk_test"))
        .await
        .expect("generation should succeed");

    assert_eq!(sentence, "Le chat mange.");
    assert_eq!(mock.hits(), 1);
}

#[tokio::test]
async fn sends_bearer_token_and_chat_body() {
    let mock = MockCompletions::replying("Le chat mange.");
    let client = SentenceClient::new(mock.start().await, "llama-3.3-70b-versatile");

    client
        .generate_with_style(&words(), Some("gsk_test"), HUMOR_STYLES[2])
        .await
        .expect("generation should succeed");

    assert_eq!(
        mock.last_auth.lock().unwrap().as_deref(),
        Some("Bearer gsk_test")
    );

    let body = mock.last_body.lock().unwrap().clone().expect("JSON body");
    assert_eq!(body["model"], "llama-3.3-70b-versatile");
    assert_eq!(body["max_tokens"], 100);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");

    let prompt = body["messages"][1]["content"].as_str().expect("prompt text");
    assert!(prompt.contains("\"chat\" (nom masculin)"));
    assert!(prompt.contains("\"table\" (nom féminin)"));
    assert!(prompt.contains("\"manger\" (verbe - à conjuguer)"));
    assert!(prompt.contains(HUMOR_STYLES[2]));
}

#[tokio::test]
async fn missing_credential_makes_no_request() {
    let mock = MockCompletions::replying("Le chat mange.");
    let client = SentenceClient::new(mock.start().await, "m");

    let err = client.generate(&words(), None).await.unwrap_err();

    assert!(matches!(err, GenerationError::MissingCredential));
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn server_error_maps_to_generic_failure() {
    let mock = MockCompletions::new(StatusCode::INTERNAL_SERVER_ERROR, "boom");
    let client = SentenceClient::new(mock.start().await, "m");

    let err = client.generate(&words(), Some("gsk_test")).await.unwrap_err();

    assert!(matches!(
        err,
        GenerationError::RequestFailed(status) if status == StatusCode::INTERNAL_SERVER_ERROR
    ));
    assert_eq!(err.user_message(), GENERATION_FAILED_MESSAGE);
    assert_eq!(mock.hits(), 1);
}

#[tokio::test]
async fn unauthorized_is_a_request_failure_too() {
    let mock = MockCompletions::new(StatusCode::UNAUTHORIZED, "{\"error\":\"bad key\"}");
    let client = SentenceClient::new(mock.start().await, "m");

    let err = client.generate(&words(), Some("gsk_bad")).await.unwrap_err();

    assert!(matches!(
        err,
        GenerationError::RequestFailed(status) if status == StatusCode::UNAUTHORIZED
    ));
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let mock = MockCompletions::new(StatusCode::OK, "not json");
    let client = SentenceClient::new(mock.start().await, "m");

    let err = client.generate(&words(), Some("gsk_test")).await.unwrap_err();

    assert!(matches!(err, GenerationError::Parse(_)));
    assert!(!err.user_message().is_empty());
}

#[tokio::test]
async fn empty_choices_is_a_parse_error() {
    let mock = MockCompletions::new(StatusCode::OK, "{\"choices\":[]}");
    let client = SentenceClient::new(mock.start().await, "m");

    let err = client.generate(&words(), Some("gsk_test")).await.unwrap_err();

    assert_eq!(err.user_message(), "No content returned from model");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let client = SentenceClient::new(format!("http://{}", addr), "m");

    let err = client.generate(&words(), Some("gsk_test")).await.unwrap_err();

    assert!(matches!(err, GenerationError::Network(_)));
    assert!(!err.user_message().is_empty());
}
