//! End-to-end: a watched event flows through question extraction, the real OpenAI-backed client
//! (pointed at a mockito completion endpoint), and the dispatcher's log output.

mod common;

use std::sync::Arc;

use bridge_core::{Event, NoopReplyDelivery};
use chat_bridge::{DispatchOutcome, Dispatcher, QuestionProcessor};
use common::capture_logs;
use llm_client::OpenAILlmClient;
use mockito::Matcher;

fn completion_body(contents: &[&str]) -> String {
    let choices: Vec<serde_json::Value> = contents
        .iter()
        .enumerate()
        .map(|(i, c)| {
            serde_json::json!({
                "index": i,
                "message": { "role": "assistant", "content": c },
                "finish_reason": "stop"
            })
        })
        .collect();
    serde_json::json!({
        "id": "chatcmpl-e2e",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-test",
        "choices": choices
    })
    .to_string()
}

async fn dispatcher_for(server: &mockito::ServerGuard) -> Dispatcher {
    let client = OpenAILlmClient::with_base_url(
        "sk-test-0123456789".to_string(),
        server.url(),
        "gpt-test".to_string(),
    );
    Dispatcher::new(
        QuestionProcessor::new(Arc::new(client)),
        Arc::new(NoopReplyDelivery),
    )
}

/// **Test: `?\u{200c}what is 2+2` is asked as `what is 2+2` and the stubbed `4` is logged.**
#[tokio::test]
async fn zwnj_question_is_answered_from_stubbed_completion() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "model": "gpt-test",
            "messages": [
                { "role": "system", "content": "You are a helpful assistant." },
                { "role": "user", "content": "what is 2+2" }
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(&["4"]))
        .expect(1)
        .create_async()
        .await;
    let dispatcher = dispatcher_for(&server).await;
    let (logs, _guard) = capture_logs();

    let outcome = dispatcher
        .handle_event(&Event::text_message("spaces/AAA", "?\u{200c}what is 2+2"))
        .await;

    mock.assert_async().await;
    assert_eq!(
        outcome,
        DispatchOutcome::Answered {
            question: "what is 2+2".to_string(),
            response: "4".to_string(),
        }
    );
    let out = logs.contents();
    assert!(out.contains("Question: what is 2+2"));
    assert!(out.contains("Response: 4"));
    assert!(out.contains("-----"));
}

/// **Test: A provider response with zero choices fails that event with a typed error and is logged.**
#[tokio::test]
async fn zero_choices_fail_the_event() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(&[]))
        .create_async()
        .await;
    let dispatcher = dispatcher_for(&server).await;
    let (logs, _guard) = capture_logs();

    let outcome = dispatcher
        .handle_event(&Event::text_message("spaces/AAA", "?anyone there"))
        .await;

    match outcome {
        DispatchOutcome::Failed { question, error } => {
            assert_eq!(question, "anyone there");
            assert_eq!(error, "Completion response has no candidates");
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(logs.contents().contains("Error processing question"));
}
