mod support;

use anyhow::Result;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use support::upstream_mock::{MockOpenAi, MockReply};

async fn post_json(router: Router, body: Value) -> Result<(StatusCode, Value)> {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate_answer")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))?,
        )
        .await?;

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = serde_json::from_slice(&bytes)?;
    Ok((status, value))
}

#[tokio::test]
async fn plain_answer_is_returned_verbatim() -> Result<()> {
    let mock = MockOpenAi::start(MockReply::Content("The answer.".into())).await;
    let router = support::build_test_router(&mock.base_url);

    let (status, body) = post_json(
        router,
        json!({"question": "What is X?", "context": "X is a thing."}),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"answer": "The answer."}));
    assert_eq!(mock.hits(), 1);

    // The forwarded call carries the configured model, temperature, and
    // system prompt, and the context lands verbatim in the user prompt.
    let sent = &mock.requests()[0];
    assert_eq!(sent["model"], "gpt-test");
    assert!((sent["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
    assert_eq!(sent["messages"][0]["role"], "system");
    assert_eq!(sent["messages"][0]["content"], support::TEST_SYSTEM_PROMPT);
    let prompt = sent["messages"][1]["content"].as_str().unwrap();
    assert!(prompt.contains("CONTEXT:"));
    assert!(prompt.contains("X is a thing."));
    assert!(prompt.contains("QUESTION: What is X?"));
    assert!(sent.get("response_format").is_none());
    Ok(())
}

#[tokio::test]
async fn structured_round_trip() -> Result<()> {
    let reply = r#"{"answer": [{"paragraph": "P", "source": {"text": "T", "file": "F"}}]}"#;
    let mock = MockOpenAi::start(MockReply::Content(reply.into())).await;
    let router = support::build_test_router(&mock.base_url);

    let (status, body) = post_json(
        router,
        json!({"question": "What is X?", "context": [{"text": "T", "file": "F"}]}),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"answer": [{"paragraph": "P", "source": {"text": "T", "file": "F"}}]})
    );
    Ok(())
}

#[tokio::test]
async fn bare_list_reply_is_accepted() -> Result<()> {
    let reply = r#"[{"paragraph": "P", "source": {"text": "T", "file": "F"}}]"#;
    let mock = MockOpenAi::start(MockReply::Content(reply.into())).await;
    let router = support::build_test_router(&mock.base_url);

    let (status, body) = post_json(
        router,
        json!({"question": "What is X?", "context": [{"text": "T", "file": "F"}]}),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"answer": [{"paragraph": "P", "source": {"text": "T", "file": "F"}}]})
    );
    Ok(())
}

#[tokio::test]
async fn non_json_model_reply_degrades_to_empty() -> Result<()> {
    let mock = MockOpenAi::start(MockReply::Content("not json".into())).await;
    let router = support::build_test_router(&mock.base_url);

    let (status, body) = post_json(
        router,
        json!({"question": "What is X?", "context": [{"text": "T", "file": "F"}]}),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"answer": []}));
    Ok(())
}

#[tokio::test]
async fn unexpected_shape_degrades_to_empty() -> Result<()> {
    let mock = MockOpenAi::start(MockReply::Content(r#"{"foo": 1}"#.into())).await;
    let router = support::build_test_router(&mock.base_url);

    let (status, body) = post_json(
        router,
        json!({"question": "What is X?", "context": [{"text": "T", "file": "F"}]}),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"answer": []}));
    Ok(())
}

#[tokio::test]
async fn structured_prompt_carries_fragments_in_order() -> Result<()> {
    let mock = MockOpenAi::start(MockReply::Content(r#"{"answer": []}"#.into())).await;
    let router = support::build_test_router(&mock.base_url);

    let (status, _) = post_json(
        router,
        json!({"question": "What is X?", "context": [
            {"text": "alpha", "file": "a.md"},
            {"text": "beta", "file": "b.md"}
        ]}),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let sent = &mock.requests()[0];
    let prompt = sent["messages"][1]["content"].as_str().unwrap();
    let first = prompt.find("FRAGMENT 1 (SOURCE: a.md): alpha").unwrap();
    let second = prompt.find("FRAGMENT 2 (SOURCE: b.md): beta").unwrap();
    assert!(first < second);
    assert_eq!(sent["response_format"]["type"], "json_object");
    Ok(())
}

#[tokio::test]
async fn empty_question_is_rejected_without_upstream_call() -> Result<()> {
    let mock = MockOpenAi::start(MockReply::Content("unused".into())).await;
    let router = support::build_test_router(&mock.base_url);

    let (status, body) = post_json(router, json!({"question": "  ", "context": "c"})).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
    assert!(body["message"].as_str().unwrap().contains("question"));
    assert_eq!(mock.hits(), 0);
    Ok(())
}

#[tokio::test]
async fn missing_question_is_rejected_without_upstream_call() -> Result<()> {
    let mock = MockOpenAi::start(MockReply::Content("unused".into())).await;
    let router = support::build_test_router(&mock.base_url);

    let (status, body) = post_json(router, json!({"context": "c"})).await?;

    assert!(status.is_client_error());
    assert!(body["error"].is_string());
    assert!(body["message"].is_string());
    assert_eq!(mock.hits(), 0);
    Ok(())
}

#[tokio::test]
async fn wrong_context_shape_is_rejected_without_upstream_call() -> Result<()> {
    let mock = MockOpenAi::start(MockReply::Content("unused".into())).await;
    let router = support::build_test_router(&mock.base_url);

    let (status, body) =
        post_json(router, json!({"question": "What is X?", "context": 42})).await?;

    assert!(status.is_client_error());
    assert!(body["error"].is_string());
    assert_eq!(mock.hits(), 0);
    Ok(())
}

#[tokio::test]
async fn upstream_failure_returns_generic_internal_error() -> Result<()> {
    let mock = MockOpenAi::start(MockReply::Failure(StatusCode::INTERNAL_SERVER_ERROR)).await;
    let router = support::build_test_router(&mock.base_url);

    let (status, body) = post_json(
        router,
        json!({"question": "What is X?", "context": "X is a thing."}),
    )
    .await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "GENERATION_FAILED");
    let message = body["message"].as_str().unwrap();
    // The upstream body must never leak to the caller.
    assert!(!message.contains("quota"));
    assert!(!message.contains("exploded"));
    assert_eq!(body, json!({"error": "GENERATION_FAILED", "message": message}));
    Ok(())
}
