//! POST /generate_answer: forwards a question plus retrieved context to
//! the generation API and returns the answer.

use std::sync::Arc;

use axum::{Json, extract::State};

use answerer::AnswerError;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::generate_answer::generate_answer_request::{
        GenerateAnswerRequest, GenerateAnswerResponse,
    },
};

/// Handler: POST /generate_answer
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/generate_answer \
///   -H 'content-type: application/json' \
///   -d '{"question":"What is the refund policy?","context":"Refunds are issued within 14 days."}'
/// ```
pub async fn generate_answer(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GenerateAnswerRequest>,
) -> AppResult<Json<GenerateAnswerResponse>> {
    let request = body.into_domain();

    let answer = answerer::answer(
        state.client.as_ref(),
        &state.config.system_prompt,
        &request,
    )
    .await
    .map_err(|e| match e {
        AnswerError::Validation(v) => AppError::BadRequest(v.to_string()),
        AnswerError::Generation(g) => {
            tracing::error!(error = %g, "outbound generation call failed");
            AppError::Generation
        }
    })?;

    Ok(Json(answer.into()))
}
