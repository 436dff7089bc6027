use std::sync::LazyLock;

use anyhow::{Context, Result, ensure};
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::instrument;

use crate::modules::questions::model::Question;
use crate::modules::quizzes::model::{QuizRequest, QuizResponse};
use crate::modules::quizzes::service::QuizService;
use crate::state::AppState;

/// Non-standard status the frontend reads as "no more questions".
static DRAW_FAILED_STATUS: LazyLock<StatusCode> =
    LazyLock::new(|| StatusCode::from_u16(209).expect("209 is a valid status code"));

#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "One random eligible question", body = QuizResponse),
        (status = 209, description = "Pool exhausted or draw failed; empty body")
    ),
    tag = "Quizzes"
)]
#[instrument(skip(state, body))]
pub async fn draw_quiz_question(State(state): State<AppState>, body: Bytes) -> Response {
    match try_draw(&state, &body).await {
        Ok(question) => Json(QuizResponse {
            success: true,
            question,
        })
        .into_response(),
        Err(cause) => {
            // The frontend treats 209 with an empty object as "no more
            // questions", so every failed draw answers that way: malformed
            // body, database error, exhausted pool. See DESIGN.md before
            // changing this.
            tracing::warn!(cause = ?cause, "quiz draw failed");
            (*DRAW_FAILED_STATUS, Json(json!({}))).into_response()
        }
    }
}

/// Runs a draw to completion, keeping each failure cause distinct for the
/// logs even though they all collapse to the same response. The body is
/// parsed here, inside the draw, so an unparseable request fails the draw
/// rather than tripping an extractor rejection.
async fn try_draw(state: &AppState, body: &[u8]) -> Result<Question> {
    let request: QuizRequest =
        serde_json::from_slice(body).context("request body is not a valid quiz request")?;
    let previous_questions = request
        .previous_questions
        .context("previous_questions missing from body")?;
    let quiz_category = request
        .quiz_category
        .context("quiz_category missing from body")?;

    let mut candidates =
        QuizService::candidates(&state.db, &previous_questions, quiz_category.id.0).await?;
    ensure!(!candidates.is_empty(), "question pool exhausted");

    let index = state.random.pick_index(candidates.len());
    Ok(candidates.swap_remove(index))
}
