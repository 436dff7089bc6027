use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::draw_quiz_question;

pub fn init_quizzes_router() -> Router<AppState> {
    Router::new().route("/", post(draw_quiz_question))
}
