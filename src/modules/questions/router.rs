use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{create_question, delete_question, get_questions, search_questions};

pub fn init_questions_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_questions).post(create_question))
        .route("/{id}", delete(delete_question))
        .route("/search", post(search_questions))
}
