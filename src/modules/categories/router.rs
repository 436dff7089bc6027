use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_categories, get_questions_by_category};

pub fn init_categories_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_categories))
        .route("/{id}/questions", get(get_questions_by_category))
}
