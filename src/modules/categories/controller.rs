use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use crate::modules::categories::model::{CategoriesResponse, CategoryQuestionsResponse};
use crate::modules::categories::service::CategoryService;
use crate::modules::questions::service::QuestionService;
use crate::state::AppState;
use crate::utils::errors::ApiError;

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Mapping of category ids to types", body = CategoriesResponse),
        (status = 404, description = "No categories exist")
    ),
    tag = "Categories"
)]
#[instrument(skip(state))]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = CategoryService::get_all_by_type(&state.db).await?;

    if categories.is_empty() {
        return Err(ApiError::not_found(anyhow!("no categories exist")));
    }

    let total_categories = CategoryService::count(&state.db).await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: CategoryService::to_map(&categories),
        total_categories,
    }))
}

#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Questions in the category (possibly empty)", body = CategoryQuestionsResponse),
        (status = 404, description = "Query failure")
    ),
    tag = "Categories"
)]
#[instrument(skip(state))]
pub async fn get_questions_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    // No existence check on the category itself: an unknown id yields an
    // empty list with success, not an error.
    let questions = QuestionService::get_by_category(&state.db, category_id)
        .await
        .map_err(ApiError::not_found)?;

    let total_questions = questions.len() as i64;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions,
        current_category: category_id,
    }))
}
