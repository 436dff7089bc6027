use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;

use crate::modules::categories::service::CategoryService;
use crate::modules::questions::model::{
    CreateQuestionDto, CreateQuestionResponse, DeleteQuestionResponse, NewQuestion,
    QuestionsListResponse, SearchRequest, SearchResponse,
};
use crate::modules::questions::service::QuestionService;
use crate::state::AppState;
use crate::utils::errors::ApiError;
use crate::utils::pagination::{PageQuery, paginate};

#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "Paginated questions with the category map", body = QuestionsListResponse),
        (status = 404, description = "No categories exist or the page is empty")
    ),
    tag = "Questions"
)]
#[instrument(skip(state))]
pub async fn get_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionsListResponse>, ApiError> {
    let categories = CategoryService::get_all_by_id(&state.db).await?;
    let questions = QuestionService::get_all_by_id(&state.db).await?;

    let category_map = CategoryService::to_map(&categories);
    if category_map.is_empty() {
        return Err(ApiError::not_found(anyhow!("no categories exist")));
    }

    let page = query.page();
    let current_questions = paginate(&questions, page);
    // An out-of-range page is indistinguishable from an empty store here;
    // both are 404 by contract.
    if current_questions.is_empty() {
        return Err(ApiError::not_found(anyhow!("page {page} has no questions")));
    }

    let total_questions = QuestionService::count(&state.db).await?;

    Ok(Json(QuestionsListResponse {
        success: true,
        categories: category_map,
        questions: current_questions.to_vec(),
        total_questions,
    }))
}

#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted; first page of the remainder returned", body = DeleteQuestionResponse),
        (status = 422, description = "Unknown id or persistence failure")
    ),
    tag = "Questions"
)]
#[instrument(skip(state))]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<i32>,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    // Every failure on this path, a missing id included, surfaces as 422.
    let question = QuestionService::get_by_id(&state.db, question_id)
        .await
        .map_err(ApiError::unprocessable)?
        .ok_or_else(|| ApiError::unprocessable(anyhow!("question {question_id} not found")))?;

    QuestionService::delete(&state.db, question.id)
        .await
        .map_err(ApiError::unprocessable)?;

    let questions = QuestionService::get_all_by_id(&state.db)
        .await
        .map_err(ApiError::unprocessable)?;
    // Always the default page, whatever the request carried. The frontend
    // relies on getting the first page back after a delete.
    let current_questions = paginate(&questions, PageQuery::default().page());

    let total_questions = QuestionService::count(&state.db)
        .await
        .map_err(ApiError::unprocessable)?;

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: question_id,
        questions: current_questions.to_vec(),
        total_questions,
    }))
}

#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponse),
        (status = 422, description = "Missing required key or persistence failure")
    ),
    tag = "Questions"
)]
#[instrument(skip(state))]
pub async fn create_question(
    State(state): State<AppState>,
    Json(dto): Json<CreateQuestionDto>,
) -> Result<Json<CreateQuestionResponse>, ApiError> {
    let missing = dto.missing_keys();
    if !missing.is_empty() {
        return Err(ApiError::unprocessable(anyhow!(
            "missing required keys: {}",
            missing.join(", ")
        )));
    }

    let question = QuestionService::create(&state.db, NewQuestion::from(dto))
        .await
        .map_err(ApiError::unprocessable)?;

    Ok(Json(CreateQuestionResponse {
        success: true,
        created: question.id,
        question: question.question,
        answer: question.answer,
        difficulty: question.difficulty,
        category: question.category,
    }))
}

#[utoipa::path(
    post,
    path = "/questions/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching questions", body = SearchResponse),
        (status = 404, description = "searchTerm absent or empty")
    ),
    tag = "Questions"
)]
#[instrument(skip(state))]
pub async fn search_questions(
    State(state): State<AppState>,
    Json(body): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let term = body
        .search_term
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::not_found(anyhow!("searchTerm absent or empty")))?;

    let questions = QuestionService::search(&state.db, &term).await?;
    let total_questions = questions.len() as i64;

    Ok(Json(SearchResponse {
        success: true,
        questions,
        total_questions,
        current_category: None,
    }))
}
