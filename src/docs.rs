use utoipa::OpenApi;

use crate::modules::categories::model::{CategoriesResponse, Category, CategoryQuestionsResponse};
use crate::modules::questions::model::{
    CreateQuestionDto, CreateQuestionResponse, DeleteQuestionResponse, Question,
    QuestionsListResponse, SearchRequest, SearchResponse,
};
use crate::modules::quizzes::model::{QuizCategory, QuizRequest, QuizResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::categories::controller::get_categories,
        crate::modules::categories::controller::get_questions_by_category,
        crate::modules::questions::controller::get_questions,
        crate::modules::questions::controller::delete_question,
        crate::modules::questions::controller::create_question,
        crate::modules::questions::controller::search_questions,
        crate::modules::quizzes::controller::draw_quiz_question,
    ),
    components(
        schemas(
            Category,
            CategoriesResponse,
            CategoryQuestionsResponse,
            Question,
            QuestionsListResponse,
            CreateQuestionDto,
            CreateQuestionResponse,
            DeleteQuestionResponse,
            SearchRequest,
            SearchResponse,
            QuizCategory,
            QuizRequest,
            QuizResponse,
        )
    ),
    tags(
        (name = "Categories", description = "Category listing and per-category questions"),
        (name = "Questions", description = "Question listing, creation, deletion, and search"),
        (name = "Quizzes", description = "Random quiz question selection")
    ),
    info(
        title = "Trivia API",
        description = "CRUD backend for a trivia application",
    )
)]
pub struct ApiDoc;
