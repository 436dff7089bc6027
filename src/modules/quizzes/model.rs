use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::questions::model::Question;
use crate::utils::serde::LenientI32;

/// The "all categories" sentinel sent by the frontend.
pub const ALL_CATEGORIES: i32 = 0;

#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategory {
    #[schema(value_type = i32)]
    pub id: LenientI32,
}

/// Body for `POST /quizzes`. Both fields are optional at the type level
/// so a missing one becomes the endpoint's 209 outcome instead of an
/// extractor rejection.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i32>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Question,
}
