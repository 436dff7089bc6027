use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::modules::categories::model::CategoryMap;
use crate::utils::serde::{LenientI32, deserialize_present};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema, PartialEq, Eq)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Body for `POST /questions`.
///
/// Every field is wrapped twice: the outer `Option` records whether the
/// key appeared in the body at all, the inner one carries an explicit
/// `null`. Validation rejects missing keys; null values pass through and
/// fail at the database instead.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuestionDto {
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub question: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub answer: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<i32>)]
    pub category: Option<Option<LenientI32>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<i32>)]
    pub difficulty: Option<Option<LenientI32>>,
}

impl CreateQuestionDto {
    /// Names of the required keys absent from the body.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.question.is_none() {
            missing.push("question");
        }
        if self.answer.is_none() {
            missing.push("answer");
        }
        if self.difficulty.is_none() {
            missing.push("difficulty");
        }
        if self.category.is_none() {
            missing.push("category");
        }
        missing
    }
}

/// Column values for an insert, after key-presence validation. Inner
/// `None`s reach the database as NULL and are rejected there.
#[derive(Debug)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

impl From<CreateQuestionDto> for NewQuestion {
    fn from(dto: CreateQuestionDto) -> Self {
        Self {
            question: dto.question.flatten(),
            answer: dto.answer.flatten(),
            category: dto.category.flatten().map(|n| n.0),
            difficulty: dto.difficulty.flatten().map(|n| n.0),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionsListResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    /// Always null; kept for frontend compatibility.
    pub current_category: Option<i32>,
}
