use sqlx::PgPool;
use tracing::instrument;

use crate::modules::questions::model::{NewQuestion, Question};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

pub struct QuestionService;

impl QuestionService {
    /// All questions ordered by id, the canonical listing order.
    #[instrument(skip(db))]
    pub async fn get_all_by_id(db: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"
        ))
        .fetch_all(db)
        .await
    }

    #[instrument(skip(db))]
    pub async fn count(db: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(db)
            .await
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: i32) -> Result<Option<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: i32) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }

    /// Inserts a question; NULL fields are rejected by the schema.
    #[instrument(skip(db))]
    pub async fn create(db: &PgPool, new: NewQuestion) -> Result<Question, sqlx::Error> {
        sqlx::query_as::<_, Question>(&format!(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES ($1, $2, $3, $4)
             RETURNING {QUESTION_COLUMNS}"
        ))
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(db)
        .await
    }

    /// Case-insensitive substring match on question text. The term is not
    /// wildcard-escaped; `%` and `_` in a search act as wildcards.
    #[instrument(skip(db))]
    pub async fn search(db: &PgPool, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE question ILIKE $1 ORDER BY id"
        ))
        .bind(format!("%{term}%"))
        .fetch_all(db)
        .await
    }

    #[instrument(skip(db))]
    pub async fn get_by_category(
        db: &PgPool,
        category_id: i32,
    ) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id"
        ))
        .bind(category_id)
        .fetch_all(db)
        .await
    }
}
