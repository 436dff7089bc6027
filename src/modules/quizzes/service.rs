use sqlx::PgPool;
use tracing::instrument;

use crate::modules::questions::model::Question;
use crate::modules::quizzes::model::ALL_CATEGORIES;

pub struct QuizService;

impl QuizService {
    /// Questions still eligible for a draw: not among the already-played
    /// ids, and inside the requested category unless it is the
    /// all-categories sentinel.
    #[instrument(skip(db))]
    pub async fn candidates(
        db: &PgPool,
        previous_questions: &[i32],
        category_id: i32,
    ) -> Result<Vec<Question>, sqlx::Error> {
        if category_id == ALL_CATEGORIES {
            sqlx::query_as::<_, Question>(
                "SELECT id, question, answer, category, difficulty
                 FROM questions
                 WHERE NOT (id = ANY($1))
                 ORDER BY id",
            )
            .bind(previous_questions)
            .fetch_all(db)
            .await
        } else {
            sqlx::query_as::<_, Question>(
                "SELECT id, question, answer, category, difficulty
                 FROM questions
                 WHERE NOT (id = ANY($1)) AND category = $2
                 ORDER BY id",
            )
            .bind(previous_questions)
            .bind(category_id)
            .fetch_all(db)
            .await
        }
    }
}
