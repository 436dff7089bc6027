use sqlx::PgPool;
use tracing::instrument;

use crate::modules::categories::model::{Category, CategoryMap};

pub struct CategoryService;

impl CategoryService {
    /// All categories ordered by their display type.
    #[instrument(skip(db))]
    pub async fn get_all_by_type(db: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY type")
            .fetch_all(db)
            .await
    }

    /// All categories ordered by id, as the questions listing expects.
    #[instrument(skip(db))]
    pub async fn get_all_by_id(db: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(db)
            .await
    }

    #[instrument(skip(db))]
    pub async fn count(db: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(db)
            .await
    }

    /// Collapses a category list into the id → type mapping the frontend
    /// renders from.
    pub fn to_map(categories: &[Category]) -> CategoryMap {
        categories
            .iter()
            .map(|c| (c.id, c.r#type.clone()))
            .collect()
    }
}
