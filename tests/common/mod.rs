use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use trivia_api::config::cors::CorsConfig;
use trivia_api::router::init_router;
use trivia_api::state::AppState;
use trivia_api::utils::random::{RandomSource, ThreadRngSource};

/// Deterministic randomness for quiz tests: always picks the given index
/// (clamped to the candidate range).
#[allow(dead_code)]
pub struct FixedIndexSource(pub usize);

impl RandomSource for FixedIndexSource {
    fn pick_index(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

pub fn setup_test_app(pool: PgPool) -> Router {
    setup_test_app_with_random(pool, Arc::new(ThreadRngSource))
}

#[allow(dead_code)]
pub fn setup_test_app_with_random(pool: PgPool, random: Arc<dyn RandomSource>) -> Router {
    init_router(AppState {
        db: pool,
        cors_config: CorsConfig::default(),
        random,
    })
}

pub async fn create_test_category(pool: &PgPool, kind: &str) -> i32 {
    sqlx::query_scalar::<_, i32>("INSERT INTO categories (type) VALUES ($1) RETURNING id")
        .bind(kind)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_question(
    pool: &PgPool,
    question: &str,
    answer: &str,
    category: i32,
    difficulty: i32,
) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO questions (question, answer, category, difficulty)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(question)
    .bind(answer)
    .bind(category)
    .bind(difficulty)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn count_questions(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

#[allow(dead_code)]
pub async fn delete(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

#[allow(dead_code)]
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Asserts the fixed error body contract for a given status code.
#[allow(dead_code)]
pub fn assert_error_body(body: &serde_json::Value, code: u16, message: &str) {
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], code);
    assert_eq!(body["message"], message);
}
