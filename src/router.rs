use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::{Router, middleware};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::categories::router::init_categories_router;
use crate::modules::questions::router::init_questions_router;
use crate::modules::quizzes::router::init_quizzes_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest("/categories", init_categories_router())
        .nest("/questions", init_questions_router())
        .nest("/quizzes", init_quizzes_router())
        .with_state(state.clone())
        .layer({
            // The `true` entry is part of the header list the frontend was
            // shipped against; it is a valid (if odd) header name.
            let allowed_headers = [
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                HeaderName::from_static("true"),
            ];
            let allowed_methods = [
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ];

            if state.cors_config.allow_any() {
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(allowed_methods)
                    .allow_headers(allowed_headers)
            } else {
                let allowed_origins: Vec<HeaderValue> = state
                    .cors_config
                    .allowed_origins
                    .iter()
                    .filter_map(|origin| origin.parse().ok())
                    .collect();

                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods(allowed_methods)
                    .allow_headers(allowed_headers)
            }
        })
        .layer(middleware::from_fn(logging_middleware))
}
