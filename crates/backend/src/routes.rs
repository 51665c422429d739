use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Category handlers
        .route(
            "/api/categories",
            get(handlers::a001_category::list).post(handlers::a001_category::create),
        )
        .route(
            "/api/categories/testdata",
            post(handlers::a001_category::insert_test_data),
        )
        .route(
            "/api/categories/:id",
            get(handlers::a001_category::get_by_id)
                .put(handlers::a001_category::update)
                .delete(handlers::a001_category::delete),
        )
}
