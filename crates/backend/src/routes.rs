use axum::{middleware, routing::get, Router};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::shared::request_logger::request_logger;

/// Конфигурация всех роутов приложения.
///
/// Всё, что не совпало с API, отдаётся из каталога сборки фронтенда;
/// неизвестные пути получают index.html.
pub fn configure_routes(static_dir: &Path) -> Router {
    let index = static_dir.join("index.html");

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/catalog", get(handlers::catalog::list_all))
        .route(
            "/api/catalog/:category",
            get(handlers::catalog::get_by_category),
        )
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
        .layer(middleware::from_fn(request_logger))
}
