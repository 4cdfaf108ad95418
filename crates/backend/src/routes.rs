use axum::{
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use tower_http::services::ServeDir;

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes(static_dir: PathBuf) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Raw material transactions
        .route(
            "/api/a001/raw-material-txn/form-policy",
            get(handlers::a001_raw_material_txn::form_policy),
        )
        .route(
            "/api/a001/raw-material-txn/normalize",
            post(handlers::a001_raw_material_txn::normalize),
        )
        .fallback_service(ServeDir::new(static_dir))
}
