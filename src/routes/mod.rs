//! Rutas de la API

pub mod order_routes;
pub mod report_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Construir el router completo de la aplicación
pub fn create_app_router(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/order", order_routes::create_order_router())
        .nest("/api/report", report_routes::create_report_router())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "API de órdenes de mantenimiento funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
