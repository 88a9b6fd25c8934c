use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::order_controller::OrderController;
use crate::models::report::ReportSummary;
use crate::state::AppState;

pub fn create_report_router() -> Router<AppState> {
    Router::new().route("/", get(get_report))
}

async fn get_report(State(state): State<AppState>) -> Json<ReportSummary> {
    let controller = OrderController::new(state.registry.clone());
    Json(controller.report().await)
}
