use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::order_controller::OrderController;
use crate::dto::order_dto::{
    ApiResponse, CreateOrderRequest, MapLinkResponse, OrderResponse, UpdateOrderRequest,
    UpdateOrderResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_order_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order).get(list_orders))
        .route("/:id", get(get_order).put(update_order))
        .route("/:id/map", get(open_map))
}

async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<ApiResponse<OrderResponse>>, AppError> {
    let controller = OrderController::new(state.registry.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_orders(State(state): State<AppState>) -> Json<Vec<OrderResponse>> {
    let controller = OrderController::new(state.registry.clone());
    Json(controller.list().await)
}

async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<OrderResponse>, AppError> {
    let controller = OrderController::new(state.registry.clone());
    let response = controller.get(id).await?;
    Ok(Json(response))
}

async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateOrderRequest>,
) -> Result<Json<ApiResponse<UpdateOrderResponse>>, AppError> {
    let controller = OrderController::new(state.registry.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn open_map(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<MapLinkResponse>>, AppError> {
    let controller = OrderController::new(state.registry.clone());
    let response = controller.map_link(id).await?;
    Ok(Json(response))
}
