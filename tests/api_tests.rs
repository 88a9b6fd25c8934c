use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use maintenance_orders::config::environment::EnvironmentConfig;
use maintenance_orders::models::order::Coordinates;
use maintenance_orders::routes::create_app_router;
use maintenance_orders::services::geocoding_service::Geocoder;
use maintenance_orders::state::AppState;

/// Geocoder de prueba con resultado fijo, reemplaza a Nominatim en los tests
struct StubGeocoder(Option<Coordinates>);

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn resolve(&self, _address: &str) -> Option<Coordinates> {
        self.0
    }
}

fn test_app(coordinates: Option<Coordinates>) -> Router {
    let state = AppState::new(
        EnvironmentConfig::default(),
        Arc::new(StubGeocoder(coordinates)),
    );
    create_app_router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn valid_order_body() -> Value {
    json!({
        "name": "Maria Souza",
        "tax_id": "123 456 789 01",
        "phone": "11 9 2345 6789",
        "city": "Springfield",
        "neighborhood": "Elm",
        "street": "Main St",
        "number": "42",
        "problem": "Fuga de agua"
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app(None);
    let (status, body) = send(&app, Method::GET, "/test", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_order_formats_and_stores() {
    let app = test_app(Some(Coordinates {
        latitude: -23.5614,
        longitude: -46.6559,
    }));

    let (status, body) = send(&app, Method::POST, "/api/order", Some(valid_order_body())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let order = &body["data"];
    assert_eq!(order["id"], 1);
    assert_eq!(order["tax_id"], "123.456.789-01");
    assert_eq!(order["phone"], "(11) 9 2345-6789");
    assert_eq!(order["ticket"]["status"], "Pending");
    assert_eq!(order["ticket"]["assigned_service"], "None");
    assert_eq!(order["ticket"]["team_lead"], Value::Null);
    assert_eq!(order["address"]["complement"], "N/A");
    assert_eq!(order["address"]["coordinates"]["latitude"], -23.5614);
    assert_eq!(order["address"]["coordinates"]["longitude"], -46.6559);
}

#[tokio::test]
async fn test_create_order_survives_geocoder_failure() {
    let app = test_app(None);

    let (status, body) = send(&app, Method::POST, "/api/order", Some(valid_order_body())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["address"]["coordinates"], Value::Null);
}

#[tokio::test]
async fn test_create_order_invalid_tax_id_rejected() {
    let app = test_app(None);

    let mut body = valid_order_body();
    body["tax_id"] = json!("123.456.789-01");
    let (status, response) = send(&app, Method::POST, "/api/order", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "VALIDATION_ERROR");
    assert!(response["details"]["tax_id"].is_array());

    // El registro no consumió ningún identificador
    let (_, orders) = send(&app, Method::GET, "/api/order", None).await;
    assert_eq!(orders.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_order_invalid_phone_rejected() {
    let app = test_app(None);

    let mut body = valid_order_body();
    body["phone"] = json!("11 92345 6789");
    let (status, response) = send(&app, Method::POST, "/api/order", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["details"]["phone"].is_array());
}

#[tokio::test]
async fn test_sequential_creates_get_increasing_ids() {
    let app = test_app(None);

    for expected in 1..=3 {
        let (_, body) = send(&app, Method::POST, "/api/order", Some(valid_order_body())).await;
        assert_eq!(body["data"]["id"], expected);
    }

    let (status, orders) = send(&app, Method::GET, "/api/order", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_update_unknown_order_returns_not_found() {
    let app = test_app(None);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/order/99",
        Some(json!({
            "status": "Completed",
            "service": "Pipe repair",
            "team_lead": "Alice"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_unknown_status_rejected() {
    let app = test_app(None);
    send(&app, Method::POST, "/api/order", Some(valid_order_body())).await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/order/1",
        Some(json!({
            "status": "Done",
            "service": "Pipe repair",
            "team_lead": "Alice"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    // La orden sigue pendiente
    let (_, order) = send(&app, Method::GET, "/api/order/1", None).await;
    assert_eq!(order["ticket"]["status"], "Pending");
}

#[tokio::test]
async fn test_update_partial_coordinates_rejected() {
    let app = test_app(None);
    send(&app, Method::POST, "/api/order", Some(valid_order_body())).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/order/1",
        Some(json!({
            "status": "Completed",
            "service": "Pipe repair",
            "team_lead": "Alice",
            "latitude": -23.5
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_update_with_coordinates_returns_map_url() {
    let app = test_app(None);
    send(&app, Method::POST, "/api/order", Some(valid_order_body())).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/order/1",
        Some(json!({
            "status": "InProgress",
            "service": "Pipe repair",
            "team_lead": "Alice",
            "latitude": -23.5614,
            "longitude": -46.6559
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Google Maps"));
    assert_eq!(
        body["data"]["map_url"],
        "https://www.google.com/maps?q=-23.5614,-46.6559"
    );
    assert_eq!(body["data"]["order"]["ticket"]["status"], "InProgress");
}

#[tokio::test]
async fn test_report_empty_registry() {
    let app = test_app(None);

    let (status, report) = send(&app, Method::GET, "/api/report", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["total"], 0);
    assert_eq!(report["pending"]["count"], 0);
    assert_eq!(report["pending"]["percentage"], 0.0);
    assert_eq!(report["in_progress"]["percentage"], 0.0);
    assert_eq!(report["completed"]["percentage"], 0.0);
}

#[tokio::test]
async fn test_report_after_create_and_update() {
    let app = test_app(None);

    send(&app, Method::POST, "/api/order", Some(valid_order_body())).await;
    send(&app, Method::POST, "/api/order", Some(valid_order_body())).await;

    let (_, report) = send(&app, Method::GET, "/api/report", None).await;
    assert_eq!(report["total"], 2);
    assert_eq!(report["pending"]["count"], 2);
    assert_eq!(report["pending"]["percentage"], 100.0);

    send(
        &app,
        Method::PUT,
        "/api/order/1",
        Some(json!({
            "status": "Completed",
            "service": "Pipe repair",
            "team_lead": "Alice"
        })),
    )
    .await;

    let (_, report) = send(&app, Method::GET, "/api/report", None).await;
    assert_eq!(report["completed"]["count"], 1);
    assert_eq!(report["pending"]["count"], 1);
    assert_eq!(report["orders_by_lead"], json!({ "Alice": 1, "N/A": 1 }));
}

#[tokio::test]
async fn test_map_endpoint() {
    let app = test_app(Some(Coordinates {
        latitude: 10.5,
        longitude: -20.25,
    }));
    send(&app, Method::POST, "/api/order", Some(valid_order_body())).await;

    let (status, body) = send(&app, Method::GET, "/api/order/1/map", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["url"], "https://www.google.com/maps?q=10.5,-20.25");

    // Sin coordenadas almacenadas el link es un 404
    let app = test_app(None);
    send(&app, Method::POST, "/api/order", Some(valid_order_body())).await;
    let (status, _) = send(&app, Method::GET, "/api/order/1/map", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
