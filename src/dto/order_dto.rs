use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::order::{Coordinates, MaintenanceOrder};

// Request para registrar una orden de mantenimiento
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub name: Option<String>,
    pub tax_id: Option<String>,
    pub phone: Option<String>,
    pub city: String,
    pub neighborhood: String,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub problem: Option<String>,
}

// Request para actualizar el ticket de una orden
#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    pub status: String,
    pub service: String,
    pub team_lead: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

// Response de orden
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: u64,
    pub requester_name: String,
    pub tax_id: String,
    pub phone: String,
    pub address: AddressResponse,
    pub ticket: TicketResponse,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct AddressResponse {
    pub city: String,
    pub neighborhood: String,
    pub street: String,
    pub number: String,
    pub complement: String,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub problem: String,
    pub status: String,
    pub assigned_service: String,
    pub team_lead: Option<String>,
}

impl From<&MaintenanceOrder> for OrderResponse {
    fn from(order: &MaintenanceOrder) -> Self {
        Self {
            id: order.id,
            requester_name: order.requester_name.clone(),
            tax_id: order.tax_id.clone(),
            phone: order.phone.clone(),
            address: AddressResponse {
                city: order.address.city.clone(),
                neighborhood: order.address.neighborhood.clone(),
                street: order.address.street.clone(),
                number: order.address.number.clone(),
                complement: order.address.complement.clone(),
                coordinates: order.address.coordinates,
            },
            ticket: TicketResponse {
                problem: order.ticket.problem.clone(),
                status: order.ticket.status.as_str().to_string(),
                assigned_service: order.ticket.assigned_service.clone(),
                team_lead: order.ticket.team_lead.clone(),
            },
            created_at: order.created_at,
        }
    }
}

// Response de actualización: orden mutada más el link de mapa si se
// enviaron coordenadas
#[derive(Debug, Serialize)]
pub struct UpdateOrderResponse {
    pub order: OrderResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
}

// Response del link de Google Maps de una orden
#[derive(Debug, Serialize)]
pub struct MapLinkResponse {
    pub id: u64,
    pub url: String,
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
