use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinela para campos de texto opcionales ausentes
pub const NOT_AVAILABLE: &str = "N/A";

/// Servicio asignado inicial de toda orden recién registrada
pub const NO_SERVICE: &str = "None";

/// Estado del ticket de una orden de mantenimiento
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "InProgress",
            OrderStatus::Completed => "Completed",
        }
    }

    /// Parsear un estado desde texto; `None` si el valor no pertenece al enum
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(OrderStatus::Pending),
            "InProgress" => Some(OrderStatus::InProgress),
            "Completed" => Some(OrderStatus::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Par latitud/longitud en grados decimales. Ausente cuando el geocoding
/// no encontró la dirección; nunca parcialmente poblado.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Dirección de una orden de mantenimiento
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderAddress {
    pub city: String,
    pub neighborhood: String,
    pub street: String,
    pub number: String,
    pub complement: String,
    pub coordinates: Option<Coordinates>,
}

impl OrderAddress {
    /// Dirección compuesta que se envía al servicio de geocoding
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.street, self.number, self.neighborhood, self.city
        )
    }
}

/// Ticket de una orden: problema reportado, estado y asignaciones
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub problem: String,
    pub status: OrderStatus,
    pub assigned_service: String,
    pub team_lead: Option<String>,
}

/// Una orden de mantenimiento registrada
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceOrder {
    pub id: u64,
    pub requester_name: String,
    pub tax_id: String,
    pub phone: String,
    pub address: OrderAddress,
    pub ticket: Ticket,
    pub created_at: DateTime<Utc>,
}
