//! Registro en memoria de órdenes de mantenimiento
//!
//! Este módulo es el único dueño del estado compartido: un mapa de órdenes
//! por identificador más un contador monotónico. Todas las mutaciones pasan
//! por el write lock, por lo que los ids nunca colisionan entre creates
//! concurrentes. No hay persistencia: el registro vive lo que vive el proceso.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::order::{
    MaintenanceOrder, OrderAddress, OrderStatus, Ticket, NOT_AVAILABLE, NO_SERVICE,
};
use crate::models::report::{ReportSummary, StatusBreakdown};
use crate::services::geocoding_service::Geocoder;

/// Campos crudos de una orden nueva, ya validados pero sin normalizar.
/// Los campos estructurales de la dirección son obligatorios; el resto
/// recibe el sentinela "N/A" cuando está ausente.
#[derive(Debug, Clone, Default)]
pub struct NewOrder {
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

struct RegistryInner {
    next_id: u64,
    orders: BTreeMap<u64, MaintenanceOrder>,
}

pub struct OrderRegistry {
    geocoder: Arc<dyn Geocoder>,
    inner: RwLock<RegistryInner>,
}

fn or_na(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE.to_string(),
    }
}

impl OrderRegistry {
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            geocoder,
            inner: RwLock::new(RegistryInner {
                next_id: 0,
                orders: BTreeMap::new(),
            }),
        }
    }

    /// Registrar una orden nueva. El geocoding se resuelve antes de tomar el
    /// lock, así una búsqueda lenta solo demora su propio request. Una
    /// búsqueda fallida nunca bloquea el registro de la orden.
    pub async fn create(&self, fields: NewOrder) -> (u64, MaintenanceOrder) {
        let mut address = OrderAddress {
            city: fields.city,
            neighborhood: fields.neighborhood,
            street: fields.street,
            number: fields.number,
            complement: or_na(fields.complement),
            coordinates: None,
        };
        address.coordinates = self.geocoder.resolve(&address.full_address()).await;

        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;

        let order = MaintenanceOrder {
            id,
            requester_name: or_na(fields.name),
            tax_id: or_na(fields.tax_id),
            phone: or_na(fields.phone),
            address,
            ticket: Ticket {
                problem: or_na(fields.problem),
                status: OrderStatus::Pending,
                assigned_service: NO_SERVICE.to_string(),
                team_lead: None,
            },
            created_at: Utc::now(),
        };

        inner.orders.insert(id, order.clone());
        log::info!("📝 Orden {} registrada", id);

        (id, order)
    }

    /// Actualizar el ticket de una orden. `None` cuando el id no existe;
    /// en ese caso no se muta nada.
    pub async fn update(
        &self,
        id: u64,
        status: OrderStatus,
        service: String,
        team_lead: String,
    ) -> Option<MaintenanceOrder> {
        let mut inner = self.inner.write().await;
        let order = inner.orders.get_mut(&id)?;

        order.ticket.status = status;
        order.ticket.assigned_service = service;
        order.ticket.team_lead = Some(team_lead);
        log::info!("🔄 Orden {} actualizada a {}", id, status);

        Some(order.clone())
    }

    pub async fn get(&self, id: u64) -> Option<MaintenanceOrder> {
        let inner = self.inner.read().await;
        inner.orders.get(&id).cloned()
    }

    /// Todas las órdenes en orden ascendente de id
    pub async fn list(&self) -> Vec<MaintenanceOrder> {
        let inner = self.inner.read().await;
        inner.orders.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        let inner = self.inner.read().await;
        inner.orders.len()
    }

    /// Resumen agregado: conteos y porcentajes por estado más órdenes por
    /// líder de equipo. Lectura pura, sin mutación.
    pub async fn report(&self) -> ReportSummary {
        let inner = self.inner.read().await;
        let total = inner.orders.len() as u64;

        let mut pending = 0u64;
        let mut in_progress = 0u64;
        let mut completed = 0u64;
        let mut orders_by_lead: BTreeMap<String, u64> = BTreeMap::new();

        for order in inner.orders.values() {
            match order.ticket.status {
                OrderStatus::Pending => pending += 1,
                OrderStatus::InProgress => in_progress += 1,
                OrderStatus::Completed => completed += 1,
            }

            let lead = order
                .ticket
                .team_lead
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());
            *orders_by_lead.entry(lead).or_insert(0) += 1;
        }

        // Con el registro vacío todos los porcentajes quedan en 0
        let percentage = |count: u64| {
            if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            }
        };

        ReportSummary {
            total,
            pending: StatusBreakdown {
                count: pending,
                percentage: percentage(pending),
            },
            in_progress: StatusBreakdown {
                count: in_progress,
                percentage: percentage(in_progress),
            },
            completed: StatusBreakdown {
                count: completed,
                percentage: percentage(completed),
            },
            orders_by_lead,
        }
    }
}
