use serde::Serialize;
use std::collections::BTreeMap;

/// Conteo y porcentaje sobre el total para un estado
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusBreakdown {
    pub count: u64,
    pub percentage: f64,
}

/// Resumen agregado de todas las órdenes registradas
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total: u64,
    pub pending: StatusBreakdown,
    pub in_progress: StatusBreakdown,
    pub completed: StatusBreakdown,
    /// Órdenes por líder de equipo; "N/A" agrupa las que nunca fueron asignadas
    pub orders_by_lead: BTreeMap<String, u64>,
}
