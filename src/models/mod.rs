//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos del dominio: órdenes de
//! mantenimiento, tickets, coordenadas y el resumen de reporte.

pub mod order;
pub mod report;
