//! Services module
//!
//! Este módulo contiene integraciones con servicios externos. El geocoding
//! encapsula la búsqueda de coordenadas para las direcciones de las órdenes.

pub mod geocoding_service;

pub use geocoding_service::*;
