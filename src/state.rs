//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El registro se construye una sola vez al
//! arrancar el proceso y vive lo que vive el proceso.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::order_repository::OrderRegistry;
use crate::services::geocoding_service::Geocoder;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub registry: Arc<OrderRegistry>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            config,
            registry: Arc::new(OrderRegistry::new(geocoder)),
        }
    }
}
