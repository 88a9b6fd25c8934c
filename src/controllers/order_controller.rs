use std::sync::Arc;

use crate::dto::order_dto::{
    ApiResponse, CreateOrderRequest, MapLinkResponse, OrderResponse, UpdateOrderRequest,
    UpdateOrderResponse,
};
use crate::models::order::{Coordinates, OrderStatus};
use crate::models::report::ReportSummary;
use crate::repositories::order_repository::{NewOrder, OrderRegistry};
use crate::utils::errors::{
    bad_request_error, field_validation_error, not_found_error, validation_error, AppError,
    AppResult,
};
use crate::utils::validation::{format_phone, format_tax_id, validate_coordinates};

pub struct OrderController {
    registry: Arc<OrderRegistry>,
}

impl OrderController {
    pub fn new(registry: Arc<OrderRegistry>) -> Self {
        Self { registry }
    }

    /// Registrar una orden. Los campos de contacto se validan y normalizan
    /// antes de tocar el registro: un formato inválido rechaza el request
    /// sin consumir identificador.
    pub async fn create(
        &self,
        request: CreateOrderRequest,
    ) -> AppResult<ApiResponse<OrderResponse>> {
        let tax_id = format_tax_id(request.tax_id.as_deref().unwrap_or(""))
            .map_err(|e| field_validation_error("tax_id", e))?;
        let phone = format_phone(request.phone.as_deref().unwrap_or(""))
            .map_err(|e| field_validation_error("phone", e))?;

        let fields = NewOrder {
            name: request.name,
            tax_id: Some(tax_id),
            phone: Some(phone),
            city: request.city,
            neighborhood: request.neighborhood,
            street: request.street,
            number: request.number,
            complement: request.complement,
            problem: request.problem,
        };

        let (id, order) = self.registry.create(fields).await;

        Ok(ApiResponse::success_with_message(
            OrderResponse::from(&order),
            format!("Orden {} registrada exitosamente", id),
        ))
    }

    /// Actualizar status/servicio/líder de una orden existente. El status se
    /// valida contra el enum: un valor desconocido rechaza el request sin
    /// mutar nada.
    pub async fn update(
        &self,
        id: u64,
        request: UpdateOrderRequest,
    ) -> AppResult<ApiResponse<UpdateOrderResponse>> {
        let status = OrderStatus::parse(&request.status).ok_or_else(|| {
            validation_error("status", "Valores permitidos: Pending, InProgress, Completed")
        })?;

        // Coordenadas explícitas: ambas o ninguna, nunca un par parcial
        let coordinates = match (request.latitude, request.longitude) {
            (Some(latitude), Some(longitude)) => {
                validate_coordinates(latitude, longitude)
                    .map_err(|e| field_validation_error("coordinates", e))?;
                Some(Coordinates {
                    latitude,
                    longitude,
                })
            }
            (None, None) => None,
            _ => return Err(bad_request_error("Latitud y longitud deben enviarse juntas")),
        };

        let order = self
            .registry
            .update(id, status, request.service, request.team_lead)
            .await
            .ok_or_else(|| not_found_error("Orden", &id.to_string()))?;

        let (message, map_url) = match coordinates {
            Some(c) => (
                format!(
                    "Orden {} actualizada exitosamente! Ubicación disponible en Google Maps",
                    id
                ),
                Some(maps_url(&c)),
            ),
            None => (format!("Orden {} actualizada exitosamente!", id), None),
        };

        Ok(ApiResponse::success_with_message(
            UpdateOrderResponse {
                order: OrderResponse::from(&order),
                map_url,
            },
            message,
        ))
    }

    pub async fn get(&self, id: u64) -> AppResult<OrderResponse> {
        let order = self
            .registry
            .get(id)
            .await
            .ok_or_else(|| not_found_error("Orden", &id.to_string()))?;
        Ok(OrderResponse::from(&order))
    }

    pub async fn list(&self) -> Vec<OrderResponse> {
        self.registry
            .list()
            .await
            .iter()
            .map(OrderResponse::from)
            .collect()
    }

    pub async fn report(&self) -> ReportSummary {
        self.registry.report().await
    }

    /// Link de Google Maps para las coordenadas almacenadas de una orden
    pub async fn map_link(&self, id: u64) -> AppResult<ApiResponse<MapLinkResponse>> {
        let order = self
            .registry
            .get(id)
            .await
            .ok_or_else(|| not_found_error("Orden", &id.to_string()))?;

        let coordinates = order.address.coordinates.ok_or_else(|| {
            AppError::NotFound(format!("Coordenadas no encontradas para la orden {}", id))
        })?;

        Ok(ApiResponse::success(MapLinkResponse {
            id,
            url: maps_url(&coordinates),
        }))
    }
}

fn maps_url(coordinates: &Coordinates) -> String {
    format!(
        "https://www.google.com/maps?q={},{}",
        coordinates.latitude, coordinates.longitude
    )
}
