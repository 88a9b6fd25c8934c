use crate::models::order::Coordinates;
use async_trait::async_trait;
use serde::Deserialize;

/// Adaptador de geocoding: resuelve una dirección de texto libre a un par
/// de coordenadas. El resultado es advisory: `None` significa "ubicación
/// desconocida" y nunca se propaga un error al caller.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, address: &str) -> Option<Coordinates>;
}

/// Resultado de búsqueda de Nominatim (lat/lon llegan como strings)
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Cliente del servicio público de Nominatim (OpenStreetMap)
pub struct NominatimService {
    base_url: String,
    user_agent: String,
    client: reqwest::Client,
}

impl NominatimService {
    pub fn new(base_url: String, user_agent: String) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;

        Ok(Self {
            base_url,
            user_agent,
            client,
        })
    }
}

#[async_trait]
impl Geocoder for NominatimService {
    async fn resolve(&self, address: &str) -> Option<Coordinates> {
        log::info!("🗺️ Geocodificando dirección: {}", address);

        let url = format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url,
            urlencoding::encode(address)
        );

        let response = match self
            .client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                log::warn!("⚠️ Error consultando el servicio de geocoding: {}", e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            log::warn!("⚠️ Geocoding respondió con status {}", status);
            return None;
        }

        let places: Vec<NominatimPlace> = match response.json().await {
            Ok(places) => places,
            Err(e) => {
                log::warn!("⚠️ Respuesta de geocoding inválida: {}", e);
                return None;
            }
        };

        let place = match places.first() {
            Some(place) => place,
            None => {
                log::warn!("⚠️ Sin resultados para la dirección: {}", address);
                return None;
            }
        };

        match (place.lat.parse::<f64>(), place.lon.parse::<f64>()) {
            (Ok(latitude), Ok(longitude)) => {
                log::info!(
                    "✅ Dirección resuelta: {} -> ({}, {})",
                    address,
                    latitude,
                    longitude
                );
                Some(Coordinates {
                    latitude,
                    longitude,
                })
            }
            _ => {
                log::warn!("⚠️ Coordenadas no numéricas en la respuesta de geocoding");
                None
            }
        }
    }
}
