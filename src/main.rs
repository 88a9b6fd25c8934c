use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use maintenance_orders::config::environment::EnvironmentConfig;
use maintenance_orders::routes::create_app_router;
use maintenance_orders::services::geocoding_service::NominatimService;
use maintenance_orders::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🔧 Maintenance Orders - Registro de órdenes de mantenimiento");
    info!("============================================================");

    let config = EnvironmentConfig::default();

    let geocoder = NominatimService::new(
        config.nominatim_url.clone(),
        config.geocoder_user_agent.clone(),
    )?;

    let app_state = AppState::new(config.clone(), Arc::new(geocoder));
    let app = create_app_router(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("📋 Endpoints - Órdenes:");
    info!("   POST /api/order - Registrar orden de mantenimiento");
    info!("   GET  /api/order - Listar órdenes");
    info!("   GET  /api/order/:id - Obtener orden");
    info!("   PUT  /api/order/:id - Actualizar status/servicio/líder");
    info!("   GET  /api/order/:id/map - Link de Google Maps de la orden");
    info!("📊 Endpoints - Reporte:");
    info!("   GET  /api/report - Reporte agregado de órdenes");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
