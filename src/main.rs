use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use vehicle_registry::config::{DatabaseConfig, EnvironmentConfig};
use vehicle_registry::create_app;
use vehicle_registry::database;
use vehicle_registry::repositories::{InMemoryVehicleRepository, PgVehicleRepository, VehicleRepository};
use vehicle_registry::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();

    info!("🚗 Vehicle Registry - API de vehículos");
    info!("Entorno: {}", config.environment);

    let repository: Arc<dyn VehicleRepository> = match DatabaseConfig::from_env()? {
        Some(db_config) => match database::connect(&db_config).await {
            Ok(pool) => Arc::new(PgVehicleRepository::new(pool)),
            Err(e) => {
                error!("❌ Error conectando a la base de datos: {}", e);
                return Err(anyhow::anyhow!("Error de base de datos: {}", e));
            }
        },
        None => {
            warn!("⚠️ DATABASE_URL no definida, usando almacenamiento en memoria");
            Arc::new(InMemoryVehicleRepository::new())
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app(AppState::new(config, repository));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Estado del servicio");
    info!("   POST   /api/vehicle - Registrar vehículo");
    info!("   PUT    /api/vehicle - Actualizar vehículo");
    info!("   GET    /api/vehicle - Listar vehículos");
    info!("   DELETE /api/vehicle/:plate - Eliminar vehículo por placa");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
