use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use dotenvy::dotenv;
use repair_shop::config::database::{init_schema, DatabaseConfig};
use repair_shop::routes;
use repair_shop::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Configure logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🔧 Repair Shop - vehicle service records");
    info!("========================================");

    // Initialize database
    let db_config = DatabaseConfig::default();
    let pool = match db_config.create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error connecting to the database: {}", e);
            return Err(anyhow::anyhow!("Database error: {}", e));
        }
    };
    init_schema(&pool).await?;
    info!("✅ Database ready at {}", db_config.url);

    // Build the application router
    let app_state = AppState::new(pool);
    let app = routes::create_router()
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Server port
    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    info!("🌐 Server starting on http://{}", addr);
    info!("🔍 Available endpoints:");
    info!("   GET  / - Vehicles and repairs in progress");
    info!("   POST /dodaj_automobil - Register a vehicle");
    info!("   POST /dodaj_popravak - Open a repair");
    info!("   GET/POST /zavrsi_popravak/:id - Complete a repair");
    info!("   POST /izbrisi_popravak/:id - Delete a repair");
    info!("   GET/POST /uredi_popravak/:id - Edit a repair");
    info!("   GET  /povijest_popravaka - Completed repair history");
    info!("   POST /obrisi_sve - Purge all records");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Server error: {}", e);
            e
        })?;

    info!("👋 Server stopped");
    Ok(())
}

/// Graceful shutdown signal
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
            info!("🛑 Ctrl+C received, shutting down server...");
        },
        _ = terminate => {
            info!("🛑 Termination signal received, shutting down server...");
        },
    }
}
