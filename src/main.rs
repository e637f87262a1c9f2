use std::sync::Arc;

use product_catalog::{
    app::products::handler::AppState,
    build_router,
    infrastructure::{
        config::{load_env_file, AppConfig}, database::DatabaseManager, logger::Logger,
        mongo_store::MongoProductStore, shutdown::shutdown_signal,
    },
};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file_error = load_env_file();
    let config = AppConfig::load().unwrap_or_else(|err| err.exit());

    Logger::init(&config.log_level);
    if let Some(err) = env_file_error {
        warn!("Error loading .env file: {}", err);
    }
    info!("Starting product catalog server...");

    let database = DatabaseManager::connect(&config.mongodb_connection_uri, &config.database)
        .await
        .map_err(|e| {
            error!("Failed to connect to MongoDB: {}", e);
            e
        })?;

    let store = MongoProductStore::new(&database, &config.collection);
    let app = build_router(AppState::new(Arc::new(store)));

    let listener = TcpListener::bind(config.socket_addr()).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Product catalog server running on http://{}", addr);
    info!("📊 Available endpoints:");
    info!("   GET    /products              - List products");
    info!("   POST   /products              - Create product");
    info!("   GET    /products/:id          - Get product by ID");
    info!("   PUT    /products/:id          - Update product");
    info!("   DELETE /products/:id          - Delete product");
    info!("   GET    /api-docs/openapi.json - OpenAPI document");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.shutdown().await;
    info!("Server stopped");
    Ok(())
}
