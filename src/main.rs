use formula_api::api;
use formula_api::config::AppConfig;
use formula_api::infrastructure::database;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("formula_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = database::connect(&config.database_url, config.max_connections)
        .await
        .expect("Failed to connect to database");
    database::ensure_schema(&pool)
        .await
        .expect("Failed to create database schema");

    tracing::info!("Database connected successfully");

    let app = api::router(pool);

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
