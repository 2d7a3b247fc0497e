use std::sync::Arc;

use recipe_api::config;
use recipe_api::routes::{app, AppState};
use recipe_api::store::{memory::MemoryStore, postgres::PgStore, RecipeStore};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    if let Err(e) = config.validate() {
        panic!("invalid configuration: {}", e);
    }

    tracing_subscriber::fmt::init();
    tracing::info!("Starting Recipe API in {:?} mode", config.environment);

    // RECIPE_STORE=memory runs without a database (local experiments, demos)
    let store: Arc<dyn RecipeStore> = match std::env::var("RECIPE_STORE").as_deref() {
        Ok("memory") => {
            tracing::warn!("Using in-memory recipe store; data will not persist");
            Arc::new(MemoryStore::new())
        }
        _ => Arc::new(
            PgStore::connect()
                .await
                .unwrap_or_else(|e| panic!("failed to connect recipe store: {}", e)),
        ),
    };

    let app = app(AppState { store });

    // Allow tests or deployments to override port via env
    let port = std::env::var("RECIPE_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Recipe API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
