use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::HeaderValue,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{self, SecurityConfig};
use crate::handlers::recipes;
use crate::middleware::auth::jwt_auth_middleware;
use crate::store::RecipeStore;

/// Shared application state: a handle to the recipe store. The service holds
/// no mutable state of its own; implementations synchronize internally.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecipeStore>,
}

pub fn app(state: AppState) -> Router {
    let config = config::config();

    let mut router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Protected API
        .merge(recipe_routes())
        // Global middleware
        .layer(cors_layer(&config.security))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .with_state(state);

    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

/// Build the CORS layer from config: disabled means no CORS headers at all,
/// a "*" origin means permissive, otherwise only the listed origins.
fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }

    if security.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/recipes",
            get(recipes::recipe_list).post(recipes::recipe_create),
        )
        .layer(axum::middleware::from_fn(jwt_auth_middleware))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Recipe API (Rust)",
            "version": version,
            "description": "User-scoped recipe API built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "recipes": "/api/recipes (protected - GET list, POST create)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.ping().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "store": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "store unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "store_error": e.to_string()
                }
            })),
        ),
    }
}
