use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use recipe_api::auth::{generate_jwt, Claims};
use recipe_api::routes::{app, AppState};
use recipe_api::store::memory::MemoryStore;

/// Build an in-process app over a fresh in-memory store. The store handle is
/// returned so tests can seed records directly.
pub fn test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let router = app(AppState {
        store: store.clone(),
    });
    (router, store)
}

/// Mint a bearer header value for the given user id
pub fn bearer_for(user_id: Uuid) -> String {
    let claims = Claims::new(user_id, format!("{}@example.com", user_id.simple()));
    let token = generate_jwt(&claims).expect("token generation");
    format!("Bearer {}", token)
}

/// Drive one request through the router and decode the JSON body
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    auth: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = router.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    // Framework-level rejections (e.g. body too large) are plain text
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    Ok((status, value))
}

pub async fn get(router: &Router, uri: &str, auth: Option<&str>) -> Result<(StatusCode, Value)> {
    send(router, "GET", uri, auth, None).await
}

pub async fn post_json(
    router: &Router,
    uri: &str,
    auth: Option<&str>,
    body: Value,
) -> Result<(StatusCode, Value)> {
    send(router, "POST", uri, auth, Some(body)).await
}
