//! API Handlers
//!
//! HTTP request handlers for each drafting server endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{extract::State, Json};
use tracing::info;

use crate::cache::RequestCache;
use crate::error::{DraftError, Result};
use crate::generator::resolve;
use crate::models::{
    ClearResponse, GenerateRequest, GenerateResponse, HealthResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// Contains the request cache wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe request cache
    pub cache: Arc<RwLock<RequestCache>>,
}

impl AppState {
    /// Creates a new AppState with the given request cache.
    pub fn new(cache: RequestCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Wires the cache to a file snapshot store at the configured path and
    /// restores any persisted snapshot.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let snapshot = crate::cache::FileSnapshotStore::new(config.snapshot_path.clone());
        let mut cache = RequestCache::new(config.cache_capacity, Box::new(snapshot));
        cache.restore();
        Self::new(cache)
    }
}

/// Handler for POST /generate
///
/// Generates an email body for the request, answering from the cache when an
/// entry with an identical key exists. On a miss the template resolver runs
/// and the result is recorded before returning.
pub async fn generate_handler(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    // Validate before touching the cache or resolver
    if let Some(error_msg) = req.validate() {
        return Err(DraftError::InvalidRequest(error_msg));
    }

    // Acquire write lock (needed for stats update on both hit and miss)
    let mut cache = state.cache.write().await;

    if let Some(result) = cache.lookup(&req) {
        info!(tone = %req.tone, length = %req.length, "Serving cached result");
        return Ok(Json(GenerateResponse::new(result)));
    }

    let email = resolve(&req.tone, &req.length, &req.context);
    cache.record(&req, email.clone());
    info!(tone = %req.tone, length = %req.length, "Generated fresh email");

    Ok(Json(GenerateResponse::new(email)))
}

/// Handler for DELETE /cache
///
/// Clears all cached results and removes the persisted snapshot.
pub async fn clear_cache_handler(State(state): State<AppState>) -> Result<Json<ClearResponse>> {
    // Acquire write lock
    let mut cache = state.cache.write().await;
    let removed = cache.clear();
    info!(removed, "Cache cleared");

    Ok(Json(ClearResponse::new(removed)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Acquire read lock for stats
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.entries,
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::NullSnapshotStore;

    fn test_state() -> AppState {
        AppState::new(RequestCache::new(50, Box::new(NullSnapshotStore)))
    }

    fn request(context: &str) -> GenerateRequest {
        GenerateRequest {
            context: context.to_string(),
            ..GenerateRequest::default()
        }
    }

    #[tokio::test]
    async fn test_generate_handler_miss_then_hit() {
        let state = test_state();
        let req = request("refund request");

        // First call misses and generates
        let first = generate_handler(State(state.clone()), Json(req.clone()))
            .await
            .unwrap();
        assert!(first.email.contains("\"refund request\""));

        // Identical second call hits and returns the same result
        let second = generate_handler(State(state.clone()), Json(req))
            .await
            .unwrap();
        assert_eq!(second.email, first.email);

        let cache = state.cache.read().await;
        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
    }

    #[tokio::test]
    async fn test_generate_handler_blank_context() {
        let state = test_state();

        let result = generate_handler(State(state.clone()), Json(request("   "))).await;
        assert!(result.is_err());

        // Validation happens before any cache work
        let cache = state.cache.read().await;
        assert_eq!(cache.stats().misses, 0);
    }

    #[tokio::test]
    async fn test_generate_handler_unknown_tone_falls_back() {
        let state = test_state();

        let req = GenerateRequest {
            tone: "storytelling".to_string(),
            ..request("product launch")
        };
        let response = generate_handler(State(state), Json(req)).await.unwrap();

        // Default professional/medium template
        assert!(response.email.starts_with("Dear Recipient,"));
        assert!(response.email.contains("do not hesitate to contact me"));
    }

    #[tokio::test]
    async fn test_clear_cache_handler() {
        let state = test_state();

        generate_handler(State(state.clone()), Json(request("a")))
            .await
            .unwrap();
        generate_handler(State(state.clone()), Json(request("b")))
            .await
            .unwrap();

        let response = clear_cache_handler(State(state.clone())).await.unwrap();
        assert_eq!(response.removed, 2);

        // Previously cached request now misses again
        let misses_before = state.cache.read().await.stats().misses;
        generate_handler(State(state.clone()), Json(request("a")))
            .await
            .unwrap();
        let misses_after = state.cache.read().await.stats().misses;
        assert_eq!(misses_after, misses_before + 1);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
        assert_eq!(response.entries, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
