//! Health check endpoint handler.
//!
//! Provides a simple health check endpoint for monitoring and load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use todo_persistence::core::EntityStorage;
use todo_persistence::types::EntityKind;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Reports the backend and how many entities of each kind it holds.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - Server is healthy
///
/// ```json
/// {"status": "healthy", "backend": "memory", "entities": {"todos": 2, ...}, "timestamp": "..."}
/// ```
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: EntityStorage + Send + Sync,
{
    debug!("Processing health check request");

    let backend_name = state.storage().backend_name();

    let mut entities = serde_json::Map::new();
    for kind in EntityKind::ALL {
        let count = state.storage().count(kind).await?;
        entities.insert(kind.plural().to_string(), count.into());
    }

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": backend_name,
        "entities": entities,
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}
