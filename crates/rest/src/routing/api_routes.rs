//! Todo Manager route configuration.
//!
//! Routes capture raw path segments; handlers resolve them against the
//! schema (see [`crate::resolver`]), so one route shape serves every kind.

use axum::{
    Router,
    http::Uri,
    routing::get,
};
use todo_persistence::core::RelationshipStorage;

use crate::error::RestError;
use crate::handlers;
use crate::state::AppState;

/// Creates all Todo Manager API routes.
///
/// # Routes
///
/// ## System-level
/// - `GET /health` - Health check
///
/// ## Collection-level
/// - `GET /{kind}` - List
/// - `POST /{kind}` - Create
///
/// ## Instance-level
/// - `GET /{kind}/{id}` - Read (a relation name as id: view over all sources)
/// - `POST /{kind}/{id}` - Amend
/// - `PUT /{kind}/{id}` - Replace
/// - `DELETE /{kind}/{id}` - Delete
///
/// ## Relationship-level
/// - `GET /{kind}/{id}/{relation}` - Relationship view
/// - `POST /{kind}/{id}/{relation}` - Link or create-and-link
/// - `GET /{kind}/{id}/{relation}/{target}` - Read a linked entity
/// - `POST /{kind}/{id}/{relation}/{target}` - Amend a linked entity
/// - `DELETE /{kind}/{id}/{relation}/{target}` - Unlink
///
/// `HEAD` is answered by every `GET` route. Any other path is a 404 in the
/// error envelope.
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: RelationshipStorage + Send + Sync + 'static,
{
    Router::new()
        // System-level routes
        .route("/health", get(handlers::health_handler::<S>))
        // Collection-level routes
        .route(
            "/{kind}",
            get(handlers::list_handler::<S>).post(handlers::create_handler::<S>),
        )
        // Instance-level routes
        .route(
            "/{kind}/{id}",
            get(handlers::read_handler::<S>)
                .post(handlers::amend_handler::<S>)
                .put(handlers::replace_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        )
        // Relationship-level routes
        .route(
            "/{kind}/{id}/{relation}",
            get(handlers::related_handler::<S>).post(handlers::link_handler::<S>),
        )
        .route(
            "/{kind}/{id}/{relation}/{target}",
            get(handlers::related_instance_handler::<S>)
                .post(handlers::amend_related_handler::<S>)
                .delete(handlers::unlink_handler::<S>),
        )
        .fallback(fallback_handler)
        // State
        .with_state(state)
}

/// 404 for any path no route matches.
async fn fallback_handler(uri: Uri) -> RestError {
    RestError::no_instance(uri.path().trim_start_matches('/'))
}
