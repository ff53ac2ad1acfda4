//! Router assembly and server startup.

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use trellis_core::TypeRegistry;
use trellis_graph::GraphClient;

use crate::handlers;

/// Shared state injected into every handler.
///
/// Built once at startup, after schema discovery; the registry never
/// changes for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub graph: GraphClient,
    pub registry: Arc<TypeRegistry>,
}

/// Assemble the API router.
pub fn router(state: AppState) -> Router {
    // POST /node/:key takes a type name, DELETE /node/:key an id; the
    // segment has to share one parameter name across methods.
    Router::new()
        .route("/data", get(handlers::list_all))
        .route("/data/:node_type", get(handlers::list_by_type))
        .route("/data/:source/:dest", get(handlers::list_connections))
        .route(
            "/node/:key",
            post(handlers::create_node).delete(handlers::delete_node),
        )
        .route(
            "/relationship/:source/:rel_type/:dest",
            post(handlers::create_relationship),
        )
        .route("/relationship/:id", delete(handlers::delete_relationship))
        .route("/edit/node/:id", post(handlers::edit_node))
        .route("/status", get(handlers::status))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the listener and serve until shutdown.
pub async fn serve(state: AppState, listen: &str) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(listen).await?;
    tracing::info!(%listen, "API listening");
    axum::serve(listener, app).await
}
