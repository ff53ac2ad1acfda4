//! Error taxonomy for the request handlers and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use trellis_graph::GraphError;

/// Errors surfaced by the request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The path named a node label the database does not have.
    #[error("Unknown node type: {value}")]
    UnknownNodeType { value: String },

    /// The path named a relationship type the database does not have.
    #[error("Unknown relationship type: {value}")]
    UnknownRelType { value: String },

    #[error("Node not found: {id}")]
    NodeNotFound { id: i64 },

    #[error("Relationship not found: {id}")]
    RelationshipNotFound { id: i64 },

    /// Upstream database failure. Not retried, not masked.
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::UnknownNodeType { .. } | Self::UnknownRelType { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::NodeNotFound { .. } | Self::RelationshipNotFound { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::Graph(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
