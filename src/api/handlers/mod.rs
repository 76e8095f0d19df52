use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::aggregator;
use crate::graphql::GraphQlClient;
use crate::models::MissionRecord;

// ============================================================
// Error Handling
// ============================================================

/// Log an internal error and return a sanitized response to the client.
/// The full error is logged server-side for debugging, but clients only
/// see a generic message to avoid leaking upstream details.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Aggregation failed: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Missions
// ============================================================

/// Run the aggregation pass and return the assembled records.
///
/// Aggregation runs once per request: the caller receives the full joined
/// list as its initial data, the way a server-rendered page would.
pub async fn list_missions(
    State(client): State<GraphQlClient>,
) -> Result<Json<Vec<MissionRecord>>, (StatusCode, String)> {
    aggregator::aggregate(&client)
        .await
        .map(Json)
        .map_err(internal_error)
}
