mod handlers;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::graphql::GraphQlClient;

pub fn create_router(client: GraphQlClient) -> Router {
    let api = Router::new()
        // Missions (aggregated per request)
        .route("/missions", get(handlers::list_missions))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(client)
}
