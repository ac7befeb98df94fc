use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::{export_cards, extract_vocab, health_handler, lookup_entry};
use crate::state::AppState;

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    let api = Router::new()
        .route("/dictionary/:language/:entry", get(lookup_entry))
        .route("/vocab_extractor/", post(extract_vocab))
        .route("/anki/export", post(export_cards));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
