pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pitch;
use crate::places;
use crate::prospecting;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Prospecting API
        .route(
            "/api/v1/prospects",
            post(prospecting::handlers::handle_find_prospects),
        )
        .route(
            "/api/v1/prospects/enrich",
            post(places::handlers::handle_enrich),
        )
        // Pitch API
        .route("/api/v1/pitch", post(pitch::handlers::handle_generate_pitch))
        .route("/api/v1/pitch/match", post(pitch::handlers::handle_match))
        .route(
            "/api/v1/pitch/cuisine-check",
            post(pitch::handlers::handle_cuisine_check),
        )
        .with_state(state)
}
