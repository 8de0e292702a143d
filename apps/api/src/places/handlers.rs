//! Axum route handlers for prospect enrichment.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::EnrichedProfile;
use crate::places::details::extract_menu_hints;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EnrichRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize)]
pub struct EnrichResponse {
    pub profile: EnrichedProfile,
    pub menu_hints: Vec<String>,
}

/// POST /api/v1/prospects/enrich
///
/// Looks a prospect up with the details/reviews provider and extracts
/// menu hints from its reviews. 503 when the capability is not
/// configured, 404 when the provider finds nothing.
pub async fn handle_enrich(
    State(state): State<AppState>,
    Json(request): Json<EnrichRequest>,
) -> Result<Json<EnrichResponse>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let details = state.details.as_ref().ok_or_else(|| {
        AppError::Unconfigured(
            "Enrichment requires GOOGLE_PLACES_API_KEY to be set".to_string(),
        )
    })?;

    let profile = details
        .lookup(&request.name, request.latitude, request.longitude)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No place found for '{}'", request.name)))?;

    let menu_hints = extract_menu_hints(&profile.reviews);
    Ok(Json(EnrichResponse {
        profile,
        menu_hints,
    }))
}
