//! Axum route handlers for the Pitch API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::EnrichedProfile;
use crate::pitch::cheese_match::{self, ProductMatch};
use crate::pitch::cuisine::{self, CuisineVerdict};
use crate::pitch::generator::{generate_pitch, SalesPitch};
use crate::pitch::persona::PitchPersona;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PitchRequest {
    pub restaurant: EnrichedProfile,
    /// Delivery persona; defaults to walk_in. Unknown values are rejected.
    pub persona: Option<String>,
    #[serde(default)]
    pub skip_cuisine_check: bool,
}

#[derive(Debug, Serialize)]
pub struct PitchResponse {
    pub compatible: bool,
    pub cuisine_check: CuisineVerdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cheese_match: Option<ProductMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<SalesPitch>,
}

/// POST /api/v1/pitch/match
///
/// Scores the profile against the catalog and returns the recommendation.
pub async fn handle_match(
    Json(profile): Json<EnrichedProfile>,
) -> Result<Json<ProductMatch>, AppError> {
    Ok(Json(cheese_match::match_product(&profile)))
}

/// POST /api/v1/pitch/cuisine-check
///
/// Runs the cuisine compatibility detector on its own.
pub async fn handle_cuisine_check(
    Json(profile): Json<EnrichedProfile>,
) -> Result<Json<CuisineVerdict>, AppError> {
    Ok(Json(cuisine::detect(&profile)))
}

/// POST /api/v1/pitch
///
/// Full pitch pipeline: cuisine check, cheese match, pitch generation.
/// An incompatible verdict short-circuits with a warning payload unless
/// the caller sets skip_cuisine_check.
pub async fn handle_generate_pitch(
    State(state): State<AppState>,
    Json(request): Json<PitchRequest>,
) -> Result<Json<PitchResponse>, AppError> {
    let persona = match &request.persona {
        Some(value) => PitchPersona::parse(value)
            .ok_or_else(|| AppError::Validation(format!("unknown persona '{value}'")))?,
        None => PitchPersona::default(),
    };

    let verdict = cuisine::detect(&request.restaurant);
    if verdict.is_incompatible && !request.skip_cuisine_check {
        info!(
            "Skipping pitch for {}: cuisine incompatible (score {})",
            request.restaurant.name, verdict.score
        );
        return Ok(Json(PitchResponse {
            compatible: false,
            warning: Some(
                "This restaurant appears to serve Asian cuisine, which rarely uses dairy. \
                 Set skip_cuisine_check to generate a pitch anyway."
                    .to_string(),
            ),
            cuisine_check: verdict,
            cheese_match: None,
            pitch: None,
        }));
    }

    let matched = cheese_match::match_product(&request.restaurant);
    let pitch = generate_pitch(
        state.llm.as_ref(),
        &state.catalog,
        &request.restaurant,
        &matched,
        persona,
    )
    .await;

    info!(
        "Generated {} pitch for {} (primary: {})",
        persona.as_str(),
        request.restaurant.name,
        matched.primary.as_str()
    );

    Ok(Json(PitchResponse {
        compatible: !verdict.is_incompatible,
        cuisine_check: verdict,
        warning: None,
        cheese_match: Some(matched),
        pitch: Some(pitch),
    }))
}
