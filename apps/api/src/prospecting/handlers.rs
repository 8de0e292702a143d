//! Axum route handlers for the Prospecting API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::MIN_SEARCH_RADIUS_M;
use crate::errors::AppError;
use crate::models::{Candidate, Segment};
use crate::places::{PlacesSearch, SearchFilters};
use crate::prospecting::classifier::FilterMethod;
use crate::prospecting::filter;
use crate::state::AppState;

const MIN_RESULT_LIMIT: u32 = 10;
const MAX_RESULT_LIMIT: u32 = 200;

#[derive(Debug, Deserialize)]
pub struct ProspectRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Search radius in meters; clamped to the configured range.
    pub radius: Option<u32>,
    /// Raw results fetched before filtering.
    pub limit: Option<u32>,
    #[serde(default)]
    pub segment: Segment,
    pub use_llm: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct Prospect {
    pub name: String,
    pub categories: Vec<String>,
    pub price_level: Option<u8>,
    /// Distance from the search center in kilometers.
    pub distance_km: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<&Candidate> for Prospect {
    fn from(c: &Candidate) -> Self {
        let mut categories = c.categories.clone();
        categories.truncate(5);
        Prospect {
            name: c.name.clone(),
            categories,
            price_level: c.price_level,
            distance_km: c.distance_m / 1000.0,
            latitude: c.lat,
            longitude: c.lon,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProspectResponse {
    pub prospects: Vec<Prospect>,
    pub total_found: usize,
    pub search_radius_km: f64,
    pub filtering_method: FilterMethod,
}

/// POST /api/v1/prospects
///
/// Nearby search plus segment filtering. Uses the LLM classifier when
/// configured and requested; falls back to keyword rules otherwise.
pub async fn handle_find_prospects(
    State(state): State<AppState>,
    Json(request): Json<ProspectRequest>,
) -> Result<Json<ProspectResponse>, AppError> {
    if !(-90.0..=90.0).contains(&request.latitude) {
        return Err(AppError::Validation(
            "latitude must be between -90 and 90".to_string(),
        ));
    }
    if !(-180.0..=180.0).contains(&request.longitude) {
        return Err(AppError::Validation(
            "longitude must be between -180 and 180".to_string(),
        ));
    }

    let radius_m = request
        .radius
        .unwrap_or(state.config.default_search_radius_m)
        .clamp(MIN_SEARCH_RADIUS_M, state.config.max_search_radius_m);
    let limit = request
        .limit
        .unwrap_or(state.config.default_result_limit)
        .clamp(MIN_RESULT_LIMIT, MAX_RESULT_LIMIT);
    let use_llm = request.use_llm.unwrap_or(state.config.use_llm_filtering);

    let candidates = state
        .places
        .search(&PlacesSearch {
            lat: request.latitude,
            lon: request.longitude,
            radius_m,
            limit,
            filters: SearchFilters::default(),
        })
        .await?;

    let (kept, filtering_method) = if use_llm {
        state
            .classifier
            .filter_with_classifier(&candidates, request.segment)
            .await
    } else {
        (
            filter::filter(&candidates, request.segment),
            FilterMethod::Keyword,
        )
    };

    info!(
        "Prospect search kept {}/{} candidates ({} segment)",
        kept.len(),
        candidates.len(),
        request.segment.as_str()
    );

    let prospects: Vec<Prospect> = kept.iter().map(Prospect::from).collect();
    Ok(Json(ProspectResponse {
        total_found: prospects.len(),
        search_radius_km: f64::from(radius_m) / 1000.0,
        filtering_method,
        prospects,
    }))
}
