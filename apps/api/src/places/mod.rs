//! Places-search provider client — the source of raw `Candidate` lists.
//!
//! GeoJSON-flavored nearby search: lat/lon/radius/limit plus an optional
//! `conditions` filter assembled from cuisine/price/stars attributes.
//! Errors surface to the caller; filtering never happens here.

pub mod details;
pub mod handlers;

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::Candidate;

const SEARCH_URL: &str = "https://api.geoapify.com/v2/places";
const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);
/// Only restaurants are prospected; cafes, fast food etc. are pruned
/// downstream by the keyword filter, not at the provider.
const SEARCH_CATEGORIES: &str = "catering.restaurant";

#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider error (status {status}): {body}")]
    Api { status: u16, body: String },
}

/// Optional attribute filters for a nearby search.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub cuisines: Vec<String>,
    pub price_level: Option<u8>,
    pub stars: Option<u8>,
}

/// Parameters for one nearby search.
#[derive(Debug, Clone)]
pub struct PlacesSearch {
    pub lat: f64,
    pub lon: f64,
    pub radius_m: u32,
    pub limit: u32,
    pub filters: SearchFilters,
}

/// Wraps the places-search API. Cheap to clone; share freely.
#[derive(Clone)]
pub struct PlacesClient {
    client: Client,
    api_key: String,
}

impl PlacesClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Runs one nearby search and maps the feature list to candidates.
    /// Nameless features are kept here; the filter drops them.
    pub async fn search(&self, search: &PlacesSearch) -> Result<Vec<Candidate>, PlacesError> {
        let mut query: Vec<(&str, String)> = vec![
            ("apiKey", self.api_key.clone()),
            ("lat", search.lat.to_string()),
            ("lon", search.lon.to_string()),
            ("radius", search.radius_m.to_string()),
            ("limit", search.limit.to_string()),
            ("categories", SEARCH_CATEGORIES.to_string()),
        ];
        if let Some(conditions) = build_conditions(&search.filters) {
            query.push(("conditions", conditions));
        }

        let response = self
            .client
            .get(SEARCH_URL)
            .query(&query)
            .timeout(SEARCH_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlacesError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let collection: FeatureCollection = response.json().await?;
        let candidates: Vec<Candidate> = collection
            .features
            .iter()
            .map(candidate_from_feature)
            .collect();
        debug!(
            "Places search returned {} candidates within {}m",
            candidates.len(),
            search.radius_m
        );
        Ok(candidates)
    }
}

/// Joins the optional attribute filters into the provider's
/// comma-separated `conditions` parameter. None when nothing is set.
fn build_conditions(filters: &SearchFilters) -> Option<String> {
    let mut conditions: Vec<String> = filters
        .cuisines
        .iter()
        .map(|c| format!("cuisine:{c}"))
        .collect();
    if let Some(price_level) = filters.price_level {
        conditions.push(format!("price_level:{price_level}"));
    }
    if let Some(stars) = filters.stars {
        conditions.push(format!("stars:{stars}"));
    }
    if conditions.is_empty() {
        None
    } else {
        Some(conditions.join(","))
    }
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: FeatureProperties,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Debug, Default, Deserialize)]
struct FeatureProperties {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    price_level: Option<u8>,
    /// Distance from the search center in meters.
    #[serde(default)]
    distance: f64,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// GeoJSON order: [lon, lat].
    #[serde(default)]
    coordinates: Vec<f64>,
}

fn candidate_from_feature(feature: &Feature) -> Candidate {
    let coords = feature
        .geometry
        .as_ref()
        .map(|g| g.coordinates.as_slice())
        .unwrap_or_default();
    Candidate {
        name: feature.properties.name.clone().unwrap_or_default(),
        categories: feature.properties.categories.clone(),
        price_level: feature.properties.price_level,
        distance_m: feature.properties.distance,
        lat: coords.get(1).copied(),
        lon: coords.get(0).copied(),
    }
}
