//! Details/reviews provider client — the source of `EnrichedProfile`.
//!
//! Text search by name with a tight location bias, one result, field
//! mask limited to what the scoring engines read. An unmatched name is
//! `None`, not an error.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::PlacesError;
use crate::models::{EnrichedProfile, PriceLevel, ReviewExcerpt};

const DETAILS_URL: &str = "https://places.googleapis.com/v1/places:searchText";
const DETAILS_TIMEOUT: Duration = Duration::from_secs(10);
/// Meters around the prospect's coordinates the text search may roam.
const LOCATION_BIAS_RADIUS_M: f64 = 200.0;
const FIELD_MASK: &str = "places.displayName,places.formattedAddress,places.rating,\
places.userRatingCount,places.priceLevel,places.types,places.nationalPhoneNumber,\
places.websiteUri,places.reviews";

const MAX_TYPES: usize = 5;
const MAX_REVIEWS: usize = 5;
const MAX_MENU_HINTS: usize = 10;

/// Words that mark a review sentence as a likely menu mention.
const FOOD_KEYWORDS: &[&str] = &[
    "steak",
    "pasta",
    "salad",
    "burger",
    "fish",
    "chicken",
    "lamb",
    "pork",
    "duck",
    "risotto",
    "soup",
    "dessert",
    "wine",
    "cocktail",
    "cheese",
    "bread",
    "seafood",
    "lobster",
    "crab",
    "oyster",
    "tuna",
    "salmon",
    "scallops",
    "appetizer",
    "entree",
    "dish",
    "special",
];

/// Wraps the details/reviews API. Constructed only when the capability
/// is configured.
#[derive(Clone)]
pub struct DetailsClient {
    client: Client,
    api_key: String,
}

impl DetailsClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Looks a prospect up by name near its coordinates. `None` means
    /// the provider found nothing, which callers map to 404.
    pub async fn lookup(
        &self,
        name: &str,
        lat: f64,
        lon: f64,
    ) -> Result<Option<EnrichedProfile>, PlacesError> {
        let payload = TextSearchRequest {
            text_query: name,
            location_bias: LocationBias {
                circle: Circle {
                    center: LatLng {
                        latitude: lat,
                        longitude: lon,
                    },
                    radius: LOCATION_BIAS_RADIUS_M,
                },
            },
            max_result_count: 1,
        };

        let response = self
            .client
            .post(DETAILS_URL)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .timeout(DETAILS_TIMEOUT)
            .json(&payload)
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

        let result: TextSearchResponse = response.json().await?;
        let profile = result.places.into_iter().next().map(profile_from_place);
        debug!("Details lookup for {name:?}: found={}", profile.is_some());
        Ok(profile)
    }
}

/// Pulls likely menu mentions out of review text: short sentences that
/// name a food keyword, deduplicated, capped.
pub fn extract_menu_hints(reviews: &[ReviewExcerpt]) -> Vec<String> {
    let mut hints: Vec<String> = Vec::new();
    for review in reviews {
        let text = review.text.to_lowercase().replace(['!', '?'], ".");
        for sentence in text.split('.') {
            let sentence = sentence.trim();
            let is_menu_mention = FOOD_KEYWORDS.iter().any(|kw| sentence.contains(kw))
                && sentence.len() > 10
                && sentence.len() < 150;
            if is_menu_mention {
                let hint = capitalize(sentence);
                if !hints.contains(&hint) {
                    hints.push(hint);
                }
            }
        }
    }
    hints.truncate(MAX_MENU_HINTS);
    hints
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TextSearchRequest<'a> {
    text_query: &'a str,
    location_bias: LocationBias,
    max_result_count: u32,
}

#[derive(Debug, Serialize)]
struct LocationBias {
    circle: Circle,
}

#[derive(Debug, Serialize)]
struct Circle {
    center: LatLng,
    radius: f64,
}

#[derive(Debug, Serialize)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    #[serde(default)]
    places: Vec<Place>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Place {
    #[serde(default)]
    display_name: Option<LocalizedText>,
    #[serde(default)]
    formatted_address: Option<String>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    user_rating_count: u32,
    #[serde(default)]
    price_level: Option<String>,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    national_phone_number: Option<String>,
    #[serde(default)]
    website_uri: Option<String>,
    #[serde(default)]
    reviews: Vec<Review>,
}

#[derive(Debug, Deserialize)]
struct LocalizedText {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Review {
    #[serde(default)]
    text: Option<LocalizedText>,
    #[serde(default)]
    rating: u8,
    #[serde(default)]
    relative_publish_time_description: String,
    #[serde(default)]
    author_attribution: Option<AuthorAttribution>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthorAttribution {
    #[serde(default)]
    display_name: String,
}

fn profile_from_place(place: Place) -> EnrichedProfile {
    let mut types = place.types;
    types.truncate(MAX_TYPES);

    let reviews: Vec<ReviewExcerpt> = place
        .reviews
        .into_iter()
        .take(MAX_REVIEWS)
        .map(|r| ReviewExcerpt {
            text: r.text.map(|t| t.text).unwrap_or_default(),
            rating: r.rating,
            author: r
                .author_attribution
                .map(|a| a.display_name)
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Anonymous".to_string()),
            relative_time: r.relative_publish_time_description,
        })
        .collect();

    EnrichedProfile {
        name: place
            .display_name
            .map(|n| n.text)
            .unwrap_or_else(|| "Unknown".to_string()),
        address: place.formatted_address,
        rating: place.rating,
        review_count: place.user_rating_count,
        price: place
            .price_level
            .as_deref()
            .and_then(PriceLevel::from_provider),
        types,
        phone: place.national_phone_number,
        website: place.website_uri,
        reviews,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(text: &str) -> ReviewExcerpt {
        ReviewExcerpt {
            text: text.to_string(),
            rating: 5,
            author: "Anonymous".to_string(),
            relative_time: "a month ago".to_string(),
        }
    }

    #[test]
    fn test_profile_from_place_maps_price_and_caps_reviews() {
        let json = serde_json::json!({
            "displayName": { "text": "Oceanique" },
            "formattedAddress": "505 Main St, Evanston, IL",
            "rating": 4.6,
            "userRatingCount": 812,
            "priceLevel": "PRICE_LEVEL_EXPENSIVE",
            "types": ["french_restaurant", "fine_dining", "restaurant",
                      "food", "point_of_interest", "establishment"],
            "nationalPhoneNumber": "(847) 555-0123",
            "reviews": (0..7).map(|i| serde_json::json!({
                "text": { "text": format!("review {i}") },
                "rating": 5,
                "relativePublishTimeDescription": "a month ago",
                "authorAttribution": { "displayName": "Pat" }
            })).collect::<Vec<_>>()
        });
        let place: Place = serde_json::from_value(json).unwrap();
        let profile = profile_from_place(place);
        assert_eq!(profile.name, "Oceanique");
        assert_eq!(profile.price, Some(PriceLevel::Expensive));
        assert_eq!(profile.types.len(), 5);
        assert_eq!(profile.reviews.len(), 5);
        assert_eq!(profile.reviews[0].author, "Pat");
    }

    #[test]
    fn test_profile_from_place_tolerates_sparse_payload() {
        let place: Place = serde_json::from_str("{}").unwrap();
        let profile = profile_from_place(place);
        assert_eq!(profile.name, "Unknown");
        assert_eq!(profile.price, None);
        assert!(profile.reviews.is_empty());
    }

    #[test]
    fn test_extract_menu_hints_keeps_short_food_sentences() {
        let reviews = vec![review(
            "The duck confit was incredible! Service was slow. Wine list is deep and well priced.",
        )];
        let hints = extract_menu_hints(&reviews);
        assert_eq!(
            hints,
            vec![
                "The duck confit was incredible".to_string(),
                "Wine list is deep and well priced".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_menu_hints_drops_long_and_tiny_sentences() {
        let long = format!("the steak {}", "x".repeat(150));
        let reviews = vec![review(&format!("Steak. {long}."))];
        assert!(extract_menu_hints(&reviews).is_empty());
    }

    #[test]
    fn test_extract_menu_hints_dedups_and_caps_at_ten() {
        let sentence = "the cheese plate was great";
        let many: Vec<ReviewExcerpt> = (0..3).map(|_| review(sentence)).collect();
        assert_eq!(extract_menu_hints(&many).len(), 1);

        let varied = review(
            &(0..15)
                .map(|i| format!("dish number {i} was a fine special"))
                .collect::<Vec<_>>()
                .join(". "),
        );
        assert_eq!(extract_menu_hints(&[varied]).len(), 10);
    }
}
