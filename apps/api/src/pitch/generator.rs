//! Pitch pipeline — prompt construction, the single LLM attempt, and the
//! deterministic fallback.
//!
//! The LLM is an optional capability. Absent capability, a failed call,
//! or unparseable output all degrade to a catalog-built fallback pitch
//! with low confidence; pitch generation itself never errors.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{ProductCatalog, ProductCatalogEntry, ProductId};
use crate::llm_client::{LlmCall, LlmClient, PITCH_MODEL};
use crate::models::{Confidence, EnrichedProfile};
use crate::pitch::cheese_match::ProductMatch;
use crate::pitch::persona::PitchPersona;
use crate::pitch::prompts::PITCH_PROMPT_TEMPLATE;

const PITCH_MAX_TOKENS: u32 = 1500;
const PITCH_TEMPERATURE: f32 = 0.7;
const PITCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Reviews quoted in the prompt, and the character cap per quote.
const PROMPT_REVIEW_LIMIT: usize = 3;
const PROMPT_REVIEW_CHARS: usize = 200;
/// Ideal uses listed in the cheese context block.
const PROMPT_IDEAL_USES: usize = 5;

/// The model-authored (or fallback) body of a pitch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitchContent {
    pub opening_hook: String,
    pub menu_pairings: Vec<MenuPairing>,
    pub selling_points: Vec<String>,
    pub competitive_advantage: String,
    pub call_to_action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuPairing {
    pub dish: String,
    pub why_it_works: String,
}

/// What the rep needs to know about the product being pitched.
#[derive(Debug, Clone, Serialize)]
pub struct CheeseSummary {
    pub id: ProductId,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub price_per_lb: &'static str,
}

/// Contact details carried alongside the pitch.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantSummary {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// A complete pitch: content plus the metadata the rep acts on.
#[derive(Debug, Clone, Serialize)]
pub struct SalesPitch {
    #[serde(flatten)]
    pub content: PitchContent,
    pub cheese: CheeseSummary,
    pub restaurant: RestaurantSummary,
    pub confidence: Confidence,
}

/// Generates a pitch for the matched product. One LLM attempt when the
/// capability exists; any failure falls back to the catalog pitch.
pub async fn generate_pitch(
    llm: Option<&LlmClient>,
    catalog: &ProductCatalog,
    profile: &EnrichedProfile,
    matched: &ProductMatch,
    persona: PitchPersona,
) -> SalesPitch {
    let entry = catalog.get(matched.primary);

    let (content, confidence) = match llm {
        Some(client) => {
            let prompt = build_pitch_prompt(profile, entry, persona);
            let call = LlmCall {
                model: PITCH_MODEL,
                max_tokens: PITCH_MAX_TOKENS,
                temperature: Some(PITCH_TEMPERATURE),
                timeout: PITCH_TIMEOUT,
                prompt: &prompt,
            };
            match client.call_json::<PitchContent>(&call).await {
                Ok(content) => (content, matched.confidence),
                Err(e) => {
                    warn!("Pitch generation failed ({e}), using fallback pitch");
                    (fallback_content(entry), Confidence::Low)
                }
            }
        }
        None => (fallback_content(entry), Confidence::Low),
    };

    SalesPitch {
        content,
        cheese: CheeseSummary {
            id: entry.id,
            name: entry.name,
            subtitle: entry.subtitle,
            price_per_lb: entry.price_per_lb,
        },
        restaurant: RestaurantSummary {
            name: profile.name.clone(),
            address: profile.address.clone(),
            phone: profile.phone.clone(),
        },
        confidence,
    }
}

/// Splices the restaurant and cheese context blocks into the template.
fn build_pitch_prompt(
    profile: &EnrichedProfile,
    entry: &ProductCatalogEntry,
    persona: PitchPersona,
) -> String {
    PITCH_PROMPT_TEMPLATE
        .replace("{restaurant_context}", &restaurant_context(profile))
        .replace("{cheese_context}", &cheese_context(entry))
        .replace("{persona_instruction}", persona.instruction())
}

fn restaurant_context(profile: &EnrichedProfile) -> String {
    let types = profile
        .types
        .iter()
        .take(5)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let price = profile.price.map(|p| p.symbol()).unwrap_or("N/A");
    let rating = profile
        .rating
        .map(|r| r.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    let mut context = format!(
        "Name: {}\nType: {}\nPrice Level: {}\nRating: {}/5\n\n",
        profile.name, types, price, rating
    );
    context.push_str("Menu Hints from Recent Reviews:\n");
    for (i, review) in profile.reviews.iter().take(PROMPT_REVIEW_LIMIT).enumerate() {
        let text: String = review.text.chars().take(PROMPT_REVIEW_CHARS).collect();
        context.push_str(&format!("{}. {}...\n", i + 1, text));
    }
    context
}

fn cheese_context(entry: &ProductCatalogEntry) -> String {
    format!(
        "{} ({})\n\nDescription: {}\n\nIdeal Uses: {}\nPrice: {} per lb\n",
        entry.name,
        entry.subtitle,
        entry.description,
        entry
            .ideal_uses
            .iter()
            .take(PROMPT_IDEAL_USES)
            .copied()
            .collect::<Vec<_>>()
            .join(", "),
        entry.price_per_lb
    )
}

/// The deterministic pitch used when no LLM output is available.
fn fallback_content(entry: &ProductCatalogEntry) -> PitchContent {
    PitchContent {
        opening_hook: format!(
            "{} would be a perfect addition to your menu - it's a locally-sourced, \
             small-batch artisan cheese that brings unique flavor and story to your dishes.",
            entry.name
        ),
        menu_pairings: vec![
            MenuPairing {
                dish: "Cheese plate or appetizer".to_string(),
                why_it_works: "Showcases the cheese's unique characteristics".to_string(),
            },
            MenuPairing {
                dish: "Featured in a signature dish".to_string(),
                why_it_works: "Creates menu differentiation".to_string(),
            },
        ],
        selling_points: entry
            .selling_points
            .iter()
            .take(3)
            .map(|s| s.to_string())
            .collect(),
        competitive_advantage: "Local, sustainable, small-batch production means better \
                                quality and a story your customers will love."
            .to_string(),
        call_to_action: "How about a complimentary sample to try in your kitchen?".to_string(),
    }
}
