//! Cuisine compatibility detector.
//!
//! Dairy does not sell into Asian kitchens, so a selected restaurant is
//! scored for Asian-cuisine signals before any pitch is written. Purely
//! local: same profile in, same verdict out.

use serde::Serialize;

use crate::models::{Confidence, EnrichedProfile};

/// Strong cuisine signals: dish, technique, and cuisine words. Used for
/// type tags, names, and review text alike.
const STRONG_KEYWORDS: &[&str] = &[
    "sushi",
    "ramen",
    "pho",
    "pad thai",
    "dim sum",
    "curry",
    "tikka",
    "tandoor",
    "bibimbap",
    "bulgogi",
    "teriyaki",
    "tempura",
    "udon",
    "soba",
    "miso",
    "kimchi",
    "dumpling",
    "bao",
    "noodle",
    "wok",
    "szechuan",
    "hunan",
    "cantonese",
    "thai",
    "chinese",
    "japanese",
    "korean",
    "vietnamese",
    "indian",
    "asian",
    "siam",
    "tofu",
];

/// Weaker signals that only count in aggregate.
const MODERATE_KEYWORDS: &[&str] = &[
    "rice bowl",
    "stir fry",
    "spring roll",
    "edamame",
    "sake",
    "wasabi",
    "ginger",
    "soy sauce",
    "sesame",
];

/// Score at which the restaurant is ruled incompatible.
const INCOMPATIBLE_THRESHOLD: i32 = 5;
/// Score at which the verdict is high-confidence.
const HIGH_CONFIDENCE_THRESHOLD: i32 = 10;

/// Points per matching type tag — the strongest signal.
const TYPE_TAG_POINTS: i32 = 10;
/// Points for a cuisine keyword in the name, counted once.
const NAME_POINTS: i32 = 5;
/// Distinct strong review matches needed before they score.
const REVIEW_STRONG_MIN: usize = 3;
/// Distinct moderate review matches needed for the flat bonus.
const REVIEW_MODERATE_MIN: usize = 2;

/// The detector's output: verdict, confidence, and the evidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuisineVerdict {
    pub is_incompatible: bool,
    pub confidence: Confidence,
    pub score: i32,
    pub reasons: Vec<String>,
}

/// Scores a restaurant profile for Asian-cuisine signals.
pub fn detect(profile: &EnrichedProfile) -> CuisineVerdict {
    let name = profile.name.to_lowercase();
    let blob = profile.review_blob();

    let mut score = 0;
    let mut reasons = Vec::new();

    // Type tags: strongest signal, each matching tag scores on its own.
    for tag in &profile.types {
        let tag_lower = tag.to_lowercase();
        if STRONG_KEYWORDS.iter().any(|kw| tag_lower.contains(kw)) {
            reasons.push(format!("Restaurant type: {tag_lower}"));
            score += TYPE_TAG_POINTS;
        }
    }

    // Name: first strong keyword only.
    if let Some(kw) = STRONG_KEYWORDS.iter().find(|kw| name.contains(*kw)) {
        reasons.push(format!("Name contains: {kw}"));
        score += NAME_POINTS;
    }

    // Review blob: distinct strong keywords, scored only in volume.
    let strong_matches: Vec<&str> = STRONG_KEYWORDS
        .iter()
        .filter(|kw| blob.contains(*kw))
        .copied()
        .collect();
    if strong_matches.len() >= REVIEW_STRONG_MIN {
        reasons.push(format!(
            "Menu mentions: {}",
            strong_matches
                .iter()
                .take(3)
                .copied()
                .collect::<Vec<_>>()
                .join(", ")
        ));
        score += strong_matches.len() as i32;
    }

    // Moderate keywords add a single point, no reason recorded.
    let moderate_count = MODERATE_KEYWORDS
        .iter()
        .filter(|kw| blob.contains(*kw))
        .count();
    if moderate_count >= REVIEW_MODERATE_MIN {
        score += 1;
    }

    let confidence = if score >= HIGH_CONFIDENCE_THRESHOLD {
        Confidence::High
    } else if score >= INCOMPATIBLE_THRESHOLD {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    CuisineVerdict {
        is_incompatible: score >= INCOMPATIBLE_THRESHOLD,
        confidence,
        score,
        reasons,
    }
}
