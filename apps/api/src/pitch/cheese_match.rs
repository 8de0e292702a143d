//! Cheese match engine — scores a restaurant profile against the two
//! catalog archetypes and picks a primary recommendation.
//!
//! Purely local and deterministic; both raw scores are returned so the
//! recommendation can be audited.

use serde::Serialize;

use crate::catalog::ProductId;
use crate::models::{Confidence, EnrichedProfile, PriceLevel};

/// Type-tag keywords that point to Pasture Bloom (fine dining).
const FINE_DINING_TYPE_KEYWORDS: &[&str] = &[
    "fine_dining",
    "french",
    "italian",
    "european",
    "bistro",
    "upscale",
    "tasting",
];

/// Review words that point to Pasture Bloom.
const FINE_DINING_REVIEW_KEYWORDS: &[&str] =
    &["duck", "scallop", "lobster", "tasting", "amuse", "champagne"];

/// Type-tag keywords that point to Smoky Alder (gastropub).
const GASTROPUB_TYPE_KEYWORDS: &[&str] = &[
    "pub",
    "gastropub",
    "tavern",
    "bar",
    "american",
    "burger",
    "grill",
];

/// Review words that point to Smoky Alder.
const GASTROPUB_REVIEW_KEYWORDS: &[&str] = &[
    "burger",
    "bacon",
    "bbq",
    "smoke",
    "beer",
    "wood-fired",
    "charcuterie",
];

/// Points per type keyword with at least one matching tag.
const TYPE_KEYWORD_POINTS: i32 = 2;
/// Score at which a clear winner is a high-confidence match.
const HIGH_CONFIDENCE_SCORE: i32 = 3;

/// Raw per-product scores, kept for auditability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchScores {
    pub pasture_bloom: i32,
    pub smoky_alder: i32,
}

/// The engine's recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductMatch {
    pub primary: ProductId,
    pub secondary: Option<ProductId>,
    pub confidence: Confidence,
    pub scores: MatchScores,
}

/// Scores the profile against both archetypes and resolves a winner.
pub fn match_product(profile: &EnrichedProfile) -> ProductMatch {
    let types_lower: Vec<String> = profile.types.iter().map(|t| t.to_lowercase()).collect();
    let blob = profile.review_blob();

    let mut pasture_bloom = 0;
    let mut smoky_alder = 0;

    // One increment per keyword with at least one matching tag.
    for keyword in FINE_DINING_TYPE_KEYWORDS {
        if types_lower.iter().any(|t| t.contains(keyword)) {
            pasture_bloom += TYPE_KEYWORD_POINTS;
        }
    }
    if FINE_DINING_REVIEW_KEYWORDS.iter().any(|kw| blob.contains(kw)) {
        pasture_bloom += 1;
    }

    for keyword in GASTROPUB_TYPE_KEYWORDS {
        if types_lower.iter().any(|t| t.contains(keyword)) {
            smoky_alder += TYPE_KEYWORD_POINTS;
        }
    }
    if GASTROPUB_REVIEW_KEYWORDS.iter().any(|kw| blob.contains(kw)) {
        smoky_alder += 1;
    }

    // Price nudge. The two ranges overlap on $$$; the top-tier check
    // takes precedence, matching the reference behavior.
    match profile.price {
        Some(PriceLevel::Expensive) | Some(PriceLevel::VeryExpensive) => pasture_bloom += 1,
        Some(PriceLevel::Moderate) => smoky_alder += 1,
        _ => {}
    }

    resolve(pasture_bloom, smoky_alder)
}

/// Picks primary/secondary and confidence from the two scores.
/// Ties default to Smoky Alder, the more versatile product.
fn resolve(pasture_bloom: i32, smoky_alder: i32) -> ProductMatch {
    let scores = MatchScores {
        pasture_bloom,
        smoky_alder,
    };

    if pasture_bloom > smoky_alder {
        ProductMatch {
            primary: ProductId::PastureBloom,
            secondary: (smoky_alder > 0).then_some(ProductId::SmokyAlder),
            confidence: if pasture_bloom >= HIGH_CONFIDENCE_SCORE {
                Confidence::High
            } else {
                Confidence::Medium
            },
            scores,
        }
    } else if smoky_alder > pasture_bloom {
        ProductMatch {
            primary: ProductId::SmokyAlder,
            secondary: (pasture_bloom > 0).then_some(ProductId::PastureBloom),
            confidence: if smoky_alder >= HIGH_CONFIDENCE_SCORE {
                Confidence::High
            } else {
                Confidence::Medium
            },
            scores,
        }
    } else {
        ProductMatch {
            primary: ProductId::SmokyAlder,
            secondary: Some(ProductId::PastureBloom),
            confidence: Confidence::Low,
            scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReviewExcerpt;

    fn profile(types: &[&str], price: Option<PriceLevel>, reviews: &[&str]) -> EnrichedProfile {
        EnrichedProfile {
            name: "Test Restaurant".to_string(),
            address: None,
            rating: Some(4.5),
            review_count: reviews.len() as u32,
            price,
            types: types.iter().map(|s| s.to_string()).collect(),
            phone: None,
            website: None,
            reviews: reviews
                .iter()
                .map(|text| ReviewExcerpt {
                    text: text.to_string(),
                    rating: 5,
                    author: "Anonymous".to_string(),
                    relative_time: "a month ago".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_french_expensive_profile_matches_pasture_bloom_high() {
        // category +2, review keywords +1 (once), price +1 → 4 vs 0.
        let m = match_product(&profile(
            &["french_restaurant"],
            Some(PriceLevel::Expensive),
            &[
                "lobster and scallops were excellent",
                "champagne pairing was perfect",
                "tasting menu was outstanding",
            ],
        ));
        assert_eq!(m.scores.pasture_bloom, 4);
        assert_eq!(m.scores.smoky_alder, 0);
        assert_eq!(m.primary, ProductId::PastureBloom);
        assert_eq!(m.secondary, None);
        assert_eq!(m.confidence, Confidence::High);
    }

    #[test]
    fn test_gastropub_profile_matches_smoky_alder() {
        let m = match_product(&profile(
            &["gastropub", "bar"],
            Some(PriceLevel::Moderate),
            &["best burger in town", "great beer list"],
        ));
        // "gastropub" matches both "pub" and "gastropub" keywords (+4),
        // "bar" (+2), reviews (+1), price (+1).
        assert_eq!(m.scores.smoky_alder, 8);
        assert_eq!(m.primary, ProductId::SmokyAlder);
        assert_eq!(m.confidence, Confidence::High);
    }

    #[test]
    fn test_zero_zero_tie_defaults_to_smoky_alder_low() {
        let m = match_product(&profile(&[], None, &[]));
        assert_eq!(m.scores.pasture_bloom, 0);
        assert_eq!(m.scores.smoky_alder, 0);
        assert_eq!(m.primary, ProductId::SmokyAlder);
        assert_eq!(m.secondary, Some(ProductId::PastureBloom));
        assert_eq!(m.confidence, Confidence::Low);
    }

    #[test]
    fn test_expensive_tier_nudges_pasture_bloom_only() {
        // $$$ sits in both nudge ranges; the top-tier check wins.
        let m = match_product(&profile(&[], Some(PriceLevel::Expensive), &[]));
        assert_eq!(m.scores.pasture_bloom, 1);
        assert_eq!(m.scores.smoky_alder, 0);
        assert_eq!(m.primary, ProductId::PastureBloom);
        assert_eq!(m.confidence, Confidence::Medium);
    }

    #[test]
    fn test_moderate_tier_nudges_smoky_alder() {
        let m = match_product(&profile(&[], Some(PriceLevel::Moderate), &[]));
        assert_eq!(m.scores.smoky_alder, 1);
        assert_eq!(m.scores.pasture_bloom, 0);
    }

    #[test]
    fn test_review_keywords_count_once_per_product() {
        let m = match_product(&profile(
            &[],
            None,
            &["duck, lobster, scallops, champagne — everything was great"],
        ));
        assert_eq!(m.scores.pasture_bloom, 1);
    }

    #[test]
    fn test_secondary_present_when_loser_scored() {
        let m = match_product(&profile(
            &["french_restaurant", "bar"],
            None,
            &[],
        ));
        assert_eq!(m.scores.pasture_bloom, 2);
        assert_eq!(m.scores.smoky_alder, 2);
        // Equal scores: tie default applies.
        assert_eq!(m.primary, ProductId::SmokyAlder);
        assert_eq!(m.secondary, Some(ProductId::PastureBloom));
        assert_eq!(m.confidence, Confidence::Low);
    }

    #[test]
    fn test_match_is_a_pure_function() {
        let p = profile(
            &["fine_dining", "french_restaurant"],
            Some(PriceLevel::VeryExpensive),
            &["the amuse-bouche was a delight"],
        );
        assert_eq!(match_product(&p), match_product(&p));
    }
}
