use serde::{Deserialize, Serialize};

/// A single restaurant with the richer data the details/reviews provider
/// returns. Read-only input to the cuisine detector and the match engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedProfile {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    /// 0.0–5.0 star rating, when known.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub price: Option<PriceLevel>,
    /// Category/type tags, e.g. "french_restaurant", "fine_dining".
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Up to 5 recent review excerpts, newest first.
    #[serde(default)]
    pub reviews: Vec<ReviewExcerpt>,
}

impl EnrichedProfile {
    /// Lowercased concatenation of the first 5 review texts. This is the
    /// "menu hint" blob both scoring engines read.
    pub fn review_blob(&self) -> String {
        self.reviews
            .iter()
            .take(5)
            .map(|r| r.text.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One review excerpt as returned by the details provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewExcerpt {
    pub text: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub author: String,
    /// Relative description, e.g. "2 months ago".
    #[serde(default)]
    pub relative_time: String,
}

/// Symbolic price tier, serialized as "$".."$$$$".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceLevel {
    #[serde(rename = "$")]
    Inexpensive,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Expensive,
    #[serde(rename = "$$$$")]
    VeryExpensive,
}

impl PriceLevel {
    pub fn symbol(&self) -> &'static str {
        match self {
            PriceLevel::Inexpensive => "$",
            PriceLevel::Moderate => "$$",
            PriceLevel::Expensive => "$$$",
            PriceLevel::VeryExpensive => "$$$$",
        }
    }

    /// Maps the details provider's price-level enum string.
    /// Unspecified/free levels have no tier.
    pub fn from_provider(level: &str) -> Option<Self> {
        match level {
            "PRICE_LEVEL_INEXPENSIVE" => Some(PriceLevel::Inexpensive),
            "PRICE_LEVEL_MODERATE" => Some(PriceLevel::Moderate),
            "PRICE_LEVEL_EXPENSIVE" => Some(PriceLevel::Expensive),
            "PRICE_LEVEL_VERY_EXPENSIVE" => Some(PriceLevel::VeryExpensive),
            _ => None,
        }
    }
}
