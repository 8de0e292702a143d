use serde::{Deserialize, Serialize};

/// One raw place from the places-search provider, pre-filtering.
/// Lives for a single request; the filter never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    /// Ordered taxonomy tags, e.g. "catering.restaurant.french".
    pub categories: Vec<String>,
    /// 1 = budget .. 4 = very expensive, when the provider knows it.
    pub price_level: Option<u8>,
    /// Straight-line distance from the search center, meters.
    pub distance_m: f64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl Candidate {
    /// A candidate without a usable name cannot be prospected.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Target restaurant segment for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    #[default]
    FineDining,
    Gastropub,
    All,
}

impl Segment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::FineDining => "fine_dining",
            Segment::Gastropub => "gastropub",
            Segment::All => "all",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_is_not_usable() {
        let c = Candidate {
            name: "   ".to_string(),
            categories: vec![],
            price_level: None,
            distance_m: 0.0,
            lat: None,
            lon: None,
        };
        assert!(!c.has_name());
    }

    #[test]
    fn test_segment_deserializes_snake_case() {
        let s: Segment = serde_json::from_str("\"fine_dining\"").unwrap();
        assert_eq!(s, Segment::FineDining);
        let s: Segment = serde_json::from_str("\"gastropub\"").unwrap();
        assert_eq!(s, Segment::Gastropub);
    }
}
