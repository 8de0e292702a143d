pub mod candidate;
pub mod profile;

pub use candidate::{Candidate, Segment};
pub use profile::{EnrichedProfile, PriceLevel, ReviewExcerpt};

use serde::{Deserialize, Serialize};

/// How certain a verdict or recommendation is. Serialized lowercase so
/// mobile clients can display it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}
