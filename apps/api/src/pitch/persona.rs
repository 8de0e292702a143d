//! Pitch personas — how the generated pitch will be delivered.

use serde::{Deserialize, Serialize};

/// Delivery mode for a pitch. Shapes the tone instruction in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchPersona {
    /// Read on a phone right before walking in the door.
    #[default]
    WalkIn,
    /// Written follow-up after a first visit.
    FollowUpEmail,
    /// Script for hosting a tasting at the restaurant.
    TastingEvent,
}

impl PitchPersona {
    /// Parses a request-supplied persona string. `None` for anything
    /// unrecognized; the handler turns that into a validation error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "walk_in" => Some(PitchPersona::WalkIn),
            "follow_up_email" => Some(PitchPersona::FollowUpEmail),
            "tasting_event" => Some(PitchPersona::TastingEvent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PitchPersona::WalkIn => "walk_in",
            PitchPersona::FollowUpEmail => "follow_up_email",
            PitchPersona::TastingEvent => "tasting_event",
        }
    }

    /// Tone instruction spliced into the pitch prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            PitchPersona::WalkIn => {
                "The rep will read this on their phone right before walking into the \
                 restaurant, so keep it scannable, conversational, and practical."
            }
            PitchPersona::FollowUpEmail => {
                "This will be sent as a short follow-up email after a first visit, so \
                 keep it warm, reference the visit, and make the next step effortless."
            }
            PitchPersona::TastingEvent => {
                "This will be used to host a tasting event at the restaurant, so frame \
                 each point around what the kitchen staff will taste and experience."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_personas() {
        assert_eq!(PitchPersona::parse("walk_in"), Some(PitchPersona::WalkIn));
        assert_eq!(
            PitchPersona::parse("follow_up_email"),
            Some(PitchPersona::FollowUpEmail)
        );
        assert_eq!(
            PitchPersona::parse("tasting_event"),
            Some(PitchPersona::TastingEvent)
        );
    }

    #[test]
    fn test_parse_unknown_persona_is_none() {
        assert_eq!(PitchPersona::parse("cold_call"), None);
        assert_eq!(PitchPersona::parse(""), None);
        assert_eq!(PitchPersona::parse("WALK_IN"), None);
    }

    #[test]
    fn test_default_is_walk_in() {
        assert_eq!(PitchPersona::default(), PitchPersona::WalkIn);
    }
}
