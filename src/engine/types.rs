//! Result and error types shared across the engine.

use serde::Serialize;
use thiserror::Error;

/// One fired rule: disease label plus its fixed confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    /// Human-readable disease label from the rule table.
    pub disease: &'static str,
    /// Fixed 0-100 confidence attached to the rule, never computed.
    pub confidence: u8,
}

/// Construction-time rule table defects. Fatal at initialization — a table
/// that fails these checks must never serve a diagnosis request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleSetError {
    #[error("rule '{rule}' requires flag '{flag}' both present and absent")]
    ContradictoryFlag {
        rule: &'static str,
        flag: &'static str,
    },

    #[error("rule '{rule}' lists OR-group flag '{flag}' as excluded")]
    ExcludedAlternative {
        rule: &'static str,
        flag: &'static str,
    },

    #[error("rule '{rule}' has confidence {confidence}, expected 0-100")]
    ConfidenceOutOfRange { rule: &'static str, confidence: u8 },

    #[error("rule '{rule}' has an empty disease label")]
    EmptyLabel { rule: &'static str },
}
