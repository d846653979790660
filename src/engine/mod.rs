//! The diagnostic core: normalize → infer → format.
//!
//! Stateless request/response. Every call builds a fresh [`PatientFact`]
//! from its input and nothing survives the call; the rule table is
//! immutable after first validation, so the whole pipeline may be called
//! from multiple threads without locking.

pub mod format;
pub mod infer;
pub mod rules;
pub mod symptoms;
pub mod types;

pub use symptoms::{PatientFact, Symptom, KNOWN_SYMPTOMS};
pub use types::{Diagnosis, RuleSetError};

/// Diagnose a set of raw symptom phrases.
///
/// Empty input is valid: an all-absent fact matches the "no significant
/// illness" rule rather than producing an error.
pub fn diagnose<S: AsRef<str>>(phrases: &[S]) -> Vec<String> {
    let fact = PatientFact::from_phrases(phrases);
    let results = infer::run_rules(&fact, rules::table());

    tracing::info!(
        phrases = phrases.len(),
        matches = results.len(),
        "diagnosis request served"
    );

    format::format_diagnoses(&results)
}

/// The fixed symptom vocabulary, for the caller to present as a
/// reference list.
pub fn list_known_symptoms() -> &'static [&'static str] {
    KNOWN_SYMPTOMS
}
