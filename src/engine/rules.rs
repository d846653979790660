//! The declarative rule table.
//!
//! Rules are data consumed by the generic matcher in [`super::infer`];
//! adding or removing a rule never touches engine logic. Declaration order
//! fixes result order and nothing else — every rule is evaluated
//! independently against the same immutable fact.

use std::sync::LazyLock;

use super::symptoms::Symptom;
use super::types::RuleSetError;

/// Condition over a patient fact: a conjunction of required and excluded
/// flags, optionally widened by an OR-group of which at least one member
/// must be present.
#[derive(Debug, Clone, Copy)]
pub struct Condition {
    /// Flags that must all be present.
    pub required: &'static [Symptom],
    /// At least one must be present, when non-empty.
    pub any_of: &'static [Symptom],
    /// Flags that must all be absent.
    pub forbidden: &'static [Symptom],
}

/// A named diagnosis rule with its fixed confidence.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Stable identifier for logs.
    pub id: &'static str,
    /// Disease label shown to the user.
    pub disease: &'static str,
    /// Fixed 0-100 confidence, a constant of the rule.
    pub confidence: u8,
    pub condition: Condition,
}

const NO_FLAGS: &[Symptom] = &[];

// ── Rule registry ───────────────────────────────────────────

static RULES: [Rule; 8] = [
    // Multiple key symptoms together.
    Rule {
        id: "covid-high-probability",
        disease: "COVID-19 - High Probability",
        confidence: 90,
        condition: Condition {
            required: &[Symptom::Fever, Symptom::Cough, Symptom::TasteLoss],
            any_of: NO_FLAGS,
            forbidden: NO_FLAGS,
        },
    },
    // Fever plus respiratory involvement.
    Rule {
        id: "covid-moderate-probability",
        disease: "COVID-19 - Moderate Probability",
        confidence: 75,
        condition: Condition {
            required: &[Symptom::Fever, Symptom::BreathingDifficulty],
            any_of: NO_FLAGS,
            forbidden: NO_FLAGS,
        },
    },
    // Some symptoms present but no fever.
    Rule {
        id: "covid-low-probability",
        disease: "COVID-19 - Low Probability",
        confidence: 40,
        condition: Condition {
            required: &[Symptom::Cough, Symptom::Fatigue],
            any_of: NO_FLAGS,
            forbidden: &[Symptom::Fever],
        },
    },
    Rule {
        id: "common-cold",
        disease: "Possible Common Cold",
        confidence: 60,
        condition: Condition {
            required: &[Symptom::SoreThroat, Symptom::Cough],
            any_of: NO_FLAGS,
            forbidden: &[Symptom::Fever, Symptom::TasteLoss],
        },
    },
    // Cough as the sole significant symptom.
    Rule {
        id: "cough-only",
        disease: "Mild respiratory symptoms - possible minor infection",
        confidence: 30,
        condition: Condition {
            required: &[Symptom::Cough],
            any_of: NO_FLAGS,
            forbidden: &[
                Symptom::Fever,
                Symptom::Fatigue,
                Symptom::BreathingDifficulty,
                Symptom::TasteLoss,
                Symptom::SoreThroat,
            ],
        },
    },
    // Fever as the sole significant symptom.
    Rule {
        id: "fever-only",
        disease: "Fever present - monitor for additional symptoms",
        confidence: 35,
        condition: Condition {
            required: &[Symptom::Fever],
            any_of: NO_FLAGS,
            forbidden: &[
                Symptom::Cough,
                Symptom::Fatigue,
                Symptom::BreathingDifficulty,
                Symptom::TasteLoss,
                Symptom::SoreThroat,
            ],
        },
    },
    // The one non-conjunctive rule: headache OR muscle aches, with the
    // key COVID flags all absent.
    Rule {
        id: "single-symptom-general",
        disease: "Minor symptoms - likely common illness",
        confidence: 25,
        condition: Condition {
            required: NO_FLAGS,
            any_of: &[Symptom::Headache, Symptom::MuscleAches],
            forbidden: &[
                Symptom::Fever,
                Symptom::Cough,
                Symptom::BreathingDifficulty,
                Symptom::TasteLoss,
            ],
        },
    },
    Rule {
        id: "no-symptoms",
        disease: "No significant illness detected",
        confidence: 95,
        condition: Condition {
            required: NO_FLAGS,
            any_of: NO_FLAGS,
            forbidden: &Symptom::ALL,
        },
    },
];

/// The validated rule table, immutable after first access.
///
/// Validation runs exactly once; a malformed table is fatal here rather
/// than silently serving wrong diagnoses.
static RULE_TABLE: LazyLock<&'static [Rule]> = LazyLock::new(|| {
    if let Err(err) = validate(&RULES) {
        tracing::error!(%err, "diagnosis rule table failed validation");
        panic!("invalid diagnosis rule table: {err}");
    }
    &RULES
});

/// The shipped rule table, in declaration order.
pub fn table() -> &'static [Rule] {
    *RULE_TABLE
}

/// Run the construction-time checks without touching the validated handle.
/// Lets an embedding host fail cleanly at startup instead of panicking on
/// the first diagnosis request.
pub fn validate_table() -> Result<(), RuleSetError> {
    validate(&RULES)
}

/// Construction-time checks over a rule table.
///
/// Flags are a closed enum, so a rule cannot reference an undefined flag;
/// what remains checkable is internal consistency of each rule.
pub fn validate(rules: &[Rule]) -> Result<(), RuleSetError> {
    for rule in rules {
        if rule.confidence > 100 {
            return Err(RuleSetError::ConfidenceOutOfRange {
                rule: rule.id,
                confidence: rule.confidence,
            });
        }
        if rule.disease.is_empty() {
            return Err(RuleSetError::EmptyLabel { rule: rule.id });
        }
        for flag in rule.condition.required {
            if rule.condition.forbidden.contains(flag) {
                return Err(RuleSetError::ContradictoryFlag {
                    rule: rule.id,
                    flag: flag.name(),
                });
            }
        }
        for flag in rule.condition.any_of {
            if rule.condition.forbidden.contains(flag) {
                return Err(RuleSetError::ExcludedAlternative {
                    rule: rule.id,
                    flag: flag.name(),
                });
            }
        }
    }
    Ok(())
}
