//! Single-pass forward-chaining over the rule table.
//!
//! Every rule depends only on the patient fact, never on another rule's
//! conclusion, so one pass over the table reaches the fixpoint. The loop
//! shape deliberately does not preclude iterating, should chained rules
//! ever appear.

use super::rules::{Condition, Rule};
use super::symptoms::PatientFact;
use super::types::Diagnosis;

/// Evaluate every rule against the fact, in declared order.
///
/// Pure function of its inputs: deterministic, idempotent, no retraction.
/// All matching rules fire; the result may be empty.
pub fn run_rules(fact: &PatientFact, rules: &[Rule]) -> Vec<Diagnosis> {
    let mut results = Vec::new();

    for rule in rules {
        if rule.condition.matches(fact) {
            tracing::debug!(
                rule_id = rule.id,
                confidence = rule.confidence,
                "diagnosis rule fired"
            );
            results.push(Diagnosis {
                disease: rule.disease,
                confidence: rule.confidence,
            });
        }
    }

    results
}

// ── Condition matching ──────────────────────────────────────

impl Condition {
    pub(crate) fn matches(&self, fact: &PatientFact) -> bool {
        let required_hold = self.required.iter().all(|s| fact.is_present(*s));
        let one_alternative_holds =
            self.any_of.is_empty() || self.any_of.iter().any(|s| fact.is_present(*s));
        let excluded_absent = self.forbidden.iter().all(|s| !fact.is_present(*s));

        required_hold && one_alternative_holds && excluded_absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rules;
    use crate::engine::symptoms::Symptom;

    fn fact(present: &[Symptom]) -> PatientFact {
        let phrases: Vec<&str> = present
            .iter()
            .map(|s| match s {
                Symptom::Fever => "fever",
                Symptom::Cough => "cough",
                Symptom::Fatigue => "fatigue",
                Symptom::BreathingDifficulty => "shortness of breath",
                Symptom::TasteLoss => "loss of taste",
                Symptom::Headache => "headache",
                Symptom::MuscleAches => "muscle aches",
                Symptom::SoreThroat => "sore throat",
            })
            .collect();
        PatientFact::from_phrases(&phrases)
    }

    #[test]
    fn all_flags_absent_fires_only_no_symptoms_rule() {
        let results = run_rules(&fact(&[]), rules::table());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].disease, "No significant illness detected");
        assert_eq!(results[0].confidence, 95);
    }

    #[test]
    fn fever_cough_taste_loss_fires_high_probability() {
        let results = run_rules(
            &fact(&[Symptom::Fever, Symptom::Cough, Symptom::TasteLoss]),
            rules::table(),
        );
        let labels: Vec<&str> = results.iter().map(|d| d.disease).collect();
        assert!(labels.contains(&"COVID-19 - High Probability"));
    }

    #[test]
    fn fever_blocks_low_probability_rule() {
        let results = run_rules(
            &fact(&[Symptom::Fever, Symptom::Cough, Symptom::Fatigue]),
            rules::table(),
        );
        let labels: Vec<&str> = results.iter().map(|d| d.disease).collect();
        assert!(!labels.contains(&"COVID-19 - Low Probability"));
    }

    #[test]
    fn or_group_fires_on_either_alternative() {
        for single in [Symptom::Headache, Symptom::MuscleAches] {
            let results = run_rules(&fact(&[single]), rules::table());
            let labels: Vec<&str> = results.iter().map(|d| d.disease).collect();
            assert!(
                labels.contains(&"Minor symptoms - likely common illness"),
                "{} alone should fire the OR-group rule",
                single.name()
            );
        }
    }

    #[test]
    fn or_group_does_not_fire_with_fever_present() {
        let results = run_rules(
            &fact(&[Symptom::Headache, Symptom::Fever]),
            rules::table(),
        );
        let labels: Vec<&str> = results.iter().map(|d| d.disease).collect();
        assert!(!labels.contains(&"Minor symptoms - likely common illness"));
    }

    #[test]
    fn results_preserve_declaration_order() {
        // Sore throat + cough + fatigue: rule 3 (low probability) and
        // rule 4 (common cold) both hold; rule 3 is declared first.
        let results = run_rules(
            &fact(&[Symptom::SoreThroat, Symptom::Cough, Symptom::Fatigue]),
            rules::table(),
        );
        let labels: Vec<&str> = results.iter().map(|d| d.disease).collect();
        assert_eq!(
            labels,
            vec!["COVID-19 - Low Probability", "Possible Common Cold"]
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let f = fact(&[Symptom::Fever, Symptom::BreathingDifficulty]);
        let first = run_rules(&f, rules::table());
        let second = run_rules(&f, rules::table());
        assert_eq!(first, second);
    }

    #[test]
    fn no_rule_matches_yields_empty_result() {
        // Fatigue alone: no rule's condition holds (rule 8 needs all flags
        // absent, rule 3 needs cough).
        let results = run_rules(&fact(&[Symptom::Fatigue]), rules::table());
        assert!(results.is_empty());
    }
}
