//! Display-string rendering for diagnosis results.
//!
//! Purely presentational: never reorders or drops results.

use super::types::Diagnosis;

/// Returned when zero rules matched the derived fact.
pub const NO_DIAGNOSIS: &str = "Unable to determine diagnosis - please check symptoms";

/// Render each result as `"<disease> (Confidence: <confidence>%)"`, or the
/// fallback line when nothing matched.
pub fn format_diagnoses(diagnoses: &[Diagnosis]) -> Vec<String> {
    if diagnoses.is_empty() {
        return vec![NO_DIAGNOSIS.to_string()];
    }

    diagnoses
        .iter()
        .map(|d| format!("{} (Confidence: {}%)", d.disease, d.confidence))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_disease_and_confidence() {
        let out = format_diagnoses(&[Diagnosis {
            disease: "COVID-19 - High Probability",
            confidence: 90,
        }]);
        assert_eq!(out, vec!["COVID-19 - High Probability (Confidence: 90%)"]);
    }

    #[test]
    fn empty_results_yield_exactly_the_fallback() {
        assert_eq!(format_diagnoses(&[]), vec![NO_DIAGNOSIS.to_string()]);
    }

    #[test]
    fn preserves_result_order() {
        let out = format_diagnoses(&[
            Diagnosis { disease: "A", confidence: 10 },
            Diagnosis { disease: "B", confidence: 20 },
        ]);
        assert_eq!(out, vec!["A (Confidence: 10%)", "B (Confidence: 20%)"]);
    }
}
