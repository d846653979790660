//! Canonical symptom flags and the symptom normalizer.
//!
//! The flag set is closed at design time: adding a symptom means adding a
//! variant here plus whatever rules reference it. Normalization is a coarse
//! case-insensitive substring scan ("head" raising the headache flag is
//! intended behavior, not an oversight).

use serde::Serialize;

/// One of the eight canonical boolean symptom attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Symptom {
    Fever,
    Cough,
    Fatigue,
    BreathingDifficulty,
    TasteLoss,
    Headache,
    MuscleAches,
    SoreThroat,
}

// ── Keyword sets ────────────────────────────────────────────

static FEVER_KEYWORDS: &[&str] = &["fever"];

static COUGH_KEYWORDS: &[&str] = &["cough"];

static FATIGUE_KEYWORDS: &[&str] = &["fatigue", "tired"];

static BREATHING_KEYWORDS: &[&str] = &["breath", "breathing", "shortness"];

static TASTE_LOSS_KEYWORDS: &[&str] = &["taste", "smell"];

static HEADACHE_KEYWORDS: &[&str] = &["headache", "head"];

static MUSCLE_ACHES_KEYWORDS: &[&str] = &["muscle", "body ache", "aches"];

static SORE_THROAT_KEYWORDS: &[&str] = &["sore throat", "throat"];

/// The symptom vocabulary shown to the user as a reference list.
pub const KNOWN_SYMPTOMS: &[&str] = &[
    "fever",
    "cough",
    "fatigue",
    "shortness of breath",
    "loss of taste or smell",
    "headache",
    "muscle aches",
    "sore throat",
    "breathing difficulty",
];

impl Symptom {
    /// Every canonical flag, in declaration order.
    pub const ALL: [Symptom; 8] = [
        Symptom::Fever,
        Symptom::Cough,
        Symptom::Fatigue,
        Symptom::BreathingDifficulty,
        Symptom::TasteLoss,
        Symptom::Headache,
        Symptom::MuscleAches,
        Symptom::SoreThroat,
    ];

    /// Canonical flag name, used in logs and validation errors.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fever => "fever",
            Self::Cough => "cough",
            Self::Fatigue => "fatigue",
            Self::BreathingDifficulty => "breathing-difficulty",
            Self::TasteLoss => "taste-loss",
            Self::Headache => "headache",
            Self::MuscleAches => "muscle-aches",
            Self::SoreThroat => "sore-throat",
        }
    }

    /// Substring keywords that raise this flag during normalization.
    fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Fever => FEVER_KEYWORDS,
            Self::Cough => COUGH_KEYWORDS,
            Self::Fatigue => FATIGUE_KEYWORDS,
            Self::BreathingDifficulty => BREATHING_KEYWORDS,
            Self::TasteLoss => TASTE_LOSS_KEYWORDS,
            Self::Headache => HEADACHE_KEYWORDS,
            Self::MuscleAches => MUSCLE_ACHES_KEYWORDS,
            Self::SoreThroat => SORE_THROAT_KEYWORDS,
        }
    }
}

/// Immutable snapshot of all canonical flags for one diagnostic request.
///
/// Total over the flag set: every flag has a value, defaulting to absent.
/// Built once per request and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatientFact {
    flags: [bool; Symptom::ALL.len()],
}

impl PatientFact {
    /// Normalize raw symptom phrases into a fact.
    ///
    /// A flag is raised when ANY phrase contains ANY of its keywords,
    /// case-insensitively. An empty phrase list yields an all-absent fact.
    pub fn from_phrases<S: AsRef<str>>(phrases: &[S]) -> Self {
        let lowered: Vec<String> = phrases
            .iter()
            .map(|p| p.as_ref().to_lowercase())
            .collect();

        let mut flags = [false; Symptom::ALL.len()];
        for symptom in Symptom::ALL {
            flags[symptom as usize] = symptom
                .keywords()
                .iter()
                .any(|kw| lowered.iter().any(|phrase| phrase.contains(kw)));
        }
        Self { flags }
    }

    /// Whether the given flag was observed for this request.
    pub fn is_present(&self, symptom: Symptom) -> bool {
        self.flags[symptom as usize]
    }
}
