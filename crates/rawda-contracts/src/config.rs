use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Who the rendered suggestions are written for. Only the downstream
/// formatter branches on this; the pipeline itself is audience-neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Parent,
    Therapist,
}

impl Audience {
    pub fn as_str(self) -> &'static str {
        match self {
            Audience::Parent => "parent",
            Audience::Therapist => "therapist",
        }
    }

    pub fn parse(raw: &str) -> Option<Audience> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "parent" => Some(Audience::Parent),
            "therapist" => Some(Audience::Therapist),
            _ => None,
        }
    }
}

/// Age breakpoints shared across feasibility banding and content selection.
pub const AGE_TODDLER_MAX: u8 = 3;
pub const AGE_PRESCHOOL_MAX: u8 = 4;
pub const AGE_SCHOOL_MIN: u8 = 5;
pub const AGE_SCHOOL_MAX: u8 = 7;
pub const AGE_INDEPENDENT_MIN: u8 = 8;
pub const AGE_ADVANCED_MIN: u8 = 11;

/// Tunable knobs for the detection → activities pipeline. Defaults match the
/// production deployment; `from_settings` accepts the same loose JSON
/// settings object the engine is driven with.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Detections at or above this survive the first filter pass.
    pub confidence_threshold: f64,
    /// Backfill never reaches below this when topping up to `min_detections`.
    pub low_confidence_floor: f64,
    pub min_detections: usize,
    pub max_detections: usize,
    /// Reasoned elements below this are discarded outright.
    pub reasoner_min_confidence: f64,
    /// Stricter re-check applied by the element validator.
    pub validator_min_confidence: f64,
    pub max_elements: usize,
    pub target_activities: usize,
    pub min_activities: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.25,
            low_confidence_floor: 0.18,
            min_detections: 3,
            max_detections: 50,
            reasoner_min_confidence: 0.35,
            validator_min_confidence: 0.4,
            max_elements: 5,
            target_activities: 5,
            min_activities: 3,
        }
    }
}

impl PipelineConfig {
    pub fn from_settings(settings: &Map<String, Value>) -> Self {
        let defaults = Self::default();
        Self {
            confidence_threshold: settings_f64(
                settings,
                "confidence_threshold",
                defaults.confidence_threshold,
            ),
            low_confidence_floor: settings_f64(
                settings,
                "low_confidence_floor",
                defaults.low_confidence_floor,
            ),
            min_detections: settings_usize(settings, "min_detections", defaults.min_detections),
            max_detections: settings_usize(settings, "max_detections", defaults.max_detections),
            reasoner_min_confidence: settings_f64(
                settings,
                "reasoner_min_confidence",
                defaults.reasoner_min_confidence,
            ),
            validator_min_confidence: settings_f64(
                settings,
                "validator_min_confidence",
                defaults.validator_min_confidence,
            ),
            max_elements: settings_usize(settings, "max_elements", defaults.max_elements),
            target_activities: settings_usize(
                settings,
                "target_activities",
                defaults.target_activities,
            ),
            min_activities: settings_usize(settings, "min_activities", defaults.min_activities),
        }
    }
}

fn settings_f64(settings: &Map<String, Value>, key: &str, default: f64) -> f64 {
    settings
        .get(key)
        .and_then(Value::as_f64)
        .filter(|value| value.is_finite() && (0.0..=1.0).contains(value))
        .unwrap_or(default)
}

fn settings_usize(settings: &Map<String, Value>, key: &str, default: usize) -> usize {
    settings
        .get(key)
        .and_then(Value::as_u64)
        .map(|value| value as usize)
        .filter(|value| *value > 0)
        .unwrap_or(default)
}
