mod attributes;
mod builder;

pub use builder::{build_activities_from_environment, ActivityCandidate};

use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::focus::TherapeuticFocus;
use crate::safety::{classify_element_for_safety, SafetyMetadata};
use crate::semantics::normalize_label;
use attributes::{
    HEIGHT_TABLE, MOTOR_TABLE, RISK_TABLE, SMALL_PLAY_TERMS, STABILITY_TABLE, TEXTURE_TABLE,
};

/// Where the element sits in the room. Assigned by a fixed rotation over the
/// processing order, not inferred from the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Central,
    AgainstWall,
    Corner,
    Edge,
    Open,
}

const POSITION_ROTATION: [Position; 5] = [
    Position::Central,
    Position::AgainstWall,
    Position::Corner,
    Position::Edge,
    Position::Open,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightBand {
    Floor,
    Low,
    Mid,
    Table,
    Elevated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    Stable,
    Mobile,
    Fixed,
}

/// Free room around the element. A property of the scene slot rather than
/// the object: the first two elements are assumed to sit in open space, later
/// ones in progressively tighter corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceRating {
    Spacious,
    Moderate,
    Constrained,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensoryChannel {
    Tactile,
    Visual,
    Vestibular,
    Proprioceptive,
}

/// Fallback affordances when no motor entry matches; guarantees every
/// element supports at least one activity.
pub const DEFAULT_MOTOR_TRIAD: [TherapeuticFocus; 3] = [
    TherapeuticFocus::FineMotor,
    TherapeuticFocus::GrossMotor,
    TherapeuticFocus::BilateralCoordination,
];

const DEFAULT_TEXTURE_AR: &str = "غير محدد";

/// A physical object inferred from one validated label, enriched with
/// spatial attributes, affordances and safety metadata. Request-scoped and
/// read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentElement {
    pub object_label: String,
    pub position: Position,
    pub height: HeightBand,
    pub stability: Stability,
    pub space: SpaceRating,
    pub texture_ar: String,
    pub motor: Vec<TherapeuticFocus>,
    pub sensory: Vec<SensoryChannel>,
    pub risks_ar: Vec<String>,
    pub safety: SafetyMetadata,
}

/// Synthesize one element per validated label: table-driven physical
/// attributes with defaults, slot-ordered space, rotated position, and
/// safety metadata attached at construction. Caps at the element budget and
/// collapses duplicate normalized labels to the first occurrence.
pub fn analyze_environment(labels: &[String], config: &PipelineConfig) -> Vec<EnvironmentElement> {
    let mut seen: Vec<String> = Vec::new();
    let mut elements: Vec<EnvironmentElement> = Vec::new();

    for raw in labels {
        if elements.len() >= config.max_elements {
            break;
        }
        let label = normalize_label(raw);
        if label.is_empty() || seen.contains(&label) {
            continue;
        }
        seen.push(label.clone());

        let index = elements.len();
        let height = lookup_height(&label);
        let stability = lookup(&label, STABILITY_TABLE).unwrap_or(Stability::Stable);
        let texture_ar = lookup(&label, TEXTURE_TABLE)
            .unwrap_or(DEFAULT_TEXTURE_AR)
            .to_string();
        let motor = lookup(&label, MOTOR_TABLE)
            .map(|focuses| focuses.to_vec())
            .unwrap_or_else(|| DEFAULT_MOTOR_TRIAD.to_vec());
        let risks_ar: Vec<String> = RISK_TABLE
            .iter()
            .filter(|(term, _)| label.contains(term))
            .map(|(_, risk)| (*risk).to_string())
            .collect();

        let mut sensory = vec![SensoryChannel::Tactile, SensoryChannel::Visual];
        if height == HeightBand::Elevated || label.contains("stairs") || label.contains("step") {
            sensory.push(SensoryChannel::Vestibular);
            sensory.push(SensoryChannel::Proprioceptive);
        }

        let space = match index {
            0 | 1 => SpaceRating::Spacious,
            2 | 3 => SpaceRating::Moderate,
            _ => SpaceRating::Constrained,
        };

        let safety = classify_element_for_safety(&label, height, stability);

        elements.push(EnvironmentElement {
            object_label: label,
            position: POSITION_ROTATION[index % POSITION_ROTATION.len()],
            height,
            stability,
            space,
            texture_ar,
            motor,
            sensory,
            risks_ar,
            safety,
        });
    }

    elements
}

fn lookup_height(label: &str) -> HeightBand {
    if let Some(height) = lookup(label, HEIGHT_TABLE) {
        return height;
    }
    if SMALL_PLAY_TERMS.iter().any(|term| label.contains(term)) {
        return HeightBand::Floor;
    }
    HeightBand::Mid
}

fn lookup<T: Copy>(label: &str, table: &[(&str, T)]) -> Option<T> {
    table
        .iter()
        .filter(|(term, _)| label.contains(term))
        .max_by_key(|(term, _)| term.len())
        .map(|(_, value)| *value)
}
