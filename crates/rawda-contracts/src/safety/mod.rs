mod feasibility;
mod validator;

pub use feasibility::{age_feasibility, is_activity_safe, AgeFeasibility};
pub use validator::validate_activity_safety;

use serde::{Deserialize, Serialize};

use crate::environment::{HeightBand, Stability};

/// Physical-safety class of an element. An element may hold several at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectSafetyClass {
    FixedHeavyFurniture,
    LargeMovable,
    SmallManipulable,
    ElevatedUnstable,
    FloorSafe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForbiddenAction {
    Lift,
    Drag,
    Push,
    HighForce,
    ClimbUnstable,
    JumpFromHeight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafeActionHint {
    CrawlAround,
    NavigateBetween,
    ReachOver,
    UseCushionsOrFloor,
    SupportedWeightBearing,
}

impl SafeActionHint {
    /// Non-contact phrasing handed to the formatter.
    pub fn phrase_ar(self) -> &'static str {
        match self {
            SafeActionHint::CrawlAround => "الزحف حوله",
            SafeActionHint::NavigateBetween => "التنقل بين القطع",
            SafeActionHint::ReachOver => "مد الذراعين فوقه دون دفعه",
            SafeActionHint::UseCushionsOrFloor => "استخدام الوسائد أو الأرضية بجانبه",
            SafeActionHint::SupportedWeightBearing => "الاستناد إليه بثبات تحت الإشراف",
        }
    }
}

/// Safety verdict attached to every environment element. Computed once at
/// element construction, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyMetadata {
    pub classes: Vec<ObjectSafetyClass>,
    pub forbidden_actions: Vec<ForbiddenAction>,
    pub safe_action_hints: Vec<SafeActionHint>,
    /// The single gate the rest of the pipeline checks before describing any
    /// action on the element.
    pub use_safe_alternatives_only: bool,
}

const FIXED_HEAVY_TERMS: &[&str] = &[
    "sofa",
    "couch",
    "armchair",
    "bed",
    "crib",
    "wardrobe",
    "dresser",
    "cabinet",
    "cupboard",
    "bookcase",
    "bookshelf",
    "dining table",
    "desk",
    "refrigerator",
    "washing machine",
    "piano",
    "television",
];

const LARGE_MOVABLE_TERMS: &[&str] = &[
    "bench",
    "ottoman",
    "mattress",
    "coffee table",
    "table",
    "chair",
];

const SMALL_MANIPULABLE_TERMS: &[&str] = &[
    "ball",
    "balloon",
    "toy",
    "doll",
    "teddy",
    "block",
    "cube",
    "puzzle",
    "bead",
    "book",
    "crayon",
    "pencil",
    "marker",
    "brush",
    "cup",
    "bottle",
    "bowl",
    "spoon",
    "tray",
    "basket",
    "box",
    "bucket",
    "cushion",
    "pillow",
    "blanket",
    "towel",
    "drum",
    "tambourine",
];

const ELEVATED_UNSTABLE_TERMS: &[&str] = &[
    "stairs",
    "staircase",
    "step",
    "ladder",
    "stool",
    "shelf",
    "counter",
    "window",
    "swing",
    "slide",
    "bunk",
];

const FLOOR_SAFE_TERMS: &[&str] = &["carpet", "rug", "mat", "floor", "ball", "blanket"];

const HEAVY_FORBIDDEN: [ForbiddenAction; 4] = [
    ForbiddenAction::Lift,
    ForbiddenAction::Drag,
    ForbiddenAction::Push,
    ForbiddenAction::HighForce,
];

const HEAVY_HINTS: [SafeActionHint; 5] = [
    SafeActionHint::CrawlAround,
    SafeActionHint::NavigateBetween,
    SafeActionHint::ReachOver,
    SafeActionHint::UseCushionsOrFloor,
    SafeActionHint::SupportedWeightBearing,
];

/// Pure function of (label, height, stability). The same element always
/// yields the same metadata.
pub fn classify_element_for_safety(
    label: &str,
    height: HeightBand,
    stability: Stability,
) -> SafetyMetadata {
    let label = label.trim().to_lowercase();
    let mut classes: Vec<ObjectSafetyClass> = Vec::new();
    let mut forbidden: Vec<ForbiddenAction> = Vec::new();
    let mut hints: Vec<SafeActionHint> = Vec::new();

    let heavy = matches_any(&label, FIXED_HEAVY_TERMS) || stability == Stability::Fixed;
    if heavy {
        classes.push(ObjectSafetyClass::FixedHeavyFurniture);
        forbidden.extend(HEAVY_FORBIDDEN);
        hints.extend(HEAVY_HINTS);
    }

    if !heavy && matches_any(&label, LARGE_MOVABLE_TERMS) {
        // Children must never be directed to lift or drag these either.
        classes.push(ObjectSafetyClass::LargeMovable);
        forbidden.extend(HEAVY_FORBIDDEN);
        hints.extend(HEAVY_HINTS);
    }

    if matches_any(&label, SMALL_MANIPULABLE_TERMS) {
        classes.push(ObjectSafetyClass::SmallManipulable);
    }

    if height == HeightBand::Elevated || matches_any(&label, ELEVATED_UNSTABLE_TERMS) {
        classes.push(ObjectSafetyClass::ElevatedUnstable);
        forbidden.push(ForbiddenAction::ClimbUnstable);
        forbidden.push(ForbiddenAction::JumpFromHeight);
    }

    if height == HeightBand::Floor || matches_any(&label, FLOOR_SAFE_TERMS) {
        classes.push(ObjectSafetyClass::FloorSafe);
    }

    if classes.is_empty() {
        classes.push(ObjectSafetyClass::SmallManipulable);
    }

    let use_safe_alternatives_only = classes.contains(&ObjectSafetyClass::FixedHeavyFurniture)
        || classes.contains(&ObjectSafetyClass::LargeMovable);

    SafetyMetadata {
        classes,
        forbidden_actions: forbidden,
        safe_action_hints: hints,
        use_safe_alternatives_only,
    }
}

fn matches_any(label: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| label == *term || label.contains(term))
}
