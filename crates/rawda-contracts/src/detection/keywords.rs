//! Keyword sets consumed by the detection filter. Matching is against the
//! lowercased label, whole-label or word-by-word: "person, individual" must
//! match "person" while "ottoman" must not match "man".

/// People and body parts. Detections matching any of these are dropped before
/// anything else looks at them.
pub(crate) const PERSON_TERMS: &[&str] = &[
    "person",
    "people",
    "human",
    "man",
    "woman",
    "boy",
    "girl",
    "child",
    "baby",
    "infant",
    "toddler",
    "kid",
    "lady",
    "face",
    "head",
    "hair",
    "eye",
    "mouth",
    "hand",
    "finger",
    "arm",
    "leg",
    "foot",
    "feet",
    "knee",
    "skin",
    "body",
];

/// Labels too generic to say anything about the scene.
pub(crate) const GENERIC_TERMS: &[&str] = &[
    "object",
    "entity",
    "thing",
    "item",
    "stuff",
    "artifact",
    "artefact",
    "material",
    "substance",
    "matter",
    "abstraction",
    "whole",
    "part",
    "shape",
    "pattern",
];

pub(crate) fn matches_any(label: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| {
        label == *term
            || label
                .split(|ch: char| !ch.is_ascii_alphanumeric())
                .any(|word| word == *term)
    })
}
