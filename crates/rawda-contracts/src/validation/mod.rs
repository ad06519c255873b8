mod wordlists;

use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::semantics::{sort_by_interaction_priority, ReasonedElement};
use wordlists::{AGE_GATED_TERMS, ALLOWED_PATTERNS, BLOCKED_PATTERNS};

/// Labels that survived validation, plus the matching reasoned subset in the
/// same final order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedElements {
    pub labels: Vec<String>,
    pub elements: Vec<ReasonedElement>,
}

impl ValidatedElements {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Second gate over the reasoned set: blocklist (overrides the reasoner),
/// allowlist, age-gated exclusions, stricter confidence floor, then re-sort
/// by interaction priority and cap at the element budget.
pub fn validate_detected_elements(
    reasoned: &[ReasonedElement],
    age: u8,
    config: &PipelineConfig,
) -> ValidatedElements {
    let mut surviving: Vec<ReasonedElement> = reasoned
        .iter()
        .filter(|element| {
            let label = element.raw_label.as_str();
            if matches_any(label, BLOCKED_PATTERNS) {
                return false;
            }
            if !matches_any(label, ALLOWED_PATTERNS) {
                return false;
            }
            if AGE_GATED_TERMS
                .iter()
                .any(|(term, min_age)| label.contains(term) && age < *min_age)
            {
                return false;
            }
            element.confidence >= config.validator_min_confidence
        })
        .cloned()
        .collect();

    sort_by_interaction_priority(&mut surviving);
    surviving.truncate(config.max_elements);

    ValidatedElements {
        labels: surviving
            .iter()
            .map(|element| element.raw_label.clone())
            .collect(),
        elements: surviving,
    }
}

fn matches_any(label: &str, patterns: &[&str]) -> bool {
    patterns
        .iter()
        .any(|pattern| label == *pattern || label.contains(pattern))
}

#[cfg(test)]
mod tests {
    use crate::config::PipelineConfig;
    use crate::detection::RawDetection;
    use crate::semantics::reason_about_detections;

    use super::validate_detected_elements;

    fn reasoned(labels: &[(&str, f64)]) -> Vec<crate::semantics::ReasonedElement> {
        let detections: Vec<RawDetection> = labels
            .iter()
            .map(|(label, probability)| RawDetection::new(*label, *probability))
            .collect();
        reason_about_detections(&detections, &PipelineConfig::default())
    }

    #[test]
    fn blocklist_overrides_a_reasoned_element() {
        let config = PipelineConfig::default();
        // "menu" never survives the reasoner, but a curated label that also
        // matches a blocked pattern must still be excluded here.
        let elements = reasoned(&[("table knife", 0.9), ("sofa", 0.9)]);
        let validated = validate_detected_elements(&elements, 5, &config);
        assert_eq!(validated.labels, vec!["sofa"]);
    }

    #[test]
    fn allowlist_is_required() {
        let config = PipelineConfig::default();
        // Hedge-named unknowns pass the reasoner but fail the allowlist.
        let elements = reasoned(&[("doohickey", 0.9), ("ball", 0.9)]);
        let validated = validate_detected_elements(&elements, 5, &config);
        assert_eq!(validated.labels, vec!["ball"]);
    }

    #[test]
    fn scissors_are_age_gated_below_three() {
        let config = PipelineConfig::default();
        let elements = reasoned(&[("scissors", 0.9), ("ball", 0.9)]);

        let toddler = validate_detected_elements(&elements, 2, &config);
        assert_eq!(toddler.labels, vec!["ball"]);

        let school_age = validate_detected_elements(&elements, 5, &config);
        assert!(school_age.labels.contains(&"scissors".to_string()));
    }

    #[test]
    fn confidence_recheck_uses_the_stricter_floor() {
        let config = PipelineConfig::default();
        // window at 0.35 blends to 0.37: past the reasoner's 0.35 floor but
        // under the validator's 0.4.
        let elements = reasoned(&[("window", 0.35), ("ball", 0.9)]);
        assert_eq!(elements.len(), 2);
        let validated = validate_detected_elements(&elements, 5, &config);
        assert_eq!(validated.labels, vec!["ball"]);
    }

    #[test]
    fn output_is_capped_and_priority_ordered() {
        let config = PipelineConfig::default();
        let elements = reasoned(&[
            ("wall", 0.95),
            ("ball", 0.9),
            ("sofa", 0.85),
            ("puzzle", 0.8),
            ("carpet", 0.75),
            ("basket", 0.7),
            ("door", 0.9),
        ]);
        let validated = validate_detected_elements(&elements, 6, &config);
        assert_eq!(validated.labels.len(), 5);
        assert_eq!(validated.labels[0], "ball");
        assert!(!validated.labels.contains(&"wall".to_string()));
        assert_eq!(validated.labels, validated
            .elements
            .iter()
            .map(|element| element.raw_label.clone())
            .collect::<Vec<String>>());
    }

    #[test]
    fn empty_input_stays_empty() {
        let config = PipelineConfig::default();
        let validated = validate_detected_elements(&[], 5, &config);
        assert!(validated.is_empty());
    }
}
