use std::collections::HashSet;

use crate::environment::{ActivityCandidate, EnvironmentElement};
use crate::focus::{TherapeuticFocus, SAFE_ALTERNATIVE_FOCUSES};

use super::feasibility::is_activity_safe;

/// Re-check every candidate against age-adjusted feasibility and its
/// element's safety class. Unsafe candidates are replaced in three tiers:
/// same element with a safer focus, a different unrestricted element with
/// the original focus, and finally the original pairing unchanged — in that
/// last case the formatter owns safety through safe-alternative phrasing.
/// The output always has the same length as the input.
pub fn validate_activity_safety(
    candidates: Vec<ActivityCandidate>,
    elements: &[EnvironmentElement],
    age: u8,
) -> Vec<ActivityCandidate> {
    let mut used_pairs: HashSet<(String, TherapeuticFocus)> = candidates
        .iter()
        .map(|candidate| (candidate.object_label.clone(), candidate.focus))
        .collect();

    candidates
        .into_iter()
        .map(|candidate| {
            if is_activity_safe(candidate.focus, &candidate.element, age) {
                return candidate;
            }
            if let Some(replacement) = replace_focus(&candidate, age, &mut used_pairs) {
                return replacement;
            }
            if let Some(replacement) = replace_element(&candidate, elements, age, &mut used_pairs) {
                return replacement;
            }
            candidate
        })
        .collect()
}

/// Tier one: keep the element, swap the focus. Restricted elements may only
/// receive the non-contact focuses; everything else draws from the element's
/// own affordances.
fn replace_focus(
    candidate: &ActivityCandidate,
    age: u8,
    used_pairs: &mut HashSet<(String, TherapeuticFocus)>,
) -> Option<ActivityCandidate> {
    let element = &candidate.element;
    let pool: Vec<TherapeuticFocus> = if element.safety.use_safe_alternatives_only {
        SAFE_ALTERNATIVE_FOCUSES.to_vec()
    } else {
        element.motor.clone()
    };

    for focus in pool {
        if focus == candidate.focus {
            continue;
        }
        if element.safety.use_safe_alternatives_only && focus.implies_object_force() {
            continue;
        }
        let key = (candidate.object_label.clone(), focus);
        if used_pairs.contains(&key) {
            continue;
        }
        if !is_activity_safe(focus, element, age) {
            continue;
        }
        used_pairs.insert(key);
        return Some(ActivityCandidate {
            object_label: candidate.object_label.clone(),
            focus,
            element: element.clone(),
        });
    }
    None
}

/// Tier two: keep the focus, move it onto an unrestricted element.
fn replace_element(
    candidate: &ActivityCandidate,
    elements: &[EnvironmentElement],
    age: u8,
    used_pairs: &mut HashSet<(String, TherapeuticFocus)>,
) -> Option<ActivityCandidate> {
    for element in elements {
        if element.object_label == candidate.object_label
            || element.safety.use_safe_alternatives_only
        {
            continue;
        }
        let key = (element.object_label.clone(), candidate.focus);
        if used_pairs.contains(&key) {
            continue;
        }
        if !is_activity_safe(candidate.focus, element, age) {
            continue;
        }
        used_pairs.insert(key);
        return Some(ActivityCandidate {
            object_label: element.object_label.clone(),
            focus: candidate.focus,
            element: element.clone(),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use crate::config::PipelineConfig;
    use crate::environment::{analyze_environment, ActivityCandidate, EnvironmentElement};
    use crate::focus::TherapeuticFocus;

    use super::validate_activity_safety;

    fn elements(labels: &[&str]) -> Vec<EnvironmentElement> {
        let labels: Vec<String> = labels.iter().map(|label| label.to_string()).collect();
        analyze_environment(&labels, &PipelineConfig::default())
    }

    fn candidate(element: &EnvironmentElement, focus: TherapeuticFocus) -> ActivityCandidate {
        ActivityCandidate {
            object_label: element.object_label.clone(),
            focus,
            element: element.clone(),
        }
    }

    #[test]
    fn safe_candidates_pass_through_untouched() {
        let elements = elements(&["ball"]);
        let input = vec![candidate(&elements[0], TherapeuticFocus::GrossMotor)];
        let output = validate_activity_safety(input.clone(), &elements, 5);
        assert_eq!(output, input);
    }

    #[test]
    fn heavy_element_gets_a_non_contact_focus() {
        let elements = elements(&["sofa"]);
        let input = vec![candidate(&elements[0], TherapeuticFocus::FineMotor)];
        let output = validate_activity_safety(input, &elements, 5);
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].object_label, "sofa");
        assert!(matches!(
            output[0].focus,
            TherapeuticFocus::SensoryRegulation | TherapeuticFocus::GrossMotor
        ));
    }

    #[test]
    fn toddler_stairs_climb_is_replaced_with_sensory_work() {
        let elements = elements(&["stairs"]);
        let input = vec![candidate(&elements[0], TherapeuticFocus::GrossMotor)];
        let output = validate_activity_safety(input, &elements, 2);
        assert_eq!(output[0].object_label, "stairs");
        assert_eq!(output[0].focus, TherapeuticFocus::SensoryRegulation);
    }

    #[test]
    fn falls_back_to_a_different_element_when_focus_swap_is_exhausted() {
        let elements = elements(&["sofa", "puzzle"]);
        // Occupy both safe focuses on the sofa so tier one has nothing left.
        let input = vec![
            candidate(&elements[0], TherapeuticFocus::SensoryRegulation),
            candidate(&elements[0], TherapeuticFocus::GrossMotor),
            candidate(&elements[0], TherapeuticFocus::FineMotor),
        ];
        let output = validate_activity_safety(input, &elements, 5);
        assert_eq!(output.len(), 3);
        assert_eq!(output[2].object_label, "puzzle");
        assert_eq!(output[2].focus, TherapeuticFocus::FineMotor);
    }

    #[test]
    fn keeps_the_original_pairing_when_no_replacement_exists() {
        let elements = elements(&["sofa", "wardrobe"]);
        let input = vec![
            candidate(&elements[0], TherapeuticFocus::SensoryRegulation),
            candidate(&elements[0], TherapeuticFocus::GrossMotor),
            candidate(&elements[0], TherapeuticFocus::FineMotor),
        ];
        // Only heavy elements available: tier two has no unrestricted target,
        // so the unsafe pairing survives for the formatter to phrase safely.
        let output = validate_activity_safety(input, &elements, 5);
        assert_eq!(output.len(), 3);
        assert_eq!(output[2].object_label, "sofa");
        assert_eq!(output[2].focus, TherapeuticFocus::FineMotor);
        assert!(output[2].element.safety.use_safe_alternatives_only);
    }

    #[test]
    fn output_length_always_matches_input_length() {
        let elements = elements(&["sofa", "stairs", "ball"]);
        let input = vec![
            candidate(&elements[0], TherapeuticFocus::ExecutiveFunction),
            candidate(&elements[1], TherapeuticFocus::GrossMotor),
            candidate(&elements[2], TherapeuticFocus::BilateralCoordination),
        ];
        let output = validate_activity_safety(input, &elements, 2);
        assert_eq!(output.len(), 3);
    }
}
