use serde::{Deserialize, Serialize};

use crate::environment::{ActivityCandidate, EnvironmentElement, SpaceRating};
use crate::focus::{TherapeuticFocus, EARLY_CHILDHOOD_PREFERRED};

/// A safety-validated candidate carrying the deterministic seeds the
/// downstream formatter uses to pick stable text variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinedActivity {
    pub object_label: String,
    pub focus: TherapeuticFocus,
    pub element: EnvironmentElement,
    pub specific_skill_seed: u64,
    pub humanize_offset: u64,
}

/// Final adjustment pass: swap focuses that cannot work in the element's
/// space, soften cognitive load for children under four, attach the variant
/// seeds, and reorder once for category/demand diversity. Only substitutes
/// and reorders; the output length always equals the input length.
pub fn refine_activities(candidates: Vec<ActivityCandidate>, age: u8) -> Vec<RefinedActivity> {
    let mut refined: Vec<RefinedActivity> = candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| {
            let mut focus = candidate.focus;

            // Restricted elements keep their non-contact focus.
            if candidate.element.space == SpaceRating::Constrained
                && focus.needs_open_space()
                && !candidate.element.safety.use_safe_alternatives_only
            {
                if let Some(substitute) = candidate
                    .element
                    .motor
                    .iter()
                    .find(|option| !option.needs_open_space())
                {
                    focus = *substitute;
                }
            }

            if age < 4 && focus.cognitively_demanding() {
                if let Some(substitute) = EARLY_CHILDHOOD_PREFERRED
                    .iter()
                    .find(|preferred| candidate.element.motor.contains(*preferred))
                    .or_else(|| {
                        candidate
                            .element
                            .motor
                            .iter()
                            .find(|option| !option.cognitively_demanding())
                    })
                {
                    focus = *substitute;
                }
            }

            let label_length = candidate.object_label.chars().count() as u64;
            let focus_length = focus.as_str().len() as u64;
            RefinedActivity {
                specific_skill_seed: index as u64 + u64::from(age) + label_length % 5,
                humanize_offset: (index as u64 * 7 + focus_length) % 3,
                object_label: candidate.object_label,
                focus,
                element: candidate.element,
            }
        })
        .collect();

    enforce_diversity_order(&mut refined);
    refined
}

/// Reorder so no two consecutive activities share both coarse category and
/// demand tag: repeatedly take the next item that breaks similarity with the
/// last placed one, falling back to the first remaining item when none
/// differs.
pub fn enforce_diversity_order(activities: &mut Vec<RefinedActivity>) {
    if activities.len() < 2 {
        return;
    }

    let mut remaining = std::mem::take(activities);
    let mut ordered: Vec<RefinedActivity> = vec![remaining.remove(0)];

    while !remaining.is_empty() {
        let last = ordered.last().map(|activity| activity.focus);
        let position = remaining
            .iter()
            .position(|activity| match last {
                Some(previous) => {
                    activity.focus.category() != previous.category()
                        || activity.focus.demand() != previous.demand()
                }
                None => true,
            })
            .unwrap_or(0);
        ordered.push(remaining.remove(position));
    }

    *activities = ordered;
}

#[cfg(test)]
mod tests {
    use crate::config::PipelineConfig;
    use crate::environment::{analyze_environment, ActivityCandidate};
    use crate::focus::TherapeuticFocus;

    use super::{enforce_diversity_order, refine_activities};

    fn candidates(pairs: &[(&str, TherapeuticFocus)]) -> Vec<ActivityCandidate> {
        let labels: Vec<String> = pairs.iter().map(|(label, _)| label.to_string()).collect();
        let elements = analyze_environment(&labels, &PipelineConfig::default());
        pairs
            .iter()
            .map(|(label, focus)| {
                let element = elements
                    .iter()
                    .find(|element| element.object_label == *label)
                    .expect("element for label")
                    .clone();
                ActivityCandidate {
                    object_label: label.to_string(),
                    focus: *focus,
                    element,
                }
            })
            .collect()
    }

    #[test]
    fn seeds_are_deterministic_functions_of_index_age_and_names() {
        let input = candidates(&[
            ("ball", TherapeuticFocus::GrossMotor),
            ("puzzle", TherapeuticFocus::FineMotor),
        ]);
        let first = refine_activities(input.clone(), 5);
        let second = refine_activities(input, 5);
        assert_eq!(first, second);

        let ball = first
            .iter()
            .find(|activity| activity.object_label == "ball")
            .expect("ball activity");
        // index 0, age 5, "ball" length 4: 0 + 5 + 4 % 5 = 9.
        assert_eq!(ball.specific_skill_seed, 9);
        // index 0, "gross_motor" length 11: (0 * 7 + 11) % 3 = 2.
        assert_eq!(ball.humanize_offset, 2);
    }

    #[test]
    fn constrained_space_swaps_open_space_focus() {
        // Five labels so the last element lands in a constrained slot.
        let pairs = [
            ("sofa", TherapeuticFocus::SensoryRegulation),
            ("table", TherapeuticFocus::FineMotor),
            ("puzzle", TherapeuticFocus::ExecutiveFunction),
            ("cup", TherapeuticFocus::FineMotor),
            ("basket", TherapeuticFocus::GrossMotor),
        ];
        let refined = refine_activities(candidates(&pairs), 6);
        let basket = refined
            .iter()
            .find(|activity| activity.object_label == "basket")
            .expect("basket activity");
        assert!(!basket.focus.needs_open_space());
        assert!(basket.element.motor.contains(&basket.focus));
    }

    #[test]
    fn toddlers_lose_cognitively_demanding_focuses() {
        let input = candidates(&[("puzzle", TherapeuticFocus::ExecutiveFunction)]);
        let refined = refine_activities(input, 3);
        assert_eq!(refined[0].focus, TherapeuticFocus::FineMotor);
    }

    #[test]
    fn older_children_keep_executive_work() {
        let input = candidates(&[("puzzle", TherapeuticFocus::ExecutiveFunction)]);
        let refined = refine_activities(input, 6);
        assert_eq!(refined[0].focus, TherapeuticFocus::ExecutiveFunction);
    }

    #[test]
    fn diversity_order_breaks_up_same_category_runs() {
        let input = candidates(&[
            ("crayon", TherapeuticFocus::FineMotor),
            ("bead", TherapeuticFocus::FineMotor),
            ("cushion", TherapeuticFocus::SensoryRegulation),
        ]);
        let refined = refine_activities(input, 6);
        assert_eq!(refined.len(), 3);
        for pair in refined.windows(2) {
            let same_category = pair[0].focus.category() == pair[1].focus.category();
            let same_demand = pair[0].focus.demand() == pair[1].focus.demand();
            assert!(!(same_category && same_demand));
        }
    }

    #[test]
    fn refinement_preserves_length_even_when_nothing_differs() {
        let mut identical = refine_activities(
            candidates(&[
                ("crayon", TherapeuticFocus::FineMotor),
                ("bead", TherapeuticFocus::FineMotor),
            ]),
            6,
        );
        enforce_diversity_order(&mut identical);
        assert_eq!(identical.len(), 2);
    }

    #[test]
    fn empty_input_refines_to_empty_output() {
        assert!(refine_activities(Vec::new(), 4).is_empty());
    }
}
