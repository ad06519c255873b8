use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::RngCore;

use serde::{Deserialize, Serialize};

use crate::focus::{TherapeuticFocus, DIVERSITY_PRIORITY};

use super::EnvironmentElement;

/// A proposed (element, focus) pairing, before safety validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityCandidate {
    pub object_label: String,
    pub focus: TherapeuticFocus,
    pub element: EnvironmentElement,
}

/// Pair elements with focuses into a diverse candidate set. The focus order
/// and element order are shuffled through the injected source so otherwise
/// identical scenes do not always lead with the same suggestion; the shuffle
/// affects variety only, never which pairings are legal. Greedy selection
/// spreads distinct focuses across elements first, then relaxes to any
/// unused focus, then permits focus reuse on a different element. No
/// duplicate (label, focus) pair is ever produced.
pub fn build_activities_from_environment(
    elements: &[EnvironmentElement],
    target: usize,
    rng: &mut dyn RngCore,
) -> Vec<ActivityCandidate> {
    if elements.is_empty() {
        return Vec::new();
    }

    let mut preferred: Vec<TherapeuticFocus> = DIVERSITY_PRIORITY.to_vec();
    preferred.shuffle(rng);
    let mut order: Vec<usize> = (0..elements.len()).collect();
    order.shuffle(rng);

    let ceiling = 5usize
        .min(elements.len() * 2)
        .min(TherapeuticFocus::ALL.len());
    let goal = target.max(3).min(ceiling);

    let mut used_pairs: HashSet<(String, TherapeuticFocus)> = HashSet::new();
    let mut used_focuses: HashSet<TherapeuticFocus> = HashSet::new();
    let mut picked: Vec<ActivityCandidate> = Vec::new();
    let mut cursor = 0usize;

    while picked.len() < goal {
        let next = pick_fresh_focus(elements, &order, &preferred, &used_pairs, &used_focuses, cursor)
            .or_else(|| {
                pick_any_unused_focus(elements, &order, &preferred, &used_pairs, &used_focuses)
            })
            .or_else(|| pick_reused_focus(elements, &order, &preferred, &used_pairs));
        let Some((slot, element_index, focus)) = next else {
            break;
        };

        let element = &elements[element_index];
        used_pairs.insert((element.object_label.clone(), focus));
        used_focuses.insert(focus);
        cursor = slot + 1;
        picked.push(ActivityCandidate {
            object_label: element.object_label.clone(),
            focus,
            element: element.clone(),
        });
    }

    picked
}

/// Rotate through the elements, taking each one's first still-unused
/// preferred focus. Keeps early slots spread across both elements and
/// focuses.
fn pick_fresh_focus(
    elements: &[EnvironmentElement],
    order: &[usize],
    preferred: &[TherapeuticFocus],
    used_pairs: &HashSet<(String, TherapeuticFocus)>,
    used_focuses: &HashSet<TherapeuticFocus>,
    cursor: usize,
) -> Option<(usize, usize, TherapeuticFocus)> {
    for offset in 0..order.len() {
        let slot = (cursor + offset) % order.len();
        let element_index = order[slot];
        let element = &elements[element_index];
        for focus in preferred {
            if element.motor.contains(focus)
                && !used_focuses.contains(focus)
                && !used_pairs.contains(&(element.object_label.clone(), *focus))
            {
                return Some((slot, element_index, *focus));
            }
        }
    }
    None
}

/// Relaxation one: any element, any focus it supports that no activity has
/// used yet.
fn pick_any_unused_focus(
    elements: &[EnvironmentElement],
    order: &[usize],
    preferred: &[TherapeuticFocus],
    used_pairs: &HashSet<(String, TherapeuticFocus)>,
    used_focuses: &HashSet<TherapeuticFocus>,
) -> Option<(usize, usize, TherapeuticFocus)> {
    for (slot, element_index) in order.iter().enumerate() {
        let element = &elements[*element_index];
        for focus in preferred {
            if element.motor.contains(focus)
                && !used_focuses.contains(focus)
                && !used_pairs.contains(&(element.object_label.clone(), *focus))
            {
                return Some((slot, *element_index, *focus));
            }
        }
    }
    None
}

/// Relaxation two: reuse a focus as long as the (label, focus) pair itself
/// is new.
fn pick_reused_focus(
    elements: &[EnvironmentElement],
    order: &[usize],
    preferred: &[TherapeuticFocus],
    used_pairs: &HashSet<(String, TherapeuticFocus)>,
) -> Option<(usize, usize, TherapeuticFocus)> {
    for (slot, element_index) in order.iter().enumerate() {
        let element = &elements[*element_index];
        for focus in preferred {
            if element.motor.contains(focus)
                && !used_pairs.contains(&(element.object_label.clone(), *focus))
            {
                return Some((slot, *element_index, *focus));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::PipelineConfig;
    use crate::environment::analyze_environment;
    use crate::focus::TherapeuticFocus;

    use super::build_activities_from_environment;

    fn elements(labels: &[&str]) -> Vec<crate::environment::EnvironmentElement> {
        let labels: Vec<String> = labels.iter().map(|label| label.to_string()).collect();
        analyze_environment(&labels, &PipelineConfig::default())
    }

    #[test]
    fn never_produces_duplicate_pairs_across_seeds() {
        let elements = elements(&["ball", "puzzle", "sofa", "stairs", "basket"]);
        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let activities = build_activities_from_environment(&elements, 5, &mut rng);
            let mut pairs = HashSet::new();
            for activity in &activities {
                assert!(
                    pairs.insert((activity.object_label.clone(), activity.focus)),
                    "duplicate pair at seed {seed}"
                );
            }
        }
    }

    #[test]
    fn five_manipulable_elements_fill_five_slots_with_spread_focuses() {
        let elements = elements(&["ball", "puzzle", "block", "crayon", "cup"]);
        let mut rng = StdRng::seed_from_u64(7);
        let activities = build_activities_from_environment(&elements, 5, &mut rng);
        assert_eq!(activities.len(), 5);
        let focuses: HashSet<TherapeuticFocus> =
            activities.iter().map(|activity| activity.focus).collect();
        assert!(focuses.len() >= 3, "only {} distinct focuses", focuses.len());
    }

    #[test]
    fn produced_focus_is_always_an_affordance_of_its_element() {
        let elements = elements(&["ball", "sofa", "table"]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            for activity in build_activities_from_environment(&elements, 5, &mut rng) {
                assert!(activity.element.motor.contains(&activity.focus));
            }
        }
    }

    #[test]
    fn single_element_is_capped_by_twice_its_affordance_slots() {
        let elements = elements(&["ball"]);
        let mut rng = StdRng::seed_from_u64(3);
        let activities = build_activities_from_environment(&elements, 5, &mut rng);
        assert_eq!(activities.len(), 2);
        assert!(activities
            .iter()
            .all(|activity| activity.object_label == "ball"));
    }

    #[test]
    fn covers_every_element_before_repeating_any() {
        let elements = elements(&["ball", "puzzle", "cushion", "basket"]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let activities = build_activities_from_environment(&elements, 4, &mut rng);
            let labels: HashSet<String> = activities
                .iter()
                .map(|activity| activity.object_label.clone())
                .collect();
            assert_eq!(labels.len(), 4, "seed {seed} skipped an element");
        }
    }

    #[test]
    fn empty_elements_yield_empty_candidates() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(build_activities_from_environment(&[], 5, &mut rng).is_empty());
    }
}
