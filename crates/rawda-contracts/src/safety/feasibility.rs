use serde::{Deserialize, Serialize};

use crate::environment::EnvironmentElement;
use crate::focus::TherapeuticFocus;

use super::{ForbiddenAction, ObjectSafetyClass};

/// What a child of a given age can physically be asked to do. Tiers are
/// 1-indexed and non-decreasing with age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeFeasibility {
    pub max_strength_demand: u8,
    pub max_balance_complexity: u8,
    pub max_motor_planning_load: u8,
    pub allow_elevated_surfaces: bool,
    /// Conservative default, never enabled in any band.
    pub allow_unstable_surfaces: bool,
}

/// Four bands: under 3, 3–4, 5–7, 8 and up.
pub fn age_feasibility(age: u8) -> AgeFeasibility {
    match age {
        0..=2 => AgeFeasibility {
            max_strength_demand: 1,
            max_balance_complexity: 1,
            max_motor_planning_load: 1,
            allow_elevated_surfaces: false,
            allow_unstable_surfaces: false,
        },
        3..=4 => AgeFeasibility {
            max_strength_demand: 2,
            max_balance_complexity: 2,
            max_motor_planning_load: 2,
            allow_elevated_surfaces: false,
            allow_unstable_surfaces: false,
        },
        5..=7 => AgeFeasibility {
            max_strength_demand: 3,
            max_balance_complexity: 3,
            max_motor_planning_load: 3,
            allow_elevated_surfaces: true,
            allow_unstable_surfaces: false,
        },
        _ => AgeFeasibility {
            max_strength_demand: 4,
            max_balance_complexity: 4,
            max_motor_planning_load: 4,
            allow_elevated_surfaces: true,
            allow_unstable_surfaces: false,
        },
    }
}

/// Whether pairing `focus` with `element` is physically acceptable at `age`.
/// Reads the element's precomputed safety metadata only; no table lookups.
pub fn is_activity_safe(focus: TherapeuticFocus, element: &EnvironmentElement, age: u8) -> bool {
    let meta = &element.safety;

    if meta.use_safe_alternatives_only && focus.implies_object_force() {
        return false;
    }

    if meta.classes.contains(&ObjectSafetyClass::ElevatedUnstable) {
        let feasibility = age_feasibility(age);
        let climbing_focus = matches!(
            focus,
            TherapeuticFocus::GrossMotor | TherapeuticFocus::MotorPlanning
        );
        if !feasibility.allow_elevated_surfaces && climbing_focus {
            return false;
        }
        if meta.forbidden_actions.contains(&ForbiddenAction::ClimbUnstable)
            && focus == TherapeuticFocus::GrossMotor
        {
            return false;
        }
    }

    true
}
