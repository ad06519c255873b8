use serde::{Deserialize, Serialize};

/// The six skill areas an activity can target. Every element advertises a
/// subset of these as affordances, and every suggested activity pairs one
/// focus with one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TherapeuticFocus {
    SensoryRegulation,
    MotorPlanning,
    ExecutiveFunction,
    FineMotor,
    GrossMotor,
    BilateralCoordination,
}

/// Coarse grouping used by the diversity-ordering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusCategory {
    Motor,
    Sensory,
    Executive,
    Adl,
}

/// Performance-demand tag used by the diversity-ordering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandTag {
    Static,
    Dynamic,
    Bilateral,
    Sequencing,
}

/// Preferred pick order when spreading activities across focuses. Shuffled
/// per request before the greedy pairing pass.
pub const DIVERSITY_PRIORITY: [TherapeuticFocus; 6] = [
    TherapeuticFocus::FineMotor,
    TherapeuticFocus::GrossMotor,
    TherapeuticFocus::SensoryRegulation,
    TherapeuticFocus::BilateralCoordination,
    TherapeuticFocus::MotorPlanning,
    TherapeuticFocus::ExecutiveFunction,
];

/// Focuses that can be phrased without touching the object at all, and are
/// therefore the only ones allowed on safe-alternatives-only elements.
pub const SAFE_ALTERNATIVE_FOCUSES: [TherapeuticFocus; 2] = [
    TherapeuticFocus::SensoryRegulation,
    TherapeuticFocus::GrossMotor,
];

/// Substitution preference for children under four.
pub const EARLY_CHILDHOOD_PREFERRED: [TherapeuticFocus; 4] = [
    TherapeuticFocus::SensoryRegulation,
    TherapeuticFocus::FineMotor,
    TherapeuticFocus::GrossMotor,
    TherapeuticFocus::BilateralCoordination,
];

impl TherapeuticFocus {
    pub const ALL: [TherapeuticFocus; 6] = [
        TherapeuticFocus::SensoryRegulation,
        TherapeuticFocus::MotorPlanning,
        TherapeuticFocus::ExecutiveFunction,
        TherapeuticFocus::FineMotor,
        TherapeuticFocus::GrossMotor,
        TherapeuticFocus::BilateralCoordination,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TherapeuticFocus::SensoryRegulation => "sensory_regulation",
            TherapeuticFocus::MotorPlanning => "motor_planning",
            TherapeuticFocus::ExecutiveFunction => "executive_function",
            TherapeuticFocus::FineMotor => "fine_motor",
            TherapeuticFocus::GrossMotor => "gross_motor",
            TherapeuticFocus::BilateralCoordination => "bilateral_coordination",
        }
    }

    pub fn name_ar(self) -> &'static str {
        match self {
            TherapeuticFocus::SensoryRegulation => "التنظيم الحسي",
            TherapeuticFocus::MotorPlanning => "التخطيط الحركي",
            TherapeuticFocus::ExecutiveFunction => "الوظائف التنفيذية",
            TherapeuticFocus::FineMotor => "المهارات الحركية الدقيقة",
            TherapeuticFocus::GrossMotor => "المهارات الحركية الكبرى",
            TherapeuticFocus::BilateralCoordination => "التناسق بين الجانبين",
        }
    }

    pub fn category(self) -> FocusCategory {
        match self {
            TherapeuticFocus::FineMotor
            | TherapeuticFocus::GrossMotor
            | TherapeuticFocus::BilateralCoordination => FocusCategory::Motor,
            TherapeuticFocus::SensoryRegulation => FocusCategory::Sensory,
            TherapeuticFocus::ExecutiveFunction => FocusCategory::Executive,
            TherapeuticFocus::MotorPlanning => FocusCategory::Adl,
        }
    }

    pub fn demand(self) -> DemandTag {
        match self {
            TherapeuticFocus::SensoryRegulation | TherapeuticFocus::FineMotor => DemandTag::Static,
            TherapeuticFocus::GrossMotor => DemandTag::Dynamic,
            TherapeuticFocus::BilateralCoordination => DemandTag::Bilateral,
            TherapeuticFocus::ExecutiveFunction | TherapeuticFocus::MotorPlanning => {
                DemandTag::Sequencing
            }
        }
    }

    /// Whether describing this focus on an object structurally implies
    /// gripping, lifting or otherwise applying force to it. Gross-motor and
    /// sensory work can always be phrased as walk-toward / look-at / touch.
    pub fn implies_object_force(self) -> bool {
        matches!(
            self,
            TherapeuticFocus::MotorPlanning
                | TherapeuticFocus::FineMotor
                | TherapeuticFocus::BilateralCoordination
                | TherapeuticFocus::ExecutiveFunction
        )
    }

    /// Whether the focus inherently needs open space around the element.
    pub fn needs_open_space(self) -> bool {
        matches!(
            self,
            TherapeuticFocus::GrossMotor | TherapeuticFocus::MotorPlanning
        )
    }

    /// Whether the focus carries a cognitive load too high for toddlers.
    pub fn cognitively_demanding(self) -> bool {
        matches!(
            self,
            TherapeuticFocus::ExecutiveFunction | TherapeuticFocus::MotorPlanning
        )
    }
}
