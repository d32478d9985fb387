/// Gender, as used by the Mifflin-St Jeor formula branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Weight goal driving the calorie target adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    pub fn label(self) -> &'static str {
        match self {
            Goal::Lose => "Lose weight",
            Goal::Maintain => "Maintain weight",
            Goal::Gain => "Gain weight",
        }
    }
}

/// Standard activity levels with their TDEE multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// TDEE multiplier for this level.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::Light => "Light (exercise 1-3 days/week)",
            ActivityLevel::Moderate => "Moderate (exercise 3-5 days/week)",
            ActivityLevel::Active => "Active (exercise 6-7 days/week)",
            ActivityLevel::VeryActive => "Very active (hard exercise daily)",
        }
    }
}

/// User biometrics collected at the start of a planning run.
///
/// Constructed by the prompt layer, consumed once, discarded. The raw
/// activity multiplier is stored rather than the level so the energy
/// functions stay plain arithmetic over scalars.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub gender: Gender,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_multiplier: f64,
    pub goal: Goal,
}
