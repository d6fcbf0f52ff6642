//! Nutrition target calculator
//!
//! Derives BMR, TDEE, a calorie target and a macro split from biometric
//! inputs. Returns `None` instead of a zero-filled result whenever weight or
//! height is unusable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AnamnesisRecord, MainGoal, MeasurementRecord, StudentRecord};

// ============================================================================
// Energy Constants
// ============================================================================

/// Kilocalories per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Kilocalories per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// Kilocalories per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Age used by the BMR equation when no real age is available
pub const DEFAULT_AGE_YEARS: u32 = 25;

/// Mifflin-St Jeor sex constants
pub const BMR_MALE_CONSTANT: f64 = 5.0;
pub const BMR_FEMALE_CONSTANT: f64 = -161.0;

// ============================================================================
// Goal Tables
// ============================================================================

/// Protein target per kg of body weight
pub const PROTEIN_PER_KG_MUSCLE_GAIN: f64 = 2.0;
pub const PROTEIN_PER_KG_WEIGHT_LOSS: f64 = 1.8;
pub const PROTEIN_PER_KG_DEFAULT: f64 = 1.6;

/// Share of target calories allocated to fat
pub const FAT_FRACTION_WEIGHT_LOSS: f64 = 0.25;
pub const FAT_FRACTION_DEFAULT: f64 = 0.30;

/// Expected body weight change per week (kg)
pub const WEEKLY_RATE_WEIGHT_LOSS_KG: f64 = -0.5;
pub const WEEKLY_RATE_DEFAULT_KG: f64 = 0.25;

/// Target weights closer than this to the current weight count as "no change"
const WEIGHT_EQUALITY_TOLERANCE_KG: f64 = 0.05;

/// Daily calorie adjustment applied to TDEE
pub fn goal_calorie_adjustment(goal: Option<MainGoal>) -> f64 {
    match goal {
        Some(MainGoal::WeightLoss) => -500.0,
        Some(MainGoal::MuscleGain) => 300.0,
        Some(MainGoal::Sports) => 200.0,
        _ => 0.0,
    }
}

pub fn protein_per_kg(goal: Option<MainGoal>) -> f64 {
    match goal {
        Some(MainGoal::MuscleGain) => PROTEIN_PER_KG_MUSCLE_GAIN,
        Some(MainGoal::WeightLoss) => PROTEIN_PER_KG_WEIGHT_LOSS,
        _ => PROTEIN_PER_KG_DEFAULT,
    }
}

pub fn fat_fraction(goal: Option<MainGoal>) -> f64 {
    match goal {
        Some(MainGoal::WeightLoss) => FAT_FRACTION_WEIGHT_LOSS,
        _ => FAT_FRACTION_DEFAULT,
    }
}

pub fn weekly_rate_kg(goal: Option<MainGoal>) -> f64 {
    match goal {
        Some(MainGoal::WeightLoss) => WEEKLY_RATE_WEIGHT_LOSS_KG,
        _ => WEEKLY_RATE_DEFAULT_KG,
    }
}

// ============================================================================
// Activity Level
// ============================================================================

/// Activity level derived from weekly training frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Step function of sessions per week; a missing frequency is sedentary
    pub fn from_weekly_frequency(sessions: Option<u32>) -> Self {
        match sessions.unwrap_or(0) {
            0 | 1 => ActivityLevel::Sedentary,
            2 => ActivityLevel::Light,
            3 | 4 => ActivityLevel::Moderate,
            5 | 6 => ActivityLevel::Active,
            _ => ActivityLevel::VeryActive,
        }
    }

    /// TDEE multiplier
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Lightly Active",
            ActivityLevel::Moderate => "Moderately Active",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }
}

// ============================================================================
// Settings and Inputs
// ============================================================================

/// Tunable calculator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionSettings {
    /// Age fed to the BMR equation when no birth-date age is used
    pub default_age_years: u32,
    /// Use the student's birth date for age instead of the fixed default
    pub derive_age_from_birth_date: bool,
}

impl Default for NutritionSettings {
    fn default() -> Self {
        Self {
            default_age_years: DEFAULT_AGE_YEARS,
            derive_age_from_birth_date: false,
        }
    }
}

/// Flattened calculator input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutritionInput {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub male: bool,
    /// Real age, only set when birth-date ages are enabled
    pub age_years: Option<u32>,
    pub goal: Option<MainGoal>,
    pub weekly_frequency: Option<u32>,
    pub target_weight_kg: Option<f64>,
}

impl NutritionInput {
    /// Collect calculator inputs from the optional records
    pub fn from_records(
        student: &StudentRecord,
        measurements: Option<&MeasurementRecord>,
        anamnesis: Option<&AnamnesisRecord>,
        settings: &NutritionSettings,
        today: NaiveDate,
    ) -> Self {
        let age_years = if settings.derive_age_from_birth_date {
            student.age_on(today)
        } else {
            if student.birth_date.is_some() {
                tracing::debug!(
                    "Birth date present but unused; BMR uses default age {}",
                    settings.default_age_years
                );
            }
            None
        };

        Self {
            weight_kg: measurements.and_then(|m| m.weight),
            height_cm: measurements.and_then(|m| m.height),
            male: student.is_male(),
            age_years,
            goal: anamnesis.and_then(|a| a.main_goal),
            weekly_frequency: anamnesis.and_then(|a| a.weekly_frequency),
            target_weight_kg: anamnesis.and_then(|a| a.target_weight),
        }
    }
}

// ============================================================================
// Outputs
// ============================================================================

/// Macro split of the calorie target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroSplit {
    pub protein_grams: f64,
    pub protein_calories: f64,
    pub protein_per_kg: f64,
    pub carb_grams: f64,
    pub carb_calories: f64,
    pub fat_grams: f64,
    pub fat_calories: f64,
    /// Protein and fat alone exceeded the target; carbs were clamped to zero
    pub under_allocated: bool,
}

/// Projected timeline towards a target weight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightGoal {
    pub current_kg: f64,
    pub target_kg: f64,
    pub delta_kg: f64,
    pub weekly_rate_kg: f64,
    pub estimated_weeks: u32,
}

/// Derived nutrition recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionRecommendation {
    pub goal: Option<MainGoal>,
    pub age_years: u32,
    pub bmr: f64,
    pub tdee: f64,
    pub activity_level: ActivityLevel,
    pub activity_multiplier: f64,
    pub calorie_adjustment: f64,
    pub target_calories: f64,
    pub macros: MacroSplit,
    pub weight_goal: Option<WeightGoal>,
}

// ============================================================================
// Calculations
// ============================================================================

fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Mifflin-St Jeor basal metabolic rate
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age_years: u32, male: bool) -> f64 {
    let sex_constant = if male {
        BMR_MALE_CONSTANT
    } else {
        BMR_FEMALE_CONSTANT
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64 + sex_constant
}

/// Split a calorie target into protein, fat and carbohydrate
pub fn macro_split(weight_kg: f64, target_calories: f64, goal: Option<MainGoal>) -> MacroSplit {
    let ratio = protein_per_kg(goal);
    let protein_grams = (weight_kg * ratio).round();
    let protein_calories = protein_grams * KCAL_PER_G_PROTEIN;

    let fat_calories = (target_calories * fat_fraction(goal)).round().max(0.0);
    let fat_grams = (fat_calories / KCAL_PER_G_FAT).round();

    let remaining = target_calories - protein_calories - fat_calories;
    let under_allocated = remaining < 0.0;
    if under_allocated {
        tracing::warn!(
            "Protein and fat ({:.0} kcal) exceed the {:.0} kcal target; carbohydrates clamped to zero",
            protein_calories + fat_calories,
            target_calories
        );
    }
    let carb_calories = remaining.max(0.0);
    let carb_grams = (carb_calories / KCAL_PER_G_CARBS).round();

    MacroSplit {
        protein_grams,
        protein_calories,
        protein_per_kg: ratio,
        carb_grams,
        carb_calories,
        fat_grams,
        fat_calories,
        under_allocated,
    }
}

/// Timeline towards the target weight, when one is set and differs
pub fn weight_goal(current_kg: f64, target_kg: Option<f64>, goal: Option<MainGoal>) -> Option<WeightGoal> {
    let target_kg = usable(target_kg)?;
    let delta_kg = target_kg - current_kg;
    if delta_kg.abs() < WEIGHT_EQUALITY_TOLERANCE_KG {
        return None;
    }

    let rate = weekly_rate_kg(goal);
    let estimated_weeks = (delta_kg.abs() / rate.abs()).round() as u32;

    Some(WeightGoal {
        current_kg,
        target_kg,
        delta_kg,
        weekly_rate_kg: rate,
        estimated_weeks,
    })
}

/// Compute the full recommendation, or `None` without usable weight and height
pub fn calculate_nutrition(
    input: &NutritionInput,
    settings: &NutritionSettings,
) -> Option<NutritionRecommendation> {
    let weight_kg = usable(input.weight_kg)?;
    let height_cm = usable(input.height_cm)?;
    let age_years = input.age_years.unwrap_or(settings.default_age_years);

    let bmr = basal_metabolic_rate(weight_kg, height_cm, age_years, input.male);
    let activity_level = ActivityLevel::from_weekly_frequency(input.weekly_frequency);
    let activity_multiplier = activity_level.multiplier();
    let tdee = bmr * activity_multiplier;

    let calorie_adjustment = goal_calorie_adjustment(input.goal);
    let target_calories = (tdee + calorie_adjustment).round();

    let macros = macro_split(weight_kg, target_calories, input.goal);
    let weight_goal = weight_goal(weight_kg, input.target_weight_kg, input.goal);

    tracing::debug!(
        "Nutrition: bmr={:.1} tdee={:.1} target={:.0} level={:?}",
        bmr,
        tdee,
        target_calories,
        activity_level
    );

    Some(NutritionRecommendation {
        goal: input.goal,
        age_years,
        bmr,
        tdee,
        activity_level,
        activity_multiplier,
        calorie_adjustment,
        target_calories,
        macros,
        weight_goal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn input(weight: f64, height: f64, male: bool, goal: Option<MainGoal>, freq: Option<u32>) -> NutritionInput {
        NutritionInput {
            weight_kg: Some(weight),
            height_cm: Some(height),
            male,
            goal,
            weekly_frequency: freq,
            ..Default::default()
        }
    }

    #[test]
    fn test_bmr_closed_form() {
        let settings = NutritionSettings::default();
        for &(w, h) in &[(50.0, 150.0), (80.0, 175.0), (120.5, 198.0)] {
            for male in [true, false] {
                let rec = calculate_nutrition(&input(w, h, male, None, None), &settings).unwrap();
                let sex = if male { 5.0 } else { -161.0 };
                let expected = 10.0 * w + 6.25 * h - 5.0 * DEFAULT_AGE_YEARS as f64 + sex;
                assert!((rec.bmr - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_activity_levels() {
        let cases = [
            (None, ActivityLevel::Sedentary),
            (Some(0), ActivityLevel::Sedentary),
            (Some(1), ActivityLevel::Sedentary),
            (Some(2), ActivityLevel::Light),
            (Some(3), ActivityLevel::Moderate),
            (Some(4), ActivityLevel::Moderate),
            (Some(5), ActivityLevel::Active),
            (Some(6), ActivityLevel::Active),
            (Some(7), ActivityLevel::VeryActive),
            (Some(14), ActivityLevel::VeryActive),
        ];
        for (freq, level) in cases {
            assert_eq!(ActivityLevel::from_weekly_frequency(freq), level);
        }
        assert_eq!(ActivityLevel::Moderate.multiplier(), 1.55);
        assert_eq!(ActivityLevel::VeryActive.multiplier(), 1.9);
    }

    #[test]
    fn test_target_calories_for_every_goal() {
        let settings = NutritionSettings::default();
        let goals = MainGoal::ALL.iter().copied().map(Some).chain(std::iter::once(None));
        for goal in goals {
            let rec = calculate_nutrition(&input(72.0, 168.0, false, goal, Some(3)), &settings).unwrap();
            assert_eq!(rec.target_calories, (rec.tdee + goal_calorie_adjustment(goal)).round());
        }
        assert_eq!(goal_calorie_adjustment(None), 0.0);
        assert_eq!(goal_calorie_adjustment(Some(MainGoal::Rehabilitation)), 0.0);
    }

    #[test]
    fn test_macro_calories_match_target() {
        let settings = NutritionSettings::default();
        for goal in MainGoal::ALL {
            let rec = calculate_nutrition(&input(80.0, 175.0, true, Some(goal), Some(4)), &settings).unwrap();
            let m = &rec.macros;
            let total = m.protein_calories + m.fat_calories + m.carb_calories;
            assert!((total - rec.target_calories).abs() <= 4.0);
            assert!(!m.under_allocated);
            assert!(m.carb_grams >= 0.0);
        }
    }

    #[test]
    fn test_reference_scenario_muscle_gain() {
        let settings = NutritionSettings::default();
        let rec = calculate_nutrition(
            &input(80.0, 175.0, true, Some(MainGoal::MuscleGain), Some(4)),
            &settings,
        )
        .unwrap();

        // 800 + 1093.75 - 125 + 5
        assert!((rec.bmr - 1773.75).abs() < 1e-9);
        assert!((rec.bmr - 1780.0).abs() < 10.0);
        assert_eq!(rec.activity_level, ActivityLevel::Moderate);
        assert!((rec.tdee - 2749.3125).abs() < 1e-6);
        assert_eq!(rec.target_calories, 3049.0);
        assert_eq!(rec.macros.protein_grams, 160.0);
        assert_eq!(rec.macros.protein_calories, 640.0);
        assert_eq!(rec.macros.fat_calories, 915.0);
        assert_eq!(rec.macros.fat_grams, 102.0);
        assert_eq!(rec.macros.carb_calories, 1494.0);
        assert_eq!(rec.macros.carb_grams, 374.0);
        assert!(rec.weight_goal.is_none());
    }

    #[test]
    fn test_missing_weight_or_height_gives_none() {
        let settings = NutritionSettings::default();
        let mut no_height = input(80.0, 175.0, true, None, None);
        no_height.height_cm = None;
        assert!(calculate_nutrition(&no_height, &settings).is_none());

        let mut no_weight = input(80.0, 175.0, true, None, None);
        no_weight.weight_kg = None;
        assert!(calculate_nutrition(&no_weight, &settings).is_none());

        let nan_weight = input(f64::NAN, 175.0, true, None, None);
        assert!(calculate_nutrition(&nan_weight, &settings).is_none());

        assert!(calculate_nutrition(&NutritionInput::default(), &settings).is_none());
    }

    #[test]
    fn test_carbs_clamped_on_extreme_input() {
        let settings = NutritionSettings::default();
        let rec = calculate_nutrition(
            &input(50.0, 80.0, false, Some(MainGoal::WeightLoss), None),
            &settings,
        )
        .unwrap();
        assert_eq!(rec.target_calories, 357.0);
        assert_eq!(rec.macros.protein_calories, 360.0);
        assert_eq!(rec.macros.carb_calories, 0.0);
        assert_eq!(rec.macros.carb_grams, 0.0);
        assert!(rec.macros.under_allocated);
    }

    #[test]
    fn test_weight_goal_projection() {
        let loss = weight_goal(90.0, Some(80.0), Some(MainGoal::WeightLoss)).unwrap();
        assert_eq!(loss.delta_kg, -10.0);
        assert_eq!(loss.weekly_rate_kg, -0.5);
        assert_eq!(loss.estimated_weeks, 20);

        let gain = weight_goal(70.0, Some(75.5), Some(MainGoal::MuscleGain)).unwrap();
        assert_eq!(gain.weekly_rate_kg, 0.25);
        assert_eq!(gain.estimated_weeks, 22);

        let rounded = weight_goal(70.0, Some(70.3), None).unwrap();
        assert_eq!(rounded.estimated_weeks, 1);

        assert!(weight_goal(80.0, Some(80.0), Some(MainGoal::WeightLoss)).is_none());
        assert!(weight_goal(80.0, None, Some(MainGoal::WeightLoss)).is_none());
    }

    #[test]
    fn test_from_records_uses_default_age() {
        let mut student = StudentRecord::new("João Silva").with_gender(Gender::Male);
        student.birth_date = Some("1970-01-01".to_string());
        let measurements = MeasurementRecord::new(Some(80.0), Some(175.0));
        let anamnesis = AnamnesisRecord::with_goal(MainGoal::MuscleGain).frequency(4);
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        let settings = NutritionSettings::default();
        let input = NutritionInput::from_records(
            &student,
            Some(&measurements),
            Some(&anamnesis),
            &settings,
            today,
        );
        assert_eq!(input.age_years, None);
        assert!(input.male);
        let rec = calculate_nutrition(&input, &settings).unwrap();
        assert_eq!(rec.age_years, DEFAULT_AGE_YEARS);

        let derived = NutritionSettings {
            derive_age_from_birth_date: true,
            ..Default::default()
        };
        let input = NutritionInput::from_records(
            &student,
            Some(&measurements),
            Some(&anamnesis),
            &derived,
            today,
        );
        assert_eq!(input.age_years, Some(55));
        let rec = calculate_nutrition(&input, &derived).unwrap();
        assert!((rec.bmr - (800.0 + 1093.75 - 275.0 + 5.0)).abs() < 1e-9);
    }
}
