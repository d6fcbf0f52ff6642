//! Nutrition calculation module
//!
//! Pure calorie/macro targets and the goal-based cardio table.

pub mod calculator;
pub mod cardio;

pub use calculator::{
    basal_metabolic_rate, calculate_nutrition, goal_calorie_adjustment, macro_split, weight_goal,
    ActivityLevel, MacroSplit, NutritionInput, NutritionRecommendation, NutritionSettings,
    WeightGoal, DEFAULT_AGE_YEARS,
};
pub use cardio::{select_cardio, CardioRecommendation};
