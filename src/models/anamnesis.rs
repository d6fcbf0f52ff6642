//! Anamnesis model
//!
//! Goals and training habits collected during the student intake.

use serde::{Deserialize, Deserializer, Serialize};

use super::lenient::{de_count, de_flag, de_measure};

/// Main training goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MainGoal {
    WeightLoss,
    MuscleGain,
    Conditioning,
    Health,
    Rehabilitation,
    Sports,
    Other,
}

impl MainGoal {
    pub const ALL: [MainGoal; 7] = [
        MainGoal::WeightLoss,
        MainGoal::MuscleGain,
        MainGoal::Conditioning,
        MainGoal::Health,
        MainGoal::Rehabilitation,
        MainGoal::Sports,
        MainGoal::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MainGoal::WeightLoss => "weight_loss",
            MainGoal::MuscleGain => "muscle_gain",
            MainGoal::Conditioning => "conditioning",
            MainGoal::Health => "health",
            MainGoal::Rehabilitation => "rehabilitation",
            MainGoal::Sports => "sports",
            MainGoal::Other => "other",
        }
    }

    /// Parse from string; unknown goals return `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "weight_loss" => Some(MainGoal::WeightLoss),
            "muscle_gain" => Some(MainGoal::MuscleGain),
            "conditioning" => Some(MainGoal::Conditioning),
            "health" => Some(MainGoal::Health),
            "rehabilitation" => Some(MainGoal::Rehabilitation),
            "sports" => Some(MainGoal::Sports),
            "other" => Some(MainGoal::Other),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MainGoal::WeightLoss => "Weight Loss",
            MainGoal::MuscleGain => "Muscle Gain",
            MainGoal::Conditioning => "Conditioning",
            MainGoal::Health => "Health",
            MainGoal::Rehabilitation => "Rehabilitation",
            MainGoal::Sports => "Sports Performance",
            MainGoal::Other => "General Fitness",
        }
    }
}

fn de_goal<'de, D>(deserializer: D) -> Result<Option<MainGoal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        let goal = MainGoal::parse(&s);
        if goal.is_none() && !s.trim().is_empty() {
            tracing::warn!("Unknown main goal '{}', using defaults", s);
        }
        goal
    }))
}

/// Anamnesis record supplied by the calling application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnamnesisRecord {
    #[serde(default, deserialize_with = "de_goal")]
    pub main_goal: Option<MainGoal>,
    /// Kilograms
    #[serde(default, deserialize_with = "de_measure")]
    pub target_weight: Option<f64>,
    /// Training sessions per week
    #[serde(default, deserialize_with = "de_count")]
    pub weekly_frequency: Option<u32>,
    /// Minutes per session
    #[serde(default, deserialize_with = "de_count")]
    pub session_duration: Option<u32>,
    #[serde(default, deserialize_with = "de_flag")]
    pub cardio_preference: Option<bool>,
}

impl AnamnesisRecord {
    pub fn with_goal(goal: MainGoal) -> Self {
        Self {
            main_goal: Some(goal),
            ..Default::default()
        }
    }

    pub fn frequency(mut self, sessions_per_week: u32) -> Self {
        self.weekly_frequency = Some(sessions_per_week);
        self
    }

    pub fn target(mut self, target_weight: f64) -> Self {
        self.target_weight = Some(target_weight);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_round_trip_names() {
        for goal in MainGoal::ALL {
            assert_eq!(MainGoal::parse(goal.as_str()), Some(goal));
        }
        assert_eq!(MainGoal::parse("Muscle Gain"), Some(MainGoal::MuscleGain));
        assert_eq!(MainGoal::parse("bulking"), None);
    }

    #[test]
    fn test_deserialize_record() {
        let a: AnamnesisRecord = serde_json::from_str(
            r#"{"mainGoal": "muscle_gain", "weeklyFrequency": 4, "targetWeight": "85", "cardioPreference": true}"#,
        )
        .unwrap();
        assert_eq!(a.main_goal, Some(MainGoal::MuscleGain));
        assert_eq!(a.weekly_frequency, Some(4));
        assert_eq!(a.target_weight, Some(85.0));
        assert_eq!(a.cardio_preference, Some(true));
        assert_eq!(a.session_duration, None);
    }

    #[test]
    fn test_unknown_goal_is_none() {
        let a: AnamnesisRecord =
            serde_json::from_str(r#"{"mainGoal": "become_an_astronaut"}"#).unwrap();
        assert_eq!(a.main_goal, None);
    }
}
