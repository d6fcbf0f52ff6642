//! Cardio recommendation table
//!
//! One fixed prescription per training goal. Missing goals fall back to the
//! general health entry.

use serde::Serialize;

use crate::models::MainGoal;

/// A fixed cardio prescription
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardioRecommendation {
    pub goal: MainGoal,
    pub activity: &'static str,
    pub duration_minutes: u32,
    pub frequency: &'static str,
    pub intensity: &'static str,
    pub guidance: &'static str,
}

/// Goal used when none is supplied
pub const FALLBACK_CARDIO_GOAL: MainGoal = MainGoal::Health;

static CARDIO_TABLE: [CardioRecommendation; 7] = [
    CardioRecommendation {
        goal: MainGoal::WeightLoss,
        activity: "Brisk walking, cycling or elliptical",
        duration_minutes: 40,
        frequency: "5x per week",
        intensity: "Moderate (60-70% max HR)",
        guidance: "Steady-state sessions after strength training maximise fat oxidation. \
                   Add one interval session per week once the base is comfortable.",
    },
    CardioRecommendation {
        goal: MainGoal::MuscleGain,
        activity: "Light cycling or incline walking",
        duration_minutes: 20,
        frequency: "2-3x per week",
        intensity: "Low (50-60% max HR)",
        guidance: "Keep cardio short and easy to support recovery without eating into \
                   the calorie surplus. Avoid long sessions right before leg training.",
    },
    CardioRecommendation {
        goal: MainGoal::Conditioning,
        activity: "Interval running, rowing or circuit training",
        duration_minutes: 30,
        frequency: "3-4x per week",
        intensity: "High intervals (75-90% max HR)",
        guidance: "Alternate hard intervals with full recovery periods. Keep at least one \
                   easy day between high-intensity sessions.",
    },
    CardioRecommendation {
        goal: MainGoal::Health,
        activity: "Walking, cycling or swimming",
        duration_minutes: 30,
        frequency: "3-5x per week",
        intensity: "Moderate (60-70% max HR)",
        guidance: "Aim for at least 150 minutes of moderate activity per week. \
                   You should be able to talk in short sentences during the session.",
    },
    CardioRecommendation {
        goal: MainGoal::Rehabilitation,
        activity: "Stationary bike or water walking",
        duration_minutes: 20,
        frequency: "3x per week",
        intensity: "Low (50-60% max HR)",
        guidance: "Choose low-impact options and stop on any pain. Progress duration \
                   before intensity, following the guidance of your health professional.",
    },
    CardioRecommendation {
        goal: MainGoal::Sports,
        activity: "Sport-specific drills and tempo runs",
        duration_minutes: 45,
        frequency: "3-4x per week",
        intensity: "Mixed (65-90% max HR)",
        guidance: "Match the energy systems of your sport. Combine tempo work with short \
                   sprints and schedule lighter sessions before competition days.",
    },
    CardioRecommendation {
        goal: MainGoal::Other,
        activity: "Any activity you enjoy",
        duration_minutes: 30,
        frequency: "3x per week",
        intensity: "Moderate (60-70% max HR)",
        guidance: "Consistency matters more than the specific activity. Pick something \
                   sustainable and increase the volume gradually.",
    },
];

/// Select the cardio prescription for a goal
pub fn select_cardio(goal: Option<MainGoal>) -> &'static CardioRecommendation {
    let goal = goal.unwrap_or(FALLBACK_CARDIO_GOAL);
    CARDIO_TABLE
        .iter()
        .find(|entry| entry.goal == goal)
        .unwrap_or(&CARDIO_TABLE[3])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_goal_has_an_entry() {
        for goal in MainGoal::ALL {
            assert_eq!(select_cardio(Some(goal)).goal, goal);
        }
    }

    #[test]
    fn test_missing_goal_falls_back_to_health() {
        let rec = select_cardio(None);
        assert_eq!(rec.goal, MainGoal::Health);
        assert_eq!(rec.duration_minutes, 30);
    }

    #[test]
    fn test_fallback_index_is_health() {
        assert_eq!(CARDIO_TABLE[3].goal, FALLBACK_CARDIO_GOAL);
    }

    #[test]
    fn test_entries_are_complete() {
        for entry in CARDIO_TABLE.iter() {
            assert!(entry.duration_minutes > 0);
            assert!(!entry.activity.is_empty());
            assert!(!entry.guidance.is_empty());
        }
    }
}
