//! Workout plan model
//!
//! A plan is an ordered list of training days, each an ordered list of exercises.

use serde::{Deserialize, Serialize};

use super::lenient::{de_count, de_text};

/// A single exercise prescription
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    #[serde(default)]
    pub muscle_group: Option<String>,
    #[serde(default, deserialize_with = "de_count")]
    pub sets: Option<u32>,
    #[serde(default, deserialize_with = "de_text")]
    pub reps: Option<String>,
    #[serde(default, deserialize_with = "de_text")]
    pub weight: Option<String>,
    #[serde(default, deserialize_with = "de_text", alias = "restSeconds")]
    pub rest_time: Option<String>,
    #[serde(default, alias = "note")]
    pub notes: Option<String>,
}

impl Exercise {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn muscle(mut self, group: impl Into<String>) -> Self {
        self.muscle_group = Some(group.into());
        self
    }

    pub fn prescription(mut self, sets: u32, reps: impl Into<String>) -> Self {
        self.sets = Some(sets);
        self.reps = Some(reps.into());
        self
    }

    pub fn load(mut self, weight: impl Into<String>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    pub fn rest(mut self, rest: impl Into<String>) -> Self {
        self.rest_time = Some(rest.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes = Some(note.into());
        self
    }

    /// Note text, if it has any visible content
    pub fn note_text(&self) -> Option<&str> {
        self.notes.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

/// One training day of a plan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl WorkoutDay {
    pub fn new(name: impl Into<String>, exercises: Vec<Exercise>) -> Self {
        Self {
            name: name.into(),
            exercises,
        }
    }
}

/// Workout plan supplied by the calling application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type", alias = "planType")]
    pub plan_type: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default, alias = "workoutDays")]
    pub days: Vec<WorkoutDay>,
}

impl WorkoutPlan {
    pub fn new(name: impl Into<String>, days: Vec<WorkoutDay>) -> Self {
        Self {
            name: name.into(),
            days,
            ..Default::default()
        }
    }

    pub fn exercise_count(&self) -> usize {
        self.days.iter().map(|d| d.exercises.len()).sum()
    }
}
