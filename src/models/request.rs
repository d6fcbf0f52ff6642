//! Report request
//!
//! Bundles the five input records for transport as a single JSON document.

use serde::{Deserialize, Serialize};

use super::{AnamnesisRecord, BrandingInfo, MeasurementRecord, StudentRecord, WorkoutPlan};

/// Everything needed to render one report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub student: StudentRecord,
    #[serde(default)]
    pub measurements: Option<MeasurementRecord>,
    #[serde(default)]
    pub anamnesis: Option<AnamnesisRecord>,
    #[serde(alias = "workout")]
    pub workout_plan: WorkoutPlan,
    #[serde(default)]
    pub branding: BrandingInfo,
}

impl ReportRequest {
    pub fn new(student: StudentRecord, workout_plan: WorkoutPlan, branding: BrandingInfo) -> Self {
        Self {
            student,
            measurements: None,
            anamnesis: None,
            workout_plan,
            branding,
        }
    }

    pub fn with_measurements(mut self, measurements: MeasurementRecord) -> Self {
        self.measurements = Some(measurements);
        self
    }

    pub fn with_anamnesis(mut self, anamnesis: AnamnesisRecord) -> Self {
        self.anamnesis = Some(anamnesis);
        self
    }
}
