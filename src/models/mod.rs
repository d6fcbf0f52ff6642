//! Data models
//!
//! Input records supplied by the calling application. Built fresh per call
//! and never persisted.

mod anamnesis;
mod branding;
pub mod lenient;
mod measurement;
mod request;
mod student;
mod workout;

pub use anamnesis::{AnamnesisRecord, MainGoal};
pub use branding::BrandingInfo;
pub use lenient::{parse_count, parse_measure};
pub use measurement::MeasurementRecord;
pub use request::ReportRequest;
pub use student::{Gender, StudentRecord};
pub use workout::{Exercise, WorkoutDay, WorkoutPlan};
