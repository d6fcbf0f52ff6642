//! Fitness Report Engine Library
//!
//! Turns a student's profile, measurements, anamnesis and workout plan into a
//! paginated PDF with nutrition targets and a cardio prescription.

pub mod build_info;
pub mod config;
pub mod error;
pub mod models;
pub mod nutrition;
pub mod report;

pub use config::{PaperSize, ReportConfig};
pub use error::{ReportError, ReportResult};
pub use report::{generate_report, RenderedReport, ReportGenerator, SectionKind};
