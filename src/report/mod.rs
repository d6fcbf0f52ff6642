//! Report rendering
//!
//! Turns the input records into a paginated PDF: nutrition and cardio are
//! computed first, sections are laid out in a fixed order, then every page is
//! stamped with its footer once the page count is final.

pub mod canvas;
pub mod footer;
pub mod layout;
pub mod sections;
pub mod style;
pub mod text;

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crate::config::ReportConfig;
use crate::error::ReportResult;
use crate::models::{AnamnesisRecord, BrandingInfo, MeasurementRecord, ReportRequest, StudentRecord, WorkoutPlan};
use crate::nutrition::{calculate_nutrition, select_cardio, CardioRecommendation, NutritionInput, NutritionRecommendation};

use canvas::Canvas;
use sections::WorkoutStats;

/// Report sections in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    StudentInfo,
    Nutrition,
    Cardio,
    Workout,
}

/// A finished report plus what went into it
#[derive(Debug, Clone)]
pub struct RenderedReport {
    /// PDF bytes, starting with `%PDF`
    pub bytes: Vec<u8>,
    pub page_count: usize,
    /// Sections actually rendered, in order
    pub sections: Vec<SectionKind>,
    pub nutrition: Option<NutritionRecommendation>,
    pub cardio: CardioRecommendation,
    pub workout: WorkoutStats,
}

impl RenderedReport {
    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.sections.contains(&kind)
    }
}

/// Renders reports with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Render a request, stamping the local time
    pub fn render(&self, request: &ReportRequest) -> ReportResult<RenderedReport> {
        self.render_at(request, Local::now().naive_local())
    }

    /// Render a request with an explicit generation time
    pub fn render_at(&self, request: &ReportRequest, generated_at: NaiveDateTime) -> ReportResult<RenderedReport> {
        self.render_records(
            &request.student,
            request.measurements.as_ref(),
            request.anamnesis.as_ref(),
            &request.workout_plan,
            &request.branding,
            generated_at,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn render_records(
        &self,
        student: &StudentRecord,
        measurements: Option<&MeasurementRecord>,
        anamnesis: Option<&AnamnesisRecord>,
        plan: &WorkoutPlan,
        branding: &BrandingInfo,
        generated_at: NaiveDateTime,
    ) -> ReportResult<RenderedReport> {
        self.config.validate()?;

        let input = NutritionInput::from_records(
            student,
            measurements,
            anamnesis,
            &self.config.nutrition,
            generated_at.date(),
        );
        let nutrition = calculate_nutrition(&input, &self.config.nutrition);
        if nutrition.is_none() {
            tracing::debug!("No usable weight and height; nutrition section omitted");
        }
        let cardio = select_cardio(anamnesis.and_then(|a| a.main_goal));

        let title = text::sanitize(&format!("Training Report - {}", student.name.trim()));
        let mut canvas = Canvas::new(&title, &self.config)?;
        let mut rendered = Vec::with_capacity(5);

        sections::render_header(&mut canvas, branding, generated_at);
        rendered.push(SectionKind::Header);

        sections::render_student_card(&mut canvas, student, measurements);
        rendered.push(SectionKind::StudentInfo);

        if let Some(rec) = &nutrition {
            sections::render_nutrition(&mut canvas, rec);
            rendered.push(SectionKind::Nutrition);
        }

        sections::render_cardio(&mut canvas, cardio, anamnesis);
        rendered.push(SectionKind::Cardio);

        let workout = sections::render_workout(&mut canvas, plan);
        rendered.push(SectionKind::Workout);

        footer::stamp_footers(&canvas, branding, generated_at);

        let page_count = canvas.page_count();
        let bytes = canvas.finish()?;

        tracing::info!(
            "Generated report for '{}': {} pages, {} bytes",
            student.name.trim(),
            page_count,
            bytes.len()
        );

        Ok(RenderedReport {
            bytes,
            page_count,
            sections: rendered,
            nutrition,
            cardio: cardio.clone(),
            workout,
        })
    }
}

/// Generate a report PDF with the default configuration and the local clock
pub fn generate_report(
    student: &StudentRecord,
    measurements: Option<&MeasurementRecord>,
    anamnesis: Option<&AnamnesisRecord>,
    workout_plan: &WorkoutPlan,
    branding: &BrandingInfo,
) -> ReportResult<Vec<u8>> {
    let report = ReportGenerator::default().render_records(
        student,
        measurements,
        anamnesis,
        workout_plan,
        branding,
        Local::now().naive_local(),
    )?;
    Ok(report.bytes)
}
