//! Report configuration
//!
//! Page geometry, layout thresholds and calculator settings. Defaults match the
//! printed A4 report; binaries may override a few values from the environment.

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};
use crate::nutrition::NutritionSettings;

/// Height of the footer rule above the bottom edge (mm)
pub const FOOTER_RULE_FROM_BOTTOM_MM: f32 = 13.0;
/// Height of the footer baseline above the bottom edge (mm)
pub const FOOTER_TEXT_FROM_BOTTOM_MM: f32 = 9.0;
/// Clearance between the lowest content and the footer rule
const FOOTER_CLEARANCE_MM: f32 = 3.0;
/// Smallest footer reserve that keeps content clear of the stamped footer
pub const MIN_FOOTER_RESERVE_MM: f32 = FOOTER_RULE_FROM_BOTTOM_MM + FOOTER_CLEARANCE_MM;

/// Supported paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    A4,
    Letter,
}

impl PaperSize {
    /// Portrait (width, height) in millimeters
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::Letter => (215.9, 279.4),
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "a4" => Some(PaperSize::A4),
            "letter" | "us-letter" => Some(PaperSize::Letter),
            _ => None,
        }
    }
}

/// Layout and calculation settings for one render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    /// Left, right and top margin
    pub margin_mm: f32,
    /// Bottom space kept free for the footer stamp
    pub footer_reserve_mm: f32,
    /// Line height for wrapped body text
    pub line_height_mm: f32,
    pub exercise_name_max_chars: usize,
    pub muscle_group_max_chars: usize,
    pub nutrition: NutritionSettings,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let (page_width_mm, page_height_mm) = PaperSize::A4.dimensions_mm();
        Self {
            page_width_mm,
            page_height_mm,
            margin_mm: 15.0,
            footer_reserve_mm: 20.0,
            line_height_mm: 4.6,
            exercise_name_max_chars: 28,
            muscle_group_max_chars: 18,
            nutrition: NutritionSettings::default(),
        }
    }
}

impl ReportConfig {
    /// Defaults with overrides from `FITREPORT_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("FITREPORT_DEFAULT_AGE") {
            match raw.trim().parse::<u32>() {
                Ok(age) if (1..=120).contains(&age) => config.nutrition.default_age_years = age,
                _ => tracing::warn!("Ignoring FITREPORT_DEFAULT_AGE={:?}", raw),
            }
        }

        if let Some(raw) = lookup("FITREPORT_USE_BIRTH_DATE") {
            match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.nutrition.derive_age_from_birth_date = true,
                "0" | "false" | "no" | "off" => config.nutrition.derive_age_from_birth_date = false,
                _ => tracing::warn!("Ignoring FITREPORT_USE_BIRTH_DATE={:?}", raw),
            }
        }

        if let Some(raw) = lookup("FITREPORT_PAGE_SIZE") {
            match PaperSize::from_str(&raw) {
                Some(size) => config = config.with_paper(size),
                None => tracing::warn!("Ignoring FITREPORT_PAGE_SIZE={:?}", raw),
            }
        }

        config
    }

    pub fn with_paper(mut self, size: PaperSize) -> Self {
        let (width, height) = size.dimensions_mm();
        self.page_width_mm = width;
        self.page_height_mm = height;
        self
    }

    /// Horizontal space between the side margins
    pub fn content_width_mm(&self) -> f32 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    /// Vertical space between the top margin and the footer reserve
    pub fn usable_height_mm(&self) -> f32 {
        self.page_height_mm - self.margin_mm - self.footer_reserve_mm
    }

    pub fn validate(&self) -> ReportResult<()> {
        let finite = [
            self.page_width_mm,
            self.page_height_mm,
            self.margin_mm,
            self.footer_reserve_mm,
            self.line_height_mm,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(ReportError::InvalidConfig(
                "geometry values must be finite".to_string(),
            ));
        }
        if self.margin_mm < 0.0 || self.footer_reserve_mm < 0.0 {
            return Err(ReportError::InvalidConfig(
                "margins must not be negative".to_string(),
            ));
        }
        if self.footer_reserve_mm < MIN_FOOTER_RESERVE_MM {
            return Err(ReportError::InvalidConfig(format!(
                "footer reserve {:.1} mm is below the {:.1} mm footer band",
                self.footer_reserve_mm, MIN_FOOTER_RESERVE_MM
            )));
        }
        // The widest fixed layout element is the six-column workout table
        if self.content_width_mm() < 120.0 {
            return Err(ReportError::InvalidConfig(format!(
                "content width {:.1} mm is too narrow",
                self.content_width_mm()
            )));
        }
        if self.usable_height_mm() < 60.0 {
            return Err(ReportError::InvalidConfig(format!(
                "usable page height {:.1} mm is too short",
                self.usable_height_mm()
            )));
        }
        if self.line_height_mm <= 0.0 {
            return Err(ReportError::InvalidConfig(
                "line height must be positive".to_string(),
            ));
        }
        if self.exercise_name_max_chars < 4 || self.muscle_group_max_chars < 4 {
            return Err(ReportError::InvalidConfig(
                "truncation limits must be at least 4 characters".to_string(),
            ));
        }
        Ok(())
    }
}
