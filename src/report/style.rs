//! Report palette and type scale

use printpdf::{Color, Rgb};

use crate::models::MainGoal;

// ============================================================================
// Color Constants (RGB 0-255)
// ============================================================================

pub const COLOR_PRIMARY: (u8, u8, u8) = (31, 78, 121);     // Navy header band
pub const COLOR_ACCENT: (u8, u8, u8) = (0, 150, 136);      // Teal
pub const COLOR_WHITE: (u8, u8, u8) = (255, 255, 255);
pub const COLOR_BLACK: (u8, u8, u8) = (0, 0, 0);
pub const COLOR_TEXT: (u8, u8, u8) = (45, 45, 45);
pub const COLOR_GRAY: (u8, u8, u8) = (128, 128, 128);
pub const COLOR_LIGHT_GRAY: (u8, u8, u8) = (220, 220, 220);
pub const COLOR_PANEL: (u8, u8, u8) = (243, 246, 249);
pub const COLOR_ZEBRA: (u8, u8, u8) = (248, 248, 248);
pub const COLOR_WARNING: (u8, u8, u8) = (192, 0, 0);

/// Day header bands cycle through these
pub const DAY_COLORS: [(u8, u8, u8); 5] = [
    (31, 78, 121),
    (0, 121, 107),
    (112, 48, 160),
    (191, 87, 0),
    (0, 112, 192),
];

// ============================================================================
// Type Scale (points)
// ============================================================================

pub const SIZE_BRAND: f32 = 18.0;
pub const SIZE_SECTION: f32 = 13.0;
pub const SIZE_SUBTITLE: f32 = 10.0;
pub const SIZE_BODY: f32 = 9.0;
pub const SIZE_TABLE: f32 = 8.5;
pub const SIZE_SMALL: f32 = 7.5;
pub const SIZE_CARD_VALUE: f32 = 15.0;
pub const SIZE_FOOTER: f32 = 7.5;

pub fn rgb_to_printpdf(color: (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(
        color.0 as f32 / 255.0,
        color.1 as f32 / 255.0,
        color.2 as f32 / 255.0,
        None,
    ))
}

/// Goal banner color
pub fn goal_color(goal: Option<MainGoal>) -> (u8, u8, u8) {
    match goal {
        Some(MainGoal::WeightLoss) => (191, 87, 0),
        Some(MainGoal::MuscleGain) => (112, 48, 160),
        Some(MainGoal::Conditioning) => (0, 112, 192),
        Some(MainGoal::Rehabilitation) => (0, 121, 107),
        Some(MainGoal::Sports) => (192, 0, 0),
        Some(MainGoal::Health) | Some(MainGoal::Other) | None => COLOR_ACCENT,
    }
}

pub fn day_color(index: usize) -> (u8, u8, u8) {
    DAY_COLORS[index % DAY_COLORS.len()]
}
