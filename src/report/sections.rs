//! Section renderers
//!
//! Each renderer consumes the canvas in turn and leaves the cursor below its
//! own content. None of them look at another section's state.

use chrono::NaiveDateTime;

use crate::models::{AnamnesisRecord, BrandingInfo, Exercise, MeasurementRecord, StudentRecord, WorkoutPlan};
use crate::nutrition::{CardioRecommendation, NutritionRecommendation};
use crate::report::canvas::{centered_baseline, Align, Canvas, Column};
use crate::report::style::*;
use crate::report::text::{fit_to_width, truncate_chars, wrap_text, FontStyle};

// ============================================================================
// Layout Constants (mm)
// ============================================================================

const HEADER_BAND_HEIGHT: f32 = 26.0;
const SECTION_GAP: f32 = 6.0;
const SECTION_TITLE_HEIGHT: f32 = 9.0;

const CARD_PADDING: f32 = 6.0;
const STUDENT_CARD_BASE: f32 = 14.0;
const STUDENT_LINE_HEIGHT: f32 = 5.5;

const GOAL_BANNER_HEIGHT: f32 = 11.0;
const MACRO_CARD_HEIGHT: f32 = 24.0;
const MACRO_CARD_GAP: f32 = 4.0;
const WEIGHT_GOAL_CARD_HEIGHT: f32 = 16.0;

const DAY_BAND_HEIGHT: f32 = 9.0;
const TABLE_HEADER_HEIGHT: f32 = 7.0;
const TABLE_ROW_HEIGHT: f32 = 6.5;
const NOTE_INDENT: f32 = 6.0;

/// Relative workout table column widths (sum 180, scaled to the content width)
const TABLE_COLUMN_WIDTHS: [f32; 6] = [60.0, 36.0, 16.0, 22.0, 24.0, 22.0];
const TABLE_HEADERS: [&str; 6] = ["Exercise", "Muscle group", "Sets", "Reps", "Weight", "Rest"];

/// Placeholder for a missing table value
const EMPTY_CELL: &str = "-";

// ============================================================================
// Display Helpers
// ============================================================================

/// Whole numbers without decimals, everything else with one
pub fn format_number(value: f64) -> String {
    if (value - value.round()).abs() < 0.05 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn is_bare_number(raw: &str) -> bool {
    raw.trim().replace(',', ".").parse::<f64>().is_ok()
}

/// Load column: bare numbers are kilograms
pub fn display_weight(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) if is_bare_number(value) => format!("{} kg", value),
        Some(value) => value.to_string(),
        None => EMPTY_CELL.to_string(),
    }
}

/// Rest column: bare numbers are seconds
pub fn display_rest(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) if is_bare_number(value) => format!("{}s", value),
        Some(value) => value.to_string(),
        None => EMPTY_CELL.to_string(),
    }
}

fn display_text(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(EMPTY_CELL)
        .to_string()
}

/// Workout table columns laid out across the content width
pub fn workout_columns(left: f32, content_width: f32) -> Vec<Column> {
    let total: f32 = TABLE_COLUMN_WIDTHS.iter().sum();
    let scale = content_width / total;
    let mut x = left;
    TABLE_COLUMN_WIDTHS
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let column = Column {
                x,
                width: width * scale,
                align: if i < 2 { Align::Left } else { Align::Center },
            };
            x += width * scale;
            column
        })
        .collect()
}

/// Table cells for one exercise row
pub fn exercise_cells(exercise: &Exercise, name_max: usize, muscle_max: usize) -> Vec<String> {
    let name = if exercise.name.trim().is_empty() {
        "Unnamed exercise".to_string()
    } else {
        truncate_chars(&exercise.name, name_max)
    };
    let muscle = exercise
        .muscle_group
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| truncate_chars(s, muscle_max))
        .unwrap_or_else(|| EMPTY_CELL.to_string());

    vec![
        name,
        muscle,
        exercise
            .sets
            .map(|s| s.to_string())
            .unwrap_or_else(|| EMPTY_CELL.to_string()),
        display_text(exercise.reps.as_deref()),
        display_weight(exercise.weight.as_deref()),
        display_rest(exercise.rest_time.as_deref()),
    ]
}

fn section_title(canvas: &mut Canvas, title: &str) {
    let placement = canvas.place_block(SECTION_TITLE_HEIGHT);
    canvas.text(
        canvas.left(),
        placement.top + 6.0,
        title,
        FontStyle::Bold,
        SIZE_SECTION,
        COLOR_PRIMARY,
    );
    canvas.hline(canvas.left(), canvas.right(), placement.top + 8.0, COLOR_ACCENT, 0.75);
}

// ============================================================================
// Header Band
// ============================================================================

pub fn render_header(canvas: &mut Canvas, branding: &BrandingInfo, generated_at: NaiveDateTime) {
    let placement = canvas.place_block(HEADER_BAND_HEIGHT);
    let (left, right) = (canvas.left(), canvas.right());

    canvas.fill_rect(left, placement.top, canvas.content_width(), HEADER_BAND_HEIGHT, COLOR_PRIMARY);
    let brand = fit_to_width(
        branding.display_name(),
        FontStyle::Bold,
        SIZE_BRAND,
        canvas.content_width() - 2.0 * CARD_PADDING,
    );
    canvas.text(
        left + CARD_PADDING,
        placement.top + 11.0,
        &brand,
        FontStyle::Bold,
        SIZE_BRAND,
        COLOR_WHITE,
    );
    canvas.text(
        left + CARD_PADDING,
        placement.top + 19.0,
        "Personalized Training & Nutrition Report",
        FontStyle::Regular,
        SIZE_SUBTITLE,
        COLOR_WHITE,
    );
    canvas.text_right(
        right - CARD_PADDING,
        placement.top + 19.0,
        &generated_at.format("%d/%m/%Y").to_string(),
        FontStyle::Regular,
        SIZE_SUBTITLE,
        COLOR_WHITE,
    );

    canvas.advance(SECTION_GAP);
    tracing::debug!("Rendered header band");
}

// ============================================================================
// Student Card
// ============================================================================

/// Detail lines shown under the student name
pub fn student_lines(student: &StudentRecord, measurements: Option<&MeasurementRecord>) -> Vec<String> {
    let mut lines = Vec::new();

    let contact: Vec<String> = [
        student.email.as_deref().map(|e| format!("Email: {}", e.trim())),
        student.phone.as_deref().map(|p| format!("Phone: {}", p.trim())),
    ]
    .into_iter()
    .flatten()
    .filter(|s| !s.ends_with(": "))
    .collect();
    if !contact.is_empty() {
        lines.push(contact.join("   |   "));
    }

    let personal: Vec<String> = [
        student.birth_date_display().map(|d| format!("Birth date: {}", d)),
        student.gender.map(|g| format!("Gender: {}", g.display_name())),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !personal.is_empty() {
        lines.push(personal.join("   |   "));
    }

    if let Some(m) = measurements {
        let body: Vec<String> = [
            m.weight.map(|w| format!("Weight: {} kg", format_number(w))),
            m.height.map(|h| format!("Height: {} cm", format_number(h))),
            m.body_fat.map(|f| format!("Body fat: {}%", format_number(f))),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !body.is_empty() {
            lines.push(body.join("   |   "));
        }
    }

    lines
}

/// Detail lines wrapped to the card's inner width
pub fn student_detail_lines(
    student: &StudentRecord,
    measurements: Option<&MeasurementRecord>,
    max_width_mm: f32,
) -> Vec<String> {
    student_lines(student, measurements)
        .iter()
        .flat_map(|line| wrap_text(line, FontStyle::Regular, SIZE_BODY, max_width_mm))
        .collect()
}

pub fn render_student_card(canvas: &mut Canvas, student: &StudentRecord, measurements: Option<&MeasurementRecord>) {
    let inner_width = canvas.content_width() - 2.0 * CARD_PADDING;
    let lines = student_detail_lines(student, measurements, inner_width);
    let height = STUDENT_CARD_BASE + STUDENT_LINE_HEIGHT * lines.len() as f32 + 2.0;
    let placement = canvas.place_block(height);
    let left = canvas.left();

    canvas.fill_rect(left, placement.top, canvas.content_width(), height, COLOR_PANEL);
    canvas.fill_rect(left, placement.top, 1.5, height, COLOR_ACCENT);
    canvas.text(
        left + CARD_PADDING,
        placement.top + 5.0,
        "STUDENT",
        FontStyle::Bold,
        SIZE_SMALL,
        COLOR_GRAY,
    );
    let name = if student.name.trim().is_empty() {
        "Unnamed student"
    } else {
        student.name.trim()
    };
    let name = fit_to_width(name, FontStyle::Bold, SIZE_SECTION, inner_width);
    canvas.text(
        left + CARD_PADDING,
        placement.top + 11.5,
        &name,
        FontStyle::Bold,
        SIZE_SECTION,
        COLOR_TEXT,
    );

    for (i, line) in lines.iter().enumerate() {
        let baseline = placement.top + STUDENT_CARD_BASE + STUDENT_LINE_HEIGHT * (i + 1) as f32 - 1.5;
        canvas.text(left + CARD_PADDING, baseline, line, FontStyle::Regular, SIZE_BODY, COLOR_TEXT);
    }

    canvas.advance(SECTION_GAP);
    tracing::debug!("Rendered student card with {} detail lines", lines.len());
}

// ============================================================================
// Nutrition Summary
// ============================================================================

struct MacroCard {
    label: &'static str,
    value: String,
    detail: String,
    color: (u8, u8, u8),
}

fn macro_cards(rec: &NutritionRecommendation) -> [MacroCard; 4] {
    let m = &rec.macros;
    [
        MacroCard {
            label: "CALORIES",
            value: format!("{:.0} kcal", rec.target_calories),
            detail: format!("TDEE {:.0} kcal", rec.tdee),
            color: COLOR_PRIMARY,
        },
        MacroCard {
            label: "PROTEIN",
            value: format!("{:.0} g", m.protein_grams),
            detail: format!("{:.0} kcal | {} g/kg", m.protein_calories, format_number(m.protein_per_kg)),
            color: (112, 48, 160),
        },
        MacroCard {
            label: "CARBS",
            value: format!("{:.0} g", m.carb_grams),
            detail: format!("{:.0} kcal", m.carb_calories),
            color: (191, 87, 0),
        },
        MacroCard {
            label: "FAT",
            value: format!("{:.0} g", m.fat_grams),
            detail: format!("{:.0} kcal", m.fat_calories),
            color: (0, 121, 107),
        },
    ]
}

pub fn render_nutrition(canvas: &mut Canvas, rec: &NutritionRecommendation) {
    // Keep the title with the banner and the cards
    canvas.ensure_space(SECTION_TITLE_HEIGHT + GOAL_BANNER_HEIGHT + 3.0 + MACRO_CARD_HEIGHT);
    section_title(canvas, "Nutrition Plan");

    let (left, right) = (canvas.left(), canvas.right());
    let goal_name = rec.goal.map(|g| g.display_name()).unwrap_or("General Fitness");

    let banner = canvas.place_block(GOAL_BANNER_HEIGHT);
    canvas.fill_rect(left, banner.top, canvas.content_width(), GOAL_BANNER_HEIGHT, goal_color(rec.goal));
    let baseline = centered_baseline(banner.top, GOAL_BANNER_HEIGHT, SIZE_SUBTITLE);
    canvas.text(
        left + CARD_PADDING,
        baseline,
        &format!("Goal: {}", goal_name),
        FontStyle::Bold,
        SIZE_SUBTITLE,
        COLOR_WHITE,
    );
    canvas.text_right(
        right - CARD_PADDING,
        baseline,
        &format!(
            "{} (x{})",
            rec.activity_level.display_name(),
            rec.activity_multiplier
        ),
        FontStyle::Regular,
        SIZE_BODY,
        COLOR_WHITE,
    );
    canvas.advance(3.0);

    let cards = macro_cards(rec);
    let card_width = (canvas.content_width() - MACRO_CARD_GAP * (cards.len() - 1) as f32) / cards.len() as f32;
    let row = canvas.place_block(MACRO_CARD_HEIGHT);
    for (i, card) in cards.iter().enumerate() {
        let x = left + i as f32 * (card_width + MACRO_CARD_GAP);
        let center = x + card_width / 2.0;
        canvas.fill_rect(x, row.top, card_width, MACRO_CARD_HEIGHT, COLOR_PANEL);
        canvas.fill_rect(x, row.top, card_width, 1.5, card.color);
        canvas.text_centered(center, row.top + 7.0, card.label, FontStyle::Bold, SIZE_SMALL, COLOR_GRAY);
        canvas.text_centered(center, row.top + 15.0, &card.value, FontStyle::Bold, SIZE_CARD_VALUE, card.color);
        canvas.text_centered(center, row.top + 21.0, &card.detail, FontStyle::Regular, SIZE_SMALL, COLOR_TEXT);
    }
    canvas.advance(2.0);

    let basis = format!(
        "BMR {:.0} kcal (Mifflin-St Jeor, age {})   |   daily adjustment {:+.0} kcal",
        rec.bmr, rec.age_years, rec.calorie_adjustment
    );
    let line_height = canvas.config().line_height_mm;
    let line = canvas.place_block(line_height);
    canvas.text(left, centered_baseline(line.top, line_height, SIZE_SMALL), &basis, FontStyle::Italic, SIZE_SMALL, COLOR_GRAY);

    if rec.macros.under_allocated {
        canvas.place_wrapped_text(
            left,
            canvas.content_width(),
            "Protein and fat already exceed the calorie target; carbohydrates were set to zero. Review the inputs.",
            FontStyle::Bold,
            SIZE_SMALL,
            COLOR_WARNING,
        );
    }

    if let Some(goal) = &rec.weight_goal {
        canvas.advance(3.0);
        let card = canvas.place_block(WEIGHT_GOAL_CARD_HEIGHT);
        canvas.fill_rect(left, card.top, canvas.content_width(), WEIGHT_GOAL_CARD_HEIGHT, COLOR_PANEL);
        canvas.fill_rect(left, card.top, 1.5, WEIGHT_GOAL_CARD_HEIGHT, goal_color(rec.goal));
        canvas.text(
            left + CARD_PADDING,
            card.top + 6.5,
            &format!(
                "Weight goal: {} kg -> {} kg ({:+.1} kg)",
                format_number(goal.current_kg),
                format_number(goal.target_kg),
                goal.delta_kg
            ),
            FontStyle::Bold,
            SIZE_BODY,
            COLOR_TEXT,
        );
        canvas.text(
            left + CARD_PADDING,
            card.top + 12.0,
            &format!(
                "Estimated {} weeks at {:+.2} kg per week",
                goal.estimated_weeks, goal.weekly_rate_kg
            ),
            FontStyle::Regular,
            SIZE_BODY,
            COLOR_TEXT,
        );
    }

    canvas.advance(SECTION_GAP);
    tracing::debug!("Rendered nutrition section ({:.0} kcal)", rec.target_calories);
}

// ============================================================================
// Cardio Box
// ============================================================================

pub fn render_cardio(canvas: &mut Canvas, cardio: &CardioRecommendation, anamnesis: Option<&AnamnesisRecord>) {
    canvas.ensure_space(SECTION_TITLE_HEIGHT + 24.0);
    section_title(canvas, "Cardio Recommendation");

    let left = canvas.left();
    let text_width = canvas.content_width() - 2.0 * CARD_PADDING;
    let line_height = canvas.config().line_height_mm;

    let mut guidance = wrap_text(cardio.guidance, FontStyle::Regular, SIZE_BODY, text_width);
    if anamnesis.and_then(|a| a.cardio_preference) == Some(false) {
        guidance.extend(wrap_text(
            "The student prefers to keep cardio to a minimum; start at the lower end of the range.",
            FontStyle::Italic,
            SIZE_BODY,
            text_width,
        ));
    }

    let height = 8.0 + 6.0 + guidance.len() as f32 * line_height + 4.0;
    let block = canvas.place_block(height);
    canvas.fill_rect(left, block.top, canvas.content_width(), height, COLOR_PANEL);
    canvas.fill_rect(left, block.top, 1.5, height, goal_color(Some(cardio.goal)));

    canvas.text(
        left + CARD_PADDING,
        block.top + 7.0,
        cardio.activity,
        FontStyle::Bold,
        SIZE_SUBTITLE,
        COLOR_TEXT,
    );
    canvas.text(
        left + CARD_PADDING,
        block.top + 13.0,
        &format!(
            "{} min per session   |   {}   |   {}",
            cardio.duration_minutes, cardio.frequency, cardio.intensity
        ),
        FontStyle::Regular,
        SIZE_BODY,
        COLOR_ACCENT,
    );

    let guidance_top = block.top + 15.0;
    for (i, line) in guidance.iter().enumerate() {
        let top = guidance_top + i as f32 * line_height;
        canvas.text(
            left + CARD_PADDING,
            centered_baseline(top, line_height, SIZE_BODY),
            line,
            FontStyle::Regular,
            SIZE_BODY,
            COLOR_TEXT,
        );
    }

    canvas.advance(SECTION_GAP);
    tracing::debug!("Rendered cardio box for goal {}", cardio.goal.as_str());
}

// ============================================================================
// Workout Section
// ============================================================================

/// Counts from rendering the workout tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkoutStats {
    pub days: usize,
    pub rows: usize,
    /// Table header rows drawn, including repeats after page breaks
    pub header_rows: usize,
    pub note_lines: usize,
}

fn table_header(canvas: &mut Canvas, columns: &[Column]) {
    let cells: Vec<String> = TABLE_HEADERS.iter().map(|h| h.to_string()).collect();
    canvas.place_table_row(
        columns,
        &cells,
        TABLE_HEADER_HEIGHT,
        FontStyle::Bold,
        SIZE_TABLE,
        COLOR_TEXT,
        Some(COLOR_LIGHT_GRAY),
    );
}

fn plan_metadata(plan: &WorkoutPlan) -> String {
    let mut parts = Vec::new();
    if let Some(kind) = plan.plan_type.as_deref().filter(|s| !s.trim().is_empty()) {
        parts.push(format!("Type: {}", kind.trim()));
    }
    if let Some(level) = plan.difficulty.as_deref().filter(|s| !s.trim().is_empty()) {
        parts.push(format!("Difficulty: {}", level.trim()));
    }
    let days = plan.days.len();
    parts.push(format!("{} training {}", days, if days == 1 { "day" } else { "days" }));
    let exercises = plan.exercise_count();
    parts.push(format!("{} {}", exercises, if exercises == 1 { "exercise" } else { "exercises" }));
    parts.join("   |   ")
}

pub fn render_workout(canvas: &mut Canvas, plan: &WorkoutPlan) -> WorkoutStats {
    let mut stats = WorkoutStats::default();
    let (left, right) = (canvas.left(), canvas.right());
    let width = canvas.content_width();
    let line_height = canvas.config().line_height_mm;
    let name_max = canvas.config().exercise_name_max_chars;
    let muscle_max = canvas.config().muscle_group_max_chars;

    canvas.ensure_space(SECTION_TITLE_HEIGHT + 8.0 + DAY_BAND_HEIGHT + TABLE_HEADER_HEIGHT + TABLE_ROW_HEIGHT);
    section_title(canvas, "Training Plan");

    let plan_name = if plan.name.trim().is_empty() {
        "Workout Plan"
    } else {
        plan.name.trim()
    };
    let title = canvas.place_block(8.0);
    canvas.text(left, title.top + 6.0, plan_name, FontStyle::Bold, SIZE_SUBTITLE + 2.0, COLOR_TEXT);

    if let Some(description) = plan.description.as_deref().filter(|s| !s.trim().is_empty()) {
        canvas.place_wrapped_text(left, width, description, FontStyle::Regular, SIZE_BODY, COLOR_TEXT);
    }

    let meta = canvas.place_block(line_height);
    canvas.text(
        left,
        centered_baseline(meta.top, line_height, SIZE_SMALL),
        &plan_metadata(plan),
        FontStyle::Regular,
        SIZE_SMALL,
        COLOR_GRAY,
    );

    if plan.days.is_empty() {
        canvas.advance(3.0);
        canvas.place_wrapped_text(
            left,
            width,
            "No training days in this plan yet.",
            FontStyle::Italic,
            SIZE_BODY,
            COLOR_GRAY,
        );
        tracing::debug!("Workout plan has no training days");
        return stats;
    }

    let columns = workout_columns(left, width);
    let note_width = width - NOTE_INDENT - 2.0;

    for (day_index, day) in plan.days.iter().enumerate() {
        canvas.advance(4.0);
        // Day band, table header and the first row stay together
        canvas.ensure_space(DAY_BAND_HEIGHT + TABLE_HEADER_HEIGHT + TABLE_ROW_HEIGHT);

        let band = canvas.place_block(DAY_BAND_HEIGHT);
        let color = day_color(day_index);
        canvas.fill_rect(left, band.top, width, DAY_BAND_HEIGHT, color);
        let baseline = centered_baseline(band.top, DAY_BAND_HEIGHT, SIZE_SUBTITLE);
        let day_name = if day.name.trim().is_empty() {
            format!("Day {}", day_index + 1)
        } else {
            day.name.trim().to_string()
        };
        canvas.text(left + 3.0, baseline, &day_name, FontStyle::Bold, SIZE_SUBTITLE, COLOR_WHITE);
        let count = day.exercises.len();
        canvas.text_right(
            right - 3.0,
            baseline,
            &format!("{} {}", count, if count == 1 { "exercise" } else { "exercises" }),
            FontStyle::Regular,
            SIZE_SMALL,
            COLOR_WHITE,
        );
        stats.days += 1;

        if day.exercises.is_empty() {
            canvas.place_wrapped_text(
                left + NOTE_INDENT,
                width - NOTE_INDENT,
                "No exercises scheduled for this day.",
                FontStyle::Italic,
                SIZE_SMALL,
                COLOR_GRAY,
            );
            continue;
        }

        table_header(canvas, &columns);
        stats.header_rows += 1;
        let mut header_page = canvas.cursor().page();

        for (row_index, exercise) in day.exercises.iter().enumerate() {
            let note = exercise.note_text().map(|n| format!("Note: {}", n));
            let note_height = note
                .as_deref()
                .map(|n| wrap_text(n, FontStyle::Italic, SIZE_SMALL, note_width).len() as f32 * line_height)
                .unwrap_or(0.0);

            // A row stays with its note, and every page holding rows of this
            // day starts with the column header
            if !canvas.fits(TABLE_ROW_HEIGHT + note_height) || canvas.cursor().page() != header_page {
                canvas.ensure_space(TABLE_HEADER_HEIGHT + TABLE_ROW_HEIGHT + note_height);
                table_header(canvas, &columns);
                stats.header_rows += 1;
                header_page = canvas.cursor().page();
            }

            let cells = exercise_cells(exercise, name_max, muscle_max);
            let background = if row_index % 2 == 1 { Some(COLOR_ZEBRA) } else { None };
            canvas.place_table_row(
                &columns,
                &cells,
                TABLE_ROW_HEIGHT,
                FontStyle::Regular,
                SIZE_TABLE,
                COLOR_TEXT,
                background,
            );
            stats.rows += 1;

            if let Some(note) = &note {
                stats.note_lines += canvas.place_wrapped_text(
                    left + NOTE_INDENT,
                    note_width,
                    note,
                    FontStyle::Italic,
                    SIZE_SMALL,
                    COLOR_GRAY,
                );
            }
        }

        let end = canvas.cursor().offset();
        canvas.hline(left, right, end, COLOR_LIGHT_GRAY, 0.5);
    }

    tracing::debug!(
        "Rendered {} training days, {} rows, {} header rows",
        stats.days,
        stats.rows,
        stats.header_rows
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use crate::models::WorkoutDay;
    use crate::nutrition::select_cardio;

    fn canvas() -> Canvas {
        Canvas::new("Test", &ReportConfig::default()).unwrap()
    }

    fn day(name: &str, exercises: usize) -> WorkoutDay {
        WorkoutDay::new(
            name,
            (0..exercises)
                .map(|i| {
                    Exercise::new(format!("Exercise {}", i + 1))
                        .muscle("Chest")
                        .prescription(4, "8-10")
                        .load("40")
                        .rest("90")
                })
                .collect(),
        )
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(display_weight(Some("80")), "80 kg");
        assert_eq!(display_weight(Some("22,5")), "22,5 kg");
        assert_eq!(display_weight(Some("bodyweight")), "bodyweight");
        assert_eq!(display_weight(None), "-");
        assert_eq!(display_rest(Some("90")), "90s");
        assert_eq!(display_rest(Some("1-2 min")), "1-2 min");
        assert_eq!(display_rest(Some("  ")), "-");
        assert_eq!(format_number(80.0), "80");
        assert_eq!(format_number(72.5), "72.5");
    }

    #[test]
    fn test_workout_columns_span_content() {
        let columns = workout_columns(15.0, 180.0);
        assert_eq!(columns.len(), 6);
        assert_eq!(columns[0].x, 15.0);
        let last = columns[5];
        assert!((last.x + last.width - 195.0).abs() < 1e-3);

        let narrow = workout_columns(10.0, 150.0);
        let total: f32 = narrow.iter().map(|c| c.width).sum();
        assert!((total - 150.0).abs() < 1e-3);
    }

    #[test]
    fn test_exercise_cells_truncate_and_fill() {
        let exercise = Exercise::new("Single-arm dumbbell row on incline bench with pause")
            .muscle("Latissimus dorsi and rear deltoids");
        let cells = exercise_cells(&exercise, 28, 18);
        assert!(cells[0].ends_with("..."));
        assert!(cells[0].chars().count() <= 28);
        assert!(cells[1].chars().count() <= 18);
        assert_eq!(&cells[2..], &["-", "-", "-", "-"]);
    }

    #[test]
    fn test_student_lines_skip_missing_data() {
        let bare = StudentRecord::new("Ana");
        assert!(student_lines(&bare, None).is_empty());

        let mut student = StudentRecord::new("Ana");
        student.email = Some("ana@example.com".to_string());
        let measurements = MeasurementRecord::new(Some(62.5), None);
        let lines = student_lines(&student, Some(&measurements));
        assert_eq!(lines, vec!["Email: ana@example.com", "Weight: 62.5 kg"]);
    }

    #[test]
    fn test_student_details_fit_card_width() {
        let mut student = StudentRecord::new("Ana");
        student.email = Some("ana.beatriz.carvalho.de.oliveira.personal.training@example-academia.com.br".to_string());
        student.phone = Some("+55 (11) 98765-4321 ramal 2201 / recado com a recepcao".to_string());
        let measurements = MeasurementRecord::new(Some(62.5), Some(165.0));
        let max_width = ReportConfig::default().content_width_mm() - 2.0 * CARD_PADDING;

        let lines = student_detail_lines(&student, Some(&measurements), max_width);
        assert!(lines.len() > student_lines(&student, Some(&measurements)).len());
        for line in &lines {
            assert!(crate::report::text::text_width_mm(line, FontStyle::Regular, SIZE_BODY) <= max_width);
        }

        let mut c = canvas();
        render_student_card(&mut c, &student, Some(&measurements));
        let expected = 15.0 + STUDENT_CARD_BASE + STUDENT_LINE_HEIGHT * lines.len() as f32 + 2.0 + SECTION_GAP;
        assert!((c.cursor().offset() - expected).abs() < 0.001);
    }

    #[test]
    fn test_long_brand_name_is_fitted_to_header() {
        let mut c = canvas();
        let branding = BrandingInfo::new(
            "Centro Integrado de Musculacao, Condicionamento Fisico e Reabilitacao Esportiva Ltda",
        );
        render_header(&mut c, &branding, chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(8, 0, 0).unwrap());
        let width = c.content_width() - 2.0 * CARD_PADDING;
        let fitted = fit_to_width(branding.display_name(), FontStyle::Bold, SIZE_BRAND, width);
        assert!(fitted.ends_with("..."));
        assert!(crate::report::text::text_width_mm(&fitted, FontStyle::Bold, SIZE_BRAND) <= width);
        assert_eq!(c.page_count(), 1);
    }

    #[test]
    fn test_short_plan_stays_on_one_page() {
        let mut c = canvas();
        let plan = WorkoutPlan::new("Starter", vec![day("Day A", 2)]);
        let stats = render_workout(&mut c, &plan);
        assert_eq!(stats.rows, 2);
        assert_eq!(stats.header_rows, 1);
        assert_eq!(c.page_count(), 1);
    }

    #[test]
    fn test_long_day_repeats_table_header() {
        let mut c = canvas();
        let plan = WorkoutPlan::new("Volume", vec![day("Day A", 60)]);
        let stats = render_workout(&mut c, &plan);
        assert_eq!(stats.rows, 60);
        assert!(c.page_count() > 1);
        assert_eq!(stats.header_rows, c.page_count());
    }

    #[test]
    fn test_zero_days_renders_placeholder() {
        let mut c = canvas();
        let plan = WorkoutPlan::new("Empty", Vec::new());
        let stats = render_workout(&mut c, &plan);
        assert_eq!(stats, WorkoutStats::default());
        assert_eq!(c.page_count(), 1);
    }

    #[test]
    fn test_notes_are_wrapped() {
        let mut c = canvas();
        let note = "Pause two seconds at the bottom of each rep and keep the elbows tucked. ".repeat(4);
        let plan = WorkoutPlan::new(
            "Notes",
            vec![WorkoutDay::new("Day A", vec![Exercise::new("Bench Press").note(note)])],
        );
        let stats = render_workout(&mut c, &plan);
        assert!(stats.note_lines >= 2);
    }

    #[test]
    fn test_noted_rows_keep_header_on_every_page() {
        let mut c = canvas();
        let note = "Pause two seconds at the bottom and keep the elbows tucked. ".repeat(3);
        let exercises = (0..40)
            .map(|i| Exercise::new(format!("Exercise {}", i + 1)).prescription(3, "10").note(note.clone()))
            .collect();
        let plan = WorkoutPlan::new("Notes", vec![WorkoutDay::new("Day A", exercises)]);
        let stats = render_workout(&mut c, &plan);
        assert_eq!(stats.rows, 40);
        assert!(c.page_count() > 1);
        assert_eq!(stats.header_rows, c.page_count());
    }

    #[test]
    fn test_cardio_box_with_low_preference() {
        let mut c = canvas();
        let mut anamnesis = AnamnesisRecord::default();
        anamnesis.cardio_preference = Some(false);
        let before = c.cursor().offset();
        render_cardio(&mut c, select_cardio(None), Some(&anamnesis));
        assert!(c.cursor().offset() > before + SECTION_TITLE_HEIGHT);
        assert_eq!(c.page_count(), 1);
    }
}
