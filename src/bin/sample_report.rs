//! Render a demo report with built-in data
//! Usage: cargo run --bin sample_report -- [output.pdf]

use tracing_subscriber::EnvFilter;

use fitreport::models::{
    AnamnesisRecord, BrandingInfo, Exercise, Gender, MainGoal, MeasurementRecord, ReportRequest,
    StudentRecord, WorkoutDay, WorkoutPlan,
};
use fitreport::{ReportConfig, ReportGenerator};

fn sample_request() -> ReportRequest {
    let mut student = StudentRecord::new("João Silva").with_gender(Gender::Male);
    student.email = Some("joao.silva@example.com".to_string());
    student.phone = Some("+55 11 98765-4321".to_string());
    student.birth_date = Some("1992-08-14".to_string());

    let push = WorkoutDay::new(
        "Day A - Push",
        vec![
            Exercise::new("Barbell Bench Press")
                .muscle("Chest")
                .prescription(4, "6-8")
                .load("70")
                .rest("120"),
            Exercise::new("Incline Dumbbell Press")
                .muscle("Upper chest")
                .prescription(3, "8-10")
                .load("24")
                .rest("90"),
            Exercise::new("Seated Overhead Press")
                .muscle("Shoulders")
                .prescription(3, "8-10")
                .load("40")
                .rest("90")
                .note("Keep the ribs down and avoid arching the lower back."),
            Exercise::new("Cable Triceps Pushdown")
                .muscle("Triceps")
                .prescription(3, "12-15")
                .rest("60"),
        ],
    );
    let pull = WorkoutDay::new(
        "Day B - Pull",
        vec![
            Exercise::new("Pull-up")
                .muscle("Back")
                .prescription(4, "AMRAP")
                .load("bodyweight")
                .rest("120"),
            Exercise::new("Single-arm dumbbell row on incline bench with pause")
                .muscle("Latissimus dorsi and rear deltoids")
                .prescription(3, "10")
                .load("30")
                .rest("90"),
            Exercise::new("Barbell Curl")
                .muscle("Biceps")
                .prescription(3, "10-12")
                .load("25")
                .rest("60"),
        ],
    );
    let legs = WorkoutDay::new(
        "Day C - Legs",
        vec![
            Exercise::new("Back Squat")
                .muscle("Quadriceps")
                .prescription(4, "6-8")
                .load("100")
                .rest("150")
                .note("Pause one second at the bottom on the last set."),
            Exercise::new("Romanian Deadlift")
                .muscle("Hamstrings")
                .prescription(3, "8-10")
                .load("80")
                .rest("120"),
            Exercise::new("Walking Lunge")
                .muscle("Glutes")
                .prescription(3, "12 each leg")
                .load("2x16")
                .rest("90"),
            Exercise::new("Standing Calf Raise")
                .muscle("Calves")
                .prescription(4, "15")
                .rest("45"),
        ],
    );

    let mut plan = WorkoutPlan::new("Hypertrophy Block - 8 weeks", vec![push, pull, legs]);
    plan.description = Some(
        "Three-day split focused on progressive overload. Add load when every set reaches the top \
         of the rep range with good form."
            .to_string(),
    );
    plan.plan_type = Some("Push/Pull/Legs".to_string());
    plan.difficulty = Some("Intermediate".to_string());

    let mut anamnesis = AnamnesisRecord::with_goal(MainGoal::MuscleGain)
        .frequency(4)
        .target(84.0);
    anamnesis.session_duration = Some(60);

    ReportRequest::new(student, plan, BrandingInfo::new("Iron Gym Personal Training"))
        .with_measurements(MeasurementRecord::new(Some(80.0), Some(175.0)))
        .with_anamnesis(anamnesis)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fitreport=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let output = args.get(1).map(|s| s.as_str()).unwrap_or("sample_report.pdf");

    let report = ReportGenerator::new(ReportConfig::from_env()).render(&sample_request())?;
    std::fs::write(output, &report.bytes)?;

    println!("Sample report written to {}", output);
    println!("  Pages: {}", report.page_count);
    println!("  Size: {} bytes", report.bytes.len());
    if let Some(nutrition) = &report.nutrition {
        println!(
            "  Target: {:.0} kcal (P {:.0} g / C {:.0} g / F {:.0} g)",
            nutrition.target_calories,
            nutrition.macros.protein_grams,
            nutrition.macros.carb_grams,
            nutrition.macros.fat_grams
        );
    }

    Ok(())
}
