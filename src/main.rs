//! Fitness Report Engine (fitreport)
//!
//! Renders a report request (JSON) to a PDF file.
//! Usage: fitreport <request.json> [output.pdf]

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use fitreport::build_info::{self, BuildInfo};
use fitreport::models::ReportRequest;
use fitreport::{ReportConfig, ReportGenerator};

const DEFAULT_OUTPUT: &str = "report.pdf";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the JSON summary
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fitreport=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let args: Vec<String> = std::env::args().collect();
    let Some(input_path) = args.get(1).map(PathBuf::from) else {
        eprintln!("Usage: fitreport <request.json> [output.pdf]");
        std::process::exit(2);
    };
    let output_path = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let raw = std::fs::read_to_string(&input_path)?;
    let request: ReportRequest = serde_json::from_str(&raw).map_err(fitreport::ReportError::from)?;

    let config = ReportConfig::from_env();
    let report = ReportGenerator::new(config).render(&request)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&output_path, &report.bytes)?;

    let summary = serde_json::json!({
        "success": true,
        "file_path": output_path.display().to_string(),
        "page_count": report.page_count,
        "bytes": report.bytes.len(),
        "sections": report.sections,
        "target_calories": report.nutrition.as_ref().map(|n| n.target_calories),
        "cardio_goal": report.cardio.goal.as_str(),
        "training_days": report.workout.days,
        "exercises": report.workout.rows,
        "generator": BuildInfo::current().producer(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
