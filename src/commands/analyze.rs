use crate::core::ExamReport;
use crate::io::{self, create_writer, find_report_files, load_reports, OutputFormat};
use crate::scoring::{calculate_exam_scores, collect_scores};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Configuration for the analyze command.
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub skip_invalid: bool,
}

/// Run the full pipeline: discover report files, parse them, collect the
/// per-technique scores, reduce to EXAM scores, then render to stdout and
/// write the JSON result file.
pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    if !config.path.is_dir() {
        bail!("Report path is not a directory: {}", config.path.display());
    }

    let files = find_report_files(&config.path)?;
    if files.is_empty() {
        bail!("No report files found in {}", config.path.display());
    }
    log::info!(
        "Found {} report file(s) in {}",
        files.len(),
        config.path.display()
    );

    let reports = load_reports(&files, config.skip_invalid)?;
    if reports.is_empty() {
        bail!("All {} report file(s) were skipped as invalid", files.len());
    }

    let aggregated = collect_scores(&reports)?;
    let exam_scores = calculate_exam_scores(&aggregated)?;
    let report = ExamReport::new(reports.len(), exam_scores);

    let mut writer = create_writer(std::io::stdout(), config.format);
    writer.write_report(&report)?;

    let result_path = result_path(&config);
    let json = serde_json::to_string_pretty(&report)?;
    io::write_file(&result_path, &json)
        .with_context(|| format!("Failed to write result file: {}", result_path.display()))?;
    log::info!("Wrote EXAM scores to {}", result_path.display());

    Ok(())
}

fn result_path(config: &AnalyzeConfig) -> PathBuf {
    config
        .output
        .clone()
        .unwrap_or_else(|| config.path.join(io::RESULT_FILE_NAME))
}
