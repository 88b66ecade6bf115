pub mod output;
pub mod reports;
pub mod walker;

pub use output::{create_writer, OutputFormat, OutputWriter};
pub use reports::{load_reports, parse_report_file, read_report};
pub use walker::{find_report_files, ReportWalker, RESULT_FILE_NAME};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
