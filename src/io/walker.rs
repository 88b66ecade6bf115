use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Name of the result file written next to the input reports. Excluded from
/// discovery so a rerun does not read its own output back as a report.
pub const RESULT_FILE_NAME: &str = "exam-scores.json";

pub struct ReportWalker {
    root: PathBuf,
}

impl ReportWalker {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Find all report files directly inside the root directory, sorted for
    /// a deterministic processing order. Subdirectories are not descended
    /// into; report folders are flat.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry?;
            if entry.file_type().is_file() && is_report_file(entry.path()) {
                files.push(entry.path().to_path_buf());
            }
        }
        files.sort();
        Ok(files)
    }
}

fn is_report_file(path: &Path) -> bool {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let is_result_file = path.file_name().is_some_and(|name| name == RESULT_FILE_NAME);
    is_json && !is_result_file
}

pub fn find_report_files(root: &Path) -> Result<Vec<PathBuf>> {
    ReportWalker::new(root.to_path_buf()).walk()
}
