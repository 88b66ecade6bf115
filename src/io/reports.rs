use crate::core::errors::{self, Error};
use crate::core::SuspiciousnessReport;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Read and deserialize one suspiciousness report.
///
/// Read failures surface as [`Error::Io`]; a document that does not conform
/// to the five-level report hierarchy surfaces as [`Error::Structure`]
/// carrying the offending file path.
pub fn read_report(path: &Path) -> errors::Result<SuspiciousnessReport> {
    let content = std::fs::read_to_string(path)?;

    let report: SuspiciousnessReport = serde_json::from_str(&content)
        .map_err(|err| Error::structure_in(path, err.to_string()))?;

    Ok(report)
}

/// [`read_report`] with the file path attached to the error chain.
pub fn parse_report_file(path: &Path) -> Result<SuspiciousnessReport> {
    read_report(path).with_context(|| format!("Failed to load report file: {}", path.display()))
}

/// Load the given report files.
///
/// With `skip_invalid`, a malformed report is logged and dropped instead of
/// aborting the run; otherwise the first failure propagates. The policy
/// lives here, not in the collector.
pub fn load_reports(paths: &[PathBuf], skip_invalid: bool) -> Result<Vec<SuspiciousnessReport>> {
    let mut reports = Vec::with_capacity(paths.len());
    for path in paths {
        match parse_report_file(path) {
            Ok(report) => reports.push(report),
            Err(err) if skip_invalid => {
                log::warn!("Skipping report {}: {:#}", path.display(), err);
            }
            Err(err) => return Err(err),
        }
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    const VALID_REPORT: &str = indoc! {r#"
        {
          "Techniques": {
            "Tarantula": {
              "Assemblies": {
                "App.dll": {
                  "Files": {
                    "src/Calculator.cs": {
                      "Classes": {
                        "Calculator": {
                          "Methods": {
                            "Add(int,int)": {
                              "Lines": {
                                "12": { "Score": 0.2 },
                                "13": { "Score": 0.8 }
                              }
                            }
                          }
                        }
                      }
                    }
                  }
                }
              }
            }
          }
        }
    "#};

    #[test]
    fn test_parse_report_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("run-a.json");
        std::fs::write(&path, VALID_REPORT).unwrap();

        let report = parse_report_file(&path).unwrap();

        assert!(report.techniques.contains_key("Tarantula"));
    }

    #[test]
    fn test_parse_failure_carries_the_file_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = parse_report_file(&path).unwrap_err();

        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_malformed_document_is_a_structure_error() {
        // Missing the Techniques level entirely.
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{}").unwrap();

        let err = read_report(&path).unwrap_err();

        assert!(
            matches!(err, Error::Structure { path: Some(ref p), .. } if p == &path),
            "expected a structure error for {}, got {err:?}",
            path.display()
        );
    }

    #[test]
    fn test_unreadable_file_is_an_io_error() {
        let err = read_report(Path::new("/definitely/not/a/report.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_reports_aborts_on_first_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.json");
        let bad = temp_dir.path().join("bad.json");
        std::fs::write(&good, VALID_REPORT).unwrap();
        std::fs::write(&bad, "{}").unwrap();

        let result = load_reports(&[bad, good], false);

        assert!(result.is_err());
    }

    #[test]
    fn test_load_reports_skips_malformed_files_when_asked() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.json");
        let bad = temp_dir.path().join("bad.json");
        std::fs::write(&good, VALID_REPORT).unwrap();
        std::fs::write(&bad, "{}").unwrap();

        let reports = load_reports(&[bad, good], true).unwrap();

        assert_eq!(reports.len(), 1);
    }
}
