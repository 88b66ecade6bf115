use assert_cmd::Command;
use faultmap::io::RESULT_FILE_NAME;
use faultmap::ExamReport;
use indoc::indoc;
use tempfile::TempDir;

const REPORT: &str = indoc! {r#"
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
                            "12": { "Score": 0.0 },
                            "13": { "Score": 1.0 }
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
fn test_analyze_succeeds_and_writes_scores() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("run.json"), REPORT).unwrap();

    Command::cargo_bin("faultmap")
        .unwrap()
        .arg("analyze")
        .arg(temp_dir.path())
        .assert()
        .success();

    let result_path = temp_dir.path().join(RESULT_FILE_NAME);
    let report: ExamReport =
        serde_json::from_str(&std::fs::read_to_string(&result_path).unwrap()).unwrap();
    assert_eq!(report.exam_scores["Tarantula"], 0.25);
}

#[test]
fn test_analyze_json_format_prints_the_document() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("run.json"), REPORT).unwrap();

    let output = Command::cargo_bin("faultmap")
        .unwrap()
        .arg("analyze")
        .arg(temp_dir.path())
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: ExamReport = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report.exam_scores["Tarantula"], 0.25);
}

#[test]
fn test_analyze_fails_on_a_missing_directory() {
    Command::cargo_bin("faultmap")
        .unwrap()
        .arg("analyze")
        .arg("/definitely/not/a/directory")
        .assert()
        .failure();
}

#[test]
fn test_analyze_respects_the_output_override() {
    let temp_dir = TempDir::new().unwrap();
    let report_dir = temp_dir.path().join("reports");
    std::fs::create_dir_all(&report_dir).unwrap();
    std::fs::write(report_dir.join("run.json"), REPORT).unwrap();
    let out_path = temp_dir.path().join("custom-scores.json");

    Command::cargo_bin("faultmap")
        .unwrap()
        .arg("analyze")
        .arg(&report_dir)
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success();

    assert!(out_path.exists());
    assert!(!report_dir.join(RESULT_FILE_NAME).exists());
}
