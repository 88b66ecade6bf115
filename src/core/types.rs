//! Data model for suspiciousness reports and the score maps derived from them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One parsed suspiciousness report, produced by a single
/// fault-localization technique run.
///
/// A report owns a five-level hierarchy: technique name, then assembly,
/// file, class, method, and finally line. Every level is a map with unique
/// keys within its parent. Only the technique name is meaningful across
/// reports; the inner levels exist purely as traversal structure on the way
/// to the line scores.
///
/// Field names follow the PascalCase wire format emitted by the technique
/// runners.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SuspiciousnessReport {
    pub techniques: HashMap<String, Technique>,
}

/// Scores produced by one technique, grouped by assembly.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Technique {
    pub assemblies: HashMap<String, Assembly>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Assembly {
    pub files: HashMap<String, FileEntry>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileEntry {
    pub classes: HashMap<String, ClassEntry>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClassEntry {
    pub methods: HashMap<String, MethodEntry>,
}

/// A method's line-level scores, keyed by line number.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MethodEntry {
    pub lines: HashMap<u32, LineEntry>,
}

/// Leaf of the report hierarchy: one suspiciousness score for one line.
/// Typically in [0, 1] but not required to be bounded; must be finite.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LineEntry {
    pub score: f64,
}

/// Per-technique score sequences concatenated across all input reports.
/// Order within a sequence is irrelevant to the reduced result.
pub type AggregatedScores = HashMap<String, Vec<f64>>;

/// Per-technique EXAM scores, rounded to 4 decimal places.
pub type ExamScores = HashMap<String, f64>;

/// The result document written after an analysis run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExamReport {
    pub timestamp: DateTime<Utc>,
    pub reports_aggregated: usize,
    pub exam_scores: BTreeMap<String, f64>,
}

impl ExamReport {
    pub fn new(reports_aggregated: usize, scores: ExamScores) -> Self {
        Self {
            timestamp: Utc::now(),
            reports_aggregated,
            exam_scores: scores.into_iter().collect(),
        }
    }
}
