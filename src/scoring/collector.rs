//! Score collection: flattens report hierarchies into per-technique
//! score sequences.

use crate::core::{AggregatedScores, Error, Result, SuspiciousnessReport};
use rayon::prelude::*;
use std::collections::HashMap;

/// Collect every line-level suspiciousness score from the given reports,
/// keyed by technique name.
///
/// Scores found under the same technique name in different reports are
/// concatenated into one sequence; the inner assembly/file/class/method/line
/// identities are traversal structure only and never merged across reports.
/// The resulting key set is exactly the union of technique names seen across
/// all reports. Techniques absent from every report never appear.
///
/// Reports are flattened independently on rayon workers into private partial
/// maps that are merged by per-key concatenation. Merge order does not affect
/// the reduced scores, which depend only on sum and count.
///
/// Fails with [`Error::Structure`] when a report carries a non-finite score.
pub fn collect_scores(reports: &[SuspiciousnessReport]) -> Result<AggregatedScores> {
    reports
        .par_iter()
        .map(flatten_report)
        .try_reduce(HashMap::new, |mut acc, partial| {
            merge_scores(&mut acc, partial);
            Ok(acc)
        })
}

/// Flatten one report into a partial per-technique mapping.
fn flatten_report(report: &SuspiciousnessReport) -> Result<AggregatedScores> {
    let mut scores: AggregatedScores = HashMap::new();

    for (name, technique) in &report.techniques {
        let collected = scores.entry(name.clone()).or_default();
        for assembly in technique.assemblies.values() {
            for file in assembly.files.values() {
                for class in file.classes.values() {
                    for method in class.methods.values() {
                        for line in method.lines.values() {
                            if !line.score.is_finite() {
                                return Err(Error::structure(format!(
                                    "non-finite suspiciousness score for technique '{name}'"
                                )));
                            }
                            collected.push(line.score);
                        }
                    }
                }
            }
        }
    }

    Ok(scores)
}

/// Merge a partial mapping into the accumulator by concatenating the
/// per-technique score sequences.
fn merge_scores(acc: &mut AggregatedScores, partial: AggregatedScores) {
    for (technique, mut scores) in partial {
        acc.entry(technique).or_default().append(&mut scores);
    }
}
