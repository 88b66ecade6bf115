//! EXAM score reduction over aggregated suspiciousness scores.

use crate::core::{AggregatedScores, Error, ExamScores, Result};

/// Reduce each technique's score sequence to its EXAM score.
///
/// The output key set is identical to the input key set; nothing is
/// filtered. An empty sequence means the upstream collector broke its
/// contract and fails with [`Error::EmptyScoreSet`] rather than producing
/// 0 or NaN.
pub fn calculate_exam_scores(aggregated: &AggregatedScores) -> Result<ExamScores> {
    aggregated
        .iter()
        .map(|(technique, scores)| {
            let exam = exam_score(scores).ok_or_else(|| Error::EmptyScoreSet {
                technique: technique.clone(),
            })?;
            Ok((technique.clone(), exam))
        })
        .collect()
}

/// EXAM score for one technique: each score is divided by the sequence
/// length `n`, the quotients are summed, and the sum is divided by `n`
/// again. The double division (algebraically `sum(s_i) / n^2`) is the
/// published scale; it is kept in this literal form rather than simplified.
/// Returns `None` for an empty sequence.
fn exam_score(scores: &[f64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let n = scores.len() as f64;
    let normalized_sum: f64 = scores.iter().map(|s| s / n).sum();
    Some(round4(normalized_sum / n))
}

/// Round to 4 decimal places, halves away from zero.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
