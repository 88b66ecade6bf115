//! The two-stage score reduction: collect per-technique line scores across
//! reports, then reduce each technique's sequence to its EXAM score.

pub mod collector;
pub mod exam;

pub use collector::collect_scores;
pub use exam::calculate_exam_scores;
