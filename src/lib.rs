// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod core;
pub mod io;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    AggregatedScores, Assembly, ClassEntry, Error, ExamReport, ExamScores, FileEntry, LineEntry,
    MethodEntry, SuspiciousnessReport, Technique,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::scoring::{calculate_exam_scores, collect_scores};
