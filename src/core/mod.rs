pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{
    AggregatedScores, Assembly, ClassEntry, ExamReport, ExamScores, FileEntry, LineEntry,
    MethodEntry, SuspiciousnessReport, Technique,
};
