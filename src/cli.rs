use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Terminal,
    /// Pretty-printed JSON document
    Json,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "faultmap")]
#[command(about = "Fault localization effectiveness analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Aggregate suspiciousness reports and compute per-technique EXAM scores
    Analyze {
        /// Directory containing suspiciousness report JSON files
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Result file (defaults to exam-scores.json inside the report directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip malformed report files instead of aborting
        #[arg(long = "skip-invalid")]
        skip_invalid: bool,
    },
}
