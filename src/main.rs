use anyhow::Result;
use clap::Parser;
use faultmap::cli::{Cli, Commands};
use faultmap::commands::{handle_analyze, AnalyzeConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            skip_invalid,
        } => handle_analyze(AnalyzeConfig {
            path,
            format: format.into(),
            output,
            skip_invalid,
        }),
    }
}
