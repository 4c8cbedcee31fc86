use anyhow::Result;
use clap::Parser;
use gci::cli::Cli;
use gci::commands::analyze::{handle_analyze, AnalyzeConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AnalyzeConfig {
        path: cli.path,
        format: cli.format.into(),
        output: cli.output,
    };

    handle_analyze(config)
}
