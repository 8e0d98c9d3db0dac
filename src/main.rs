//! CLI entry point for the tile reassembly solver

use clap::Parser;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use tilestitch::io::cli::{Cli, FileProcessor};

fn main() -> tilestitch::Result<()> {
    let cli = Cli::parse();
    let _ = TermLogger::init(
        cli.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
