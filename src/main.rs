//! CLI entry point for batch texture complexity measurement

use clap::Parser;
use texcomplex::io::cli::{Cli, FileProcessor};

fn main() -> texcomplex::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
