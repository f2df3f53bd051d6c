use anyhow::{Context, Result};
use clap::Parser;

use public_path_reconciler::cli::{Cli, run};
use public_path_reconciler::logging;

fn main() {
    logging::init();

    if let Err(err) = try_main() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    println!("{}", run(&cli, &cwd)?);
    Ok(())
}
