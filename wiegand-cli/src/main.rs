use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wiegand_cli::{commands, Cli};

fn main() -> ExitCode {
    // clap exits with status 2 on usage errors
    let cli = Cli::parse();

    // Setup logging; stderr stays quiet apart from warnings unless verbose
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wiegand-tx: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.tx.to_config()?;

    if cli.dry_run {
        commands::preview::execute(&config, cli.json)?;
    } else {
        commands::transmit::execute(&config)?;
    }

    Ok(())
}
