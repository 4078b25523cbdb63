//! cockroach - auxiliary file generation
//!
//! Parses `cockroach gen ...`, runs the selected operation and maps its
//! outcome to the process exit code.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roachgen_cli::{Cli, CliContext, Commands, Dispatcher};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries reports and confirmations
    let default_filter = if cli.verbose {
        "roachgen_core=debug,roachgen_cli=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let context = CliContext::from_cli(&cli)?;
    let stdout = std::io::stdout();
    let dispatcher = Dispatcher::new(context, stdout.lock());

    match cli.command {
        Commands::Gen(cmd) => dispatcher.dispatch(cmd).into_result()?,
    }

    Ok(())
}
