#![allow(dead_code)]

use clap::Parser;

mod cli;
mod commands;
mod context;
mod form;
mod output;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("intake error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    match &cli.command {
        cli::Commands::Submit(args) => {
            let config = context::load_config()?;
            context::warn_unconfigured(&config);
            commands::submit::handle(args, &config, &flags).await
        }
        cli::Commands::Validate(args) => commands::validate::handle(args, &flags),
        cli::Commands::Prefill(args) => commands::prefill::handle(args, &flags),
        cli::Commands::Schema(args) => commands::schema::handle(args, &flags),
        cli::Commands::Services => commands::services::handle(&flags),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("INTAKE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
