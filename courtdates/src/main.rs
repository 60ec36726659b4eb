use anyhow::Context;
use clap::Parser;
use courtdates::config::{load_reference_data, CourtcalConfig};
use courtdates::notes::NotesStore;

mod cli;
mod commands;

fn main() {
    if let Err(error) = run() {
        eprintln!("courtcal error: {error:#}");
        let user_fixable = error
            .downcast_ref::<cd_core::Error>()
            .is_some_and(cd_core::Error::is_user_fixable);
        std::process::exit(if user_fixable { 2 } else { 1 });
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = CourtcalConfig::load().context("failed to load courtcal configuration")?;
    let format = cli.format.unwrap_or(config.format);

    if let cli::Commands::Notes { action } = &cli.command {
        return commands::notes(action, &NotesStore::new(config.notes_path()));
    }

    let data = match &cli.data {
        Some(path) => load_reference_data(path)?,
        None => config.reference_data()?,
    };

    match &cli.command {
        cli::Commands::Resolve(args) => commands::resolve(args, &data, format),
        cli::Commands::Squads { date } => commands::squads(*date, &data, format),
        cli::Commands::Holidays { year } => commands::holidays(*year, &data, format),
        cli::Commands::Cities => commands::cities(&data, format),
        cli::Commands::Notes { .. } => Ok(()),
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

    let filter = tracing_subscriber::EnvFilter::try_from_env("COURTCAL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
