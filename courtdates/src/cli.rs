use std::path::PathBuf;

use cd_engine::{CaseType, Squad};
use cd_time::Date;
use clap::{Args, Parser, Subcommand};
use courtdates::config::OutputFormat;

/// Top-level CLI parser for the `courtcal` binary.
#[derive(Debug, Parser)]
#[command(
    name = "courtcal",
    version,
    about = "Court appearance and fingerprint appointment dates"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json (overrides the configured format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Reference data TOML (overrides the configured data path)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Court date and fingerprint appointment for a new case
    Resolve(ResolveArgs),

    /// Squads on duty on a date
    Squads {
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<Date>,
    },

    /// Holidays for a year
    Holidays {
        /// Year; defaults to the current year
        #[arg(long)]
        year: Option<u16>,
    },

    /// Court cities and how each schedules its sittings
    Cities,

    /// Operator notes
    Notes {
        #[command(subcommand)]
        action: NotesAction,
    },
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Court city, e.g. new-westminster
    #[arg(long)]
    pub city: String,

    /// Case type: adult or youth
    #[arg(long, default_value = "adult")]
    pub case_type: CaseType,

    /// Last name or its first letter
    #[arg(long)]
    pub initial: Option<String>,

    /// Weeks from today to aim for (1-52)
    #[arg(long, default_value_t = 1)]
    pub weeks: u32,

    /// Issuing squad: A, B, C or D
    #[arg(long)]
    pub squad: Squad,

    /// Override today's date (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<Date>,
}

#[derive(Debug, Subcommand)]
pub enum NotesAction {
    /// Print the saved notes
    Show,
    /// Replace the saved notes
    Save {
        /// Note text
        text: String,
    },
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn resolve_arguments_parse() {
        let cli = Cli::try_parse_from([
            "courtcal",
            "resolve",
            "--city",
            "richmond",
            "--case-type",
            "youth",
            "--initial",
            "Singh",
            "--weeks",
            "3",
            "--squad",
            "c",
            "--today",
            "2025-10-07",
            "--format",
            "json",
        ])
        .expect("cli should parse");
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.city, "richmond");
                assert_eq!(args.case_type, CaseType::Youth);
                assert_eq!(args.initial.as_deref(), Some("Singh"));
                assert_eq!(args.weeks, 3);
                assert_eq!(args.squad, Squad::C);
                assert_eq!(args.today, Some(Date::from_ymd(2025, 10, 7).unwrap()));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(Cli::try_parse_from(["courtcal", "resolve", "--city", "x", "--squad", "E"]).is_err());
        assert!(Cli::try_parse_from(["courtcal", "squads", "--date", "15/10/2025"]).is_err());
        assert!(Cli::try_parse_from(["courtcal", "--format", "xml", "cities"]).is_err());
    }

    #[test]
    fn notes_save_takes_text() {
        let cli = Cli::try_parse_from(["courtcal", "notes", "save", "call back Tuesday"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Notes { action: NotesAction::Save { ref text } } if text == "call back Tuesday"
        ));
    }
}
