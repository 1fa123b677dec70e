use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// Yaamod aliya scheduling tool.
#[derive(Parser)]
#[command(
    name = "yaamod",
    version,
    about = "Hebrew calendar, Torah readings and aliya precedence for a synagogue"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to the Hebrew calendar.
    HebrewDate(HebrewDateArgs),
    /// Print the Torah-reading occasions of a Hebrew year.
    Occasions(OccasionsArgs),
    /// Print the weekly-portion rotation of a Hebrew year.
    Parasha(ParashaArgs),
    /// Rank the members owed an aliya on a date, as JSON.
    Suggest(SuggestArgs),
    /// Propose who to call up for every aliya of a date.
    Plan(PlanArgs),
    /// List a member's upcoming yahrzeit Sabbaths.
    Yahrzeits(YahrzeitsArgs),
}

/// Arguments for the `hebrew-date` subcommand.
#[derive(clap::Args)]
pub struct HebrewDateArgs {
    /// Gregorian date (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: NaiveDate,

    /// The event happened after sunset, so the Hebrew day has already turned.
    #[arg(long)]
    pub after_sunset: bool,
}

/// Arguments for the `occasions` subcommand.
#[derive(clap::Args)]
pub struct OccasionsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "yaamod.toml")]
    pub config: PathBuf,

    /// Hebrew year (Anno Mundi), e.g. 5785.
    #[arg(short, long)]
    pub year: i32,
}

/// Arguments for the `parasha` subcommand.
#[derive(clap::Args)]
pub struct ParashaArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "yaamod.toml")]
    pub config: PathBuf,

    /// Hebrew year (Anno Mundi), e.g. 5785.
    #[arg(short, long)]
    pub year: i32,
}

/// Hereditary status selectable on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Cohen,
    Levi,
    Israel,
}

/// Arguments for the `suggest` subcommand.
#[derive(clap::Args)]
pub struct SuggestArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "yaamod.toml")]
    pub config: PathBuf,

    /// Gregorian date of the reading (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: NaiveDate,

    /// Only rank members of this hereditary status.
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,
}

/// Arguments for the `plan` subcommand.
#[derive(clap::Args)]
pub struct PlanArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "yaamod.toml")]
    pub config: PathBuf,

    /// Gregorian date of the reading (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: NaiveDate,
}

/// Arguments for the `yahrzeits` subcommand.
#[derive(clap::Args)]
pub struct YahrzeitsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "yaamod.toml")]
    pub config: PathBuf,

    /// Member id from the roster.
    #[arg(short, long)]
    pub person: u32,

    /// Start date (YYYY-MM-DD); defaults to today.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}
