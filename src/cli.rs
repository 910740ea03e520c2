use std::path::PathBuf;

use clap::Parser;

/// Prints the first day of the week containing each date.
#[derive(Parser)]
#[command(
    name = "firstday",
    version,
    about = "Print the first day of the week containing a date"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Week start: "sunday", or anything else for monday. Overrides config.
    #[arg(short, long)]
    pub basis: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// strftime output format. Overrides config.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Dates to resolve: RFC 3339, `YYYY-MM-DDTHH:MM[:SS]` or `YYYY-MM-DD`.
    /// Defaults to now.
    pub dates: Vec<String>,
}
