//! Resolve command: print the week start of each date argument.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{debug, info, info_span};

use firstday_week::{DateValue, first_day_of_week};

use crate::cli::Cli;
use crate::config::FirstdayConfig;
use crate::convert::{self, Settings};

/// Run the resolver over the CLI arguments and print one line per date.
pub fn run(cli: Cli) -> Result<()> {
    let _cmd = info_span!("resolve").entered();

    // 1. Load optional TOML config
    let config = match cli.config {
        Some(ref path) => FirstdayConfig::load(path)?,
        None => FirstdayConfig::default(),
    };
    debug!(?config, "configuration loaded");

    // 2. Merge CLI flags over config
    let settings = convert::build_settings(cli.basis.as_deref(), cli.format.as_deref(), &config)?;
    debug!(basis = %settings.basis, format = ?settings.format, "settings resolved");

    // 3. Parse inputs, defaulting to now
    let dates = if cli.dates.is_empty() {
        vec![DateValue::from(Local::now())]
    } else {
        parse_dates(&cli.dates)?
    };

    // 4. Resolve and print
    for line in resolve_all(&dates, &settings)? {
        println!("{line}");
    }
    Ok(())
}

/// Parses every date argument, naming the first one that fails.
pub fn parse_dates(args: &[String]) -> Result<Vec<DateValue>> {
    args.iter()
        .map(|arg| {
            arg.parse::<DateValue>()
                .with_context(|| format!("invalid date argument {arg:?}"))
        })
        .collect()
}

/// Computes and renders the week start of each date.
pub fn resolve_all(dates: &[DateValue], settings: &Settings) -> Result<Vec<String>> {
    dates
        .iter()
        .map(|date| {
            let start = first_day_of_week(date, settings.basis)
                .with_context(|| format!("failed to resolve week start of {date}"))?;
            info!(%date, %start, basis = %settings.basis, "resolved week start");
            render(&start, settings)
        })
        .collect()
}

fn render(value: &DateValue, settings: &Settings) -> Result<String> {
    match settings.format {
        Some(ref f) => value
            .format(f)
            .map_err(|_| anyhow::anyhow!("failed to format {value} with {f:?}")),
        None => Ok(value.to_string()),
    }
}
