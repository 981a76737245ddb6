use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::DateTime;
use chrono_tz::Tz;
use clap::Parser;
use tessen_core::config::load_config;
use tessen_core::logging::{apply_level, init_tracing};
use tessen_rfc::error::RfcResult;
use tessen_rfc::rfc::ical::build::{EncodeOptions, encode};
use tessen_rfc::rfc::ical::core::{Calendar, EventStatus, prop_names};
use tessen_rfc::rfc::ical::parse::decode;

#[derive(Parser, Debug)]
#[command(name = "tessen")]
#[command(about = "Summarize and re-encode iCalendar files", long_about = None)]
struct Cli {
    /// Print each calendar re-encoded after its summary
    #[arg(long)]
    encode: bool,

    /// iCalendar files to read
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter_handle = init_tracing("info")?;

    tracing::info!("Starting tessen");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    apply_level(&filter_handle, &config.logging.level);

    let tz = config.ical.timezone()?;
    let options = EncodeOptions::from(&config.ical);

    for path in &cli.files {
        let calendar = read_calendar(path)?;
        print_summary(path, &calendar, tz)
            .with_context(|| format!("Failed to summarize {}", path.display()))?;

        if cli.encode {
            print!("{}", encode(&calendar, &options));
        }
    }

    Ok(())
}

fn read_calendar(path: &Path) -> anyhow::Result<Calendar> {
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    decode(&input).with_context(|| format!("Failed to decode {}", path.display()))
}

fn print_summary(path: &Path, calendar: &Calendar, tz: Option<Tz>) -> RfcResult<()> {
    println!("{}: {}", path.display(), calendar.product_id()?);

    for event in calendar.events() {
        let props = event.props();
        let summary = props.text(prop_names::SUMMARY)?;
        let start = event.date_time_start(tz)?;
        let end = event.date_time_end(tz)?;
        let status = event.status()?.map_or("-", EventStatus::as_str);

        println!(
            "  {} [{} -> {}] {status} {summary}",
            props.text(prop_names::UID)?,
            format_instant(start.as_ref()),
            format_instant(end.as_ref()),
        );
    }

    Ok(())
}

fn format_instant(dt: Option<&DateTime<Tz>>) -> String {
    dt.map_or_else(|| "-".to_string(), |dt| dt.format("%Y-%m-%d %H:%M %Z").to_string())
}
