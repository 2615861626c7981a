//! csv_summary: summarize a people CSV and check the result.
//!
//! Exits 1 when any check fails. `--naive` runs the lab's baseline
//! comma-splitting reader to show where it breaks.

use anyhow::{Context, Result};
use clap::Parser;
use codelabs::{
    check::{csv_lab::DEFAULT_PEOPLE_CSV, run_csv_lab},
    logging::init_logging,
    table::{ParseMode, SummaryColumns},
};
use std::{path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(author, version, about = "CSV summary lab: row count, average age, unique cities")]
struct Args {
    /// CSV file with a header row containing the age and city columns
    #[arg(default_value = DEFAULT_PEOPLE_CSV)]
    path: PathBuf,
    /// Use the flawed comma-splitting reader
    #[arg(long)]
    naive: bool,
    #[arg(long, default_value = "age")]
    age_column: String,
    #[arg(long, default_value = "city")]
    city_column: String,
    /// Print the computed summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    init_logging("info");
    let args = Args::parse();

    let mode = if args.naive {
        ParseMode::Naive
    } else {
        ParseMode::QuoteAware
    };
    let columns = SummaryColumns {
        age: args.age_column,
        city: args.city_column,
    };

    println!("Running CsvSummaryLab ({} reader)...\n", mode.as_str());
    let run = run_csv_lab(&args.path, mode, &columns);

    if let Some(summary) = &run.summary {
        if args.json {
            let json = serde_json::to_string_pretty(summary).context("serializing summary")?;
            println!("{json}\n");
        } else {
            println!("Computed summary: {summary}\n");
        }
    }

    print!("{}", run.report);
    println!("\n{}", run.report.summary_line());
    Ok(run.report.exit_code())
}
