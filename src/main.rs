use anyhow::{Context, Result};
use clap::Parser;
use codelabs::{
    check::{
        csv_lab::DEFAULT_PEOPLE_CSV, password_lab::select_policy, run_csv_lab, run_password_lab,
        Report,
    },
    logging::init_logging,
    table::{ParseMode, SummaryColumns},
};
use std::{path::PathBuf, process::ExitCode};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "Run every lab and report the combined result")]
struct Args {
    /// Run the flawed baselines instead of the corrected implementations
    #[arg(long)]
    naive: bool,
    #[arg(long, default_value = DEFAULT_PEOPLE_CSV)]
    csv: PathBuf,
    /// YAML password policy file
    #[arg(long, env = "CODELABS_POLICY")]
    policy: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    // ─── 1) init logging ─────────────────────────────────────────────
    init_logging("info");
    let args = Args::parse();
    info!(naive = args.naive, "startup");

    // ─── 2) csv lab ──────────────────────────────────────────────────
    let mode = if args.naive {
        ParseMode::Naive
    } else {
        ParseMode::QuoteAware
    };
    println!("== CsvSummaryLab ({} reader)", mode.as_str());
    let csv_run = run_csv_lab(&args.csv, mode, &SummaryColumns::default());
    if let Some(summary) = &csv_run.summary {
        println!("Computed summary: {summary}");
    }
    print!("{}", csv_run.report);
    println!("{}\n", csv_run.report.summary_line());

    // ─── 3) password lab ─────────────────────────────────────────────
    let policy = select_policy(args.naive, args.policy.as_deref())
        .context("loading password policy")?;
    println!("== PasswordStrengthLab");
    let pw_report = run_password_lab(&policy);
    print!("{pw_report}");
    println!("{}\n", pw_report.summary_line());

    // ─── 4) combined result ──────────────────────────────────────────
    let mut total = Report::new();
    total.merge(csv_run.report);
    total.merge(pw_report);
    println!("Total: passed={} failed={}", total.passed, total.failed);
    info!(passed = total.passed, failed = total.failed, "all done");
    Ok(total.exit_code())
}
