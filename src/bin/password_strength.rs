//! password_strength: classify passwords as WEAK / OK / STRONG and run the lab checks.

use anyhow::{Context, Result};
use clap::Parser;
use codelabs::{
    check::{password_lab::select_policy, run_password_lab},
    logging::init_logging,
};
use std::{path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(author, version, about = "Password strength lab")]
struct Args {
    /// Use the flawed baseline policy (trims input, tiny case-sensitive denylist).
    /// Takes precedence over --policy
    #[arg(long)]
    naive: bool,
    /// YAML policy file
    #[arg(long, env = "CODELABS_POLICY")]
    policy: Option<PathBuf>,
    /// Classify this password before running the checks (repeatable)
    #[arg(long = "classify", value_name = "PASSWORD")]
    inputs: Vec<String>,
}

fn main() -> Result<ExitCode> {
    init_logging("info");
    let args = Args::parse();

    let policy = select_policy(args.naive, args.policy.as_deref())
        .context("loading password policy")?;

    for input in &args.inputs {
        let a = policy.assess(Some(input.as_str()));
        println!(
            "{:?} -> {} (length={} score={} denylisted={})",
            input, a.verdict, a.length, a.score, a.denylisted
        );
    }
    if !args.inputs.is_empty() {
        println!();
    }

    println!("Running PasswordStrengthLab tests...\n");
    let report = run_password_lab(&policy);
    print!("{report}");
    println!("\n{}", report.summary_line());
    Ok(report.exit_code())
}
