// src/check/password_lab.rs

use std::path::Path;
use tracing::info;

use super::Report;
use crate::password::{PasswordPolicy, PolicyError, Verdict};

/// Fixed lab cases: name, input, expected verdict under the corrected policy.
pub const CASES: &[(&str, Option<&str>, Verdict)] = &[
    ("null", None, Verdict::Weak),
    ("empty", Some(""), Verdict::Weak),
    ("short", Some("Ab1!"), Verdict::Weak),
    ("common 'password'", Some("password"), Verdict::Weak),
    ("common 'Password' (case variant)", Some("Password"), Verdict::Weak),
    ("common 'Qwerty123' (larger list)", Some("Qwerty123"), Verdict::Weak),
    ("padding counts toward length", Some("   Abcdef1!   "), Verdict::Strong),
    ("strong candidate", Some("CorrectHorse1!"), Verdict::Strong),
    ("symbol '.' counts", Some("Abcdef12.."), Verdict::Ok),
    ("symbol '%' counts", Some("abcdefgh%%"), Verdict::Ok),
    ("spaces are not symbols", Some("abcd efgh ijkl"), Verdict::Weak),
];

/// Run every case in [`CASES`] against `policy`, plus a purity check.
pub fn run_password_lab(policy: &PasswordPolicy) -> Report {
    let mut report = Report::new();
    for &(name, input, expected) in CASES {
        report.check_eq(name, expected, policy.classify(input));
    }

    let input = String::from("  Repeat.Me42  ");
    let first = policy.classify(Some(input.as_str()));
    let repeated = (0..5).all(|_| policy.classify(Some(input.as_str())) == first);
    report.check("same input, same verdict", repeated, || {
        format!("{input:?} classified inconsistently")
    });

    info!(passed = report.passed, failed = report.failed, "password lab finished");
    report
}

/// Baseline policy, a YAML policy file, or the built-in default, in that order.
pub fn select_policy(naive: bool, policy_file: Option<&Path>) -> Result<PasswordPolicy, PolicyError> {
    if naive {
        return Ok(PasswordPolicy::naive());
    }
    match policy_file {
        Some(path) => PasswordPolicy::load(path),
        None => Ok(PasswordPolicy::default()),
    }
}
