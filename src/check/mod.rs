// src/check/mod.rs
//
// Pass/fail bookkeeping for the lab harnesses. Each run owns its own
// `Report`; nothing is shared between runs.

pub mod csv_lab;
pub mod password_lab;

use std::fmt;
use std::process::ExitCode;

pub use csv_lab::{run_csv_lab, CsvLabRun};
pub use password_lab::run_password_lab;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub name: String,
    pub passed: bool,
    /// Why the check failed; empty for passes.
    pub detail: String,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed {
            write!(f, "[PASS] {}", self.name)
        } else {
            write!(f, "[FAIL] {} -> {}", self.name, self.detail)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `condition`; `detail` is only rendered when it is false.
    pub fn check<F>(&mut self, name: &str, condition: bool, detail: F) -> bool
    where
        F: FnOnce() -> String,
    {
        let detail = if condition { String::new() } else { detail() };
        self.record(name, condition, detail);
        condition
    }

    pub fn check_eq<T>(&mut self, name: &str, expected: T, actual: T) -> bool
    where
        T: PartialEq + fmt::Display,
    {
        let ok = expected == actual;
        self.check(name, ok, || format!("expected: {expected}, actual: {actual}"))
    }

    /// Record an unconditional failure, e.g. a step that errored before any check could run.
    pub fn fail(&mut self, name: &str, detail: impl Into<String>) {
        self.record(name, false, detail.into());
    }

    pub fn merge(&mut self, other: Report) {
        self.passed += other.passed;
        self.failed += other.failed;
        self.outcomes.extend(other.outcomes);
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }

    pub fn summary_line(&self) -> String {
        format!("Summary: passed={} failed={}", self.passed, self.failed)
    }

    fn record(&mut self, name: &str, passed: bool, detail: String) {
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
            tracing::debug!(check = name, %detail, "check failed");
        }
        self.outcomes.push(Outcome {
            name: name.to_string(),
            passed,
            detail,
        });
    }
}

/// One line per outcome, in the order they were recorded.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{outcome}")?;
        }
        Ok(())
    }
}
