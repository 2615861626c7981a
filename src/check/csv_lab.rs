// src/check/csv_lab.rs

use std::{collections::BTreeSet, path::Path};
use tracing::{info, warn};

use super::Report;
use crate::table::{parse_file, summarize, ParseMode, Summary, SummaryColumns, Table};

/// Sample input shipped with the crate, relative to the crate root.
pub const DEFAULT_PEOPLE_CSV: &str = "assets/people.csv";

const EXPECTED_ROWS: usize = 5;
const EXPECTED_AVG_AGE: f64 = 20.0;
const EXPECTED_CITIES: [&str; 3] = ["Boston", "New York", "San Francisco"];

/// Result of one CSV lab run: the summary when one could be computed, plus the checks.
#[derive(Debug)]
pub struct CsvLabRun {
    pub summary: Option<Summary>,
    pub report: Report,
}

/// Parse `path`, summarize it and check the result against the known
/// contents of the sample people file.
#[tracing::instrument(level = "info", skip_all, fields(path = %path.display(), mode = mode.as_str()))]
pub fn run_csv_lab(path: &Path, mode: ParseMode, columns: &SummaryColumns) -> CsvLabRun {
    let mut report = Report::new();

    let table = match parse_file(path, mode) {
        Ok(table) => table,
        Err(e) => {
            warn!(error = %e, "could not parse input");
            report.fail("parse input", e.to_string());
            return CsvLabRun {
                summary: None,
                report,
            };
        }
    };

    let summary = match summarize(&table, columns) {
        Ok(summary) => {
            check_summary(&mut report, &summary);
            Some(summary)
        }
        Err(e) => {
            // a naive parse usually ends here
            warn!(error = %e, "summarize failed");
            report.fail("summarize", e.to_string());
            None
        }
    };
    check_names(&mut report, &table);

    info!(passed = report.passed, failed = report.failed, "csv lab finished");
    CsvLabRun { summary, report }
}

fn check_summary(report: &mut Report, summary: &Summary) {
    report.check_eq(
        &format!("rows=={EXPECTED_ROWS}"),
        EXPECTED_ROWS,
        summary.row_count,
    );
    report.check(
        &format!("avg age approx {EXPECTED_AVG_AGE:.1}"),
        (summary.average_age - EXPECTED_AVG_AGE).abs() < 1e-4,
        || format!("expected avg {EXPECTED_AVG_AGE}, got {}", summary.average_age),
    );
    for city in ["New York", "San Francisco"] {
        report.check(
            &format!("cities contains {city}"),
            summary.cities.contains(city),
            || format!("missing {city}; got {:?}", summary.cities),
        );
    }
    let expected: BTreeSet<String> = EXPECTED_CITIES.iter().map(|c| c.to_string()).collect();
    report.check("cities are unique", summary.cities == expected, || {
        format!("expected {:?}, got {:?}", expected, summary.cities)
    });
}

/// The `name` column carries the quoting edge cases: an embedded comma and doubled quotes.
fn check_names(report: &mut Report, table: &Table) {
    let Some(idx) = table.column_index("name") else {
        report.fail("name column present", "header has no \"name\" column");
        return;
    };
    let names: Vec<&str> = table
        .data_rows()
        .iter()
        .filter_map(|row| row.fields.get(idx).map(String::as_str))
        .collect();

    for (case, expected) in [
        ("quoted comma stays in one field", "Bob, Jr."),
        ("doubled quotes are unescaped", "Eve \"The Hacker\""),
    ] {
        report.check(case, names.contains(&expected), || {
            format!("no name equal to {expected:?}; got {names:?}")
        });
    }
}
