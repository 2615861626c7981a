// src/table/summary.rs

use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, path::Path};
use tracing::{debug, warn};

use super::{error::CsvError, parse_file, ParseMode, Record, Table};

/// Header names of the columns the summary reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryColumns {
    pub age: String,
    pub city: String,
}

impl Default for SummaryColumns {
    fn default() -> Self {
        SummaryColumns {
            age: "age".into(),
            city: "city".into(),
        }
    }
}

/// Aggregates over the data rows of a people table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub row_count: usize,
    pub average_age: f64,
    pub cities: BTreeSet<String>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cities: Vec<&str> = self.cities.iter().map(String::as_str).collect();
        write!(
            f,
            "rows={} avg_age={:.2} cities=[{}]",
            self.row_count,
            self.average_age,
            cities.join(", ")
        )
    }
}

/// Summarize `table`, treating row 0 as the header.
///
/// Fails fast: the first missing column, short/long row or non-numeric age
/// aborts the whole summary with an error naming the offending line.
#[tracing::instrument(level = "debug", skip(table, columns), fields(rows = table.len()))]
pub fn summarize(table: &Table, columns: &SummaryColumns) -> Result<Summary, CsvError> {
    let header = table.header().ok_or(CsvError::EmptyTable)?;
    let age_idx = required_column(table, &columns.age)?;
    let city_idx = required_column(table, &columns.city)?;
    let expected = header.fields.len();

    // i128 holds the sum of any realistic number of i64 ages
    let mut total_age: i128 = 0;
    let mut cities = BTreeSet::new();
    for row in table.data_rows() {
        check_arity(row, expected)?;

        let raw_age = row.fields[age_idx].trim();
        let age: i64 = raw_age.parse().map_err(|_| CsvError::FieldFormat {
            line: row.line,
            column: columns.age.clone(),
            value: raw_age.to_string(),
        })?;
        cities.insert(row.fields[city_idx].trim().to_string());
        total_age += i128::from(age);
    }

    let row_count = table.data_rows().len();
    let average_age = if row_count == 0 {
        0.0
    } else {
        total_age as f64 / row_count as f64
    };
    debug!(row_count, average_age, cities = cities.len(), "summarized");

    Ok(Summary {
        row_count,
        average_age,
        cities,
    })
}

/// Parse the file at `path` with `mode`, then [`summarize`] it.
pub fn summarize_file<P: AsRef<Path>>(
    path: P,
    mode: ParseMode,
    columns: &SummaryColumns,
) -> Result<Summary, CsvError> {
    let table = parse_file(path, mode)?;
    summarize(&table, columns)
}

fn required_column(table: &Table, name: &str) -> Result<usize, CsvError> {
    table.column_index(name).ok_or_else(|| {
        warn!(column = name, "required column missing from header");
        CsvError::MissingColumn {
            column: name.to_string(),
        }
    })
}

fn check_arity(row: &Record, expected: usize) -> Result<(), CsvError> {
    if row.fields.len() != expected {
        return Err(CsvError::RowArity {
            line: row.line,
            expected,
            found: row.fields.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse_str;

    fn quoted(text: &str) -> Result<Summary, CsvError> {
        let table = parse_str(text, ParseMode::QuoteAware)?;
        summarize(&table, &SummaryColumns::default())
    }

    #[test]
    fn counts_rows_and_averages_ages() {
        let s = quoted("name,age,city\nA,18,NYC\nB,22,NYC\nC,20,LA\n").unwrap();
        assert_eq!(s.row_count, 3);
        assert!((s.average_age - 20.0).abs() < 1e-9);
        assert_eq!(s.cities.len(), 2);
        assert!(s.cities.contains("NYC"));
        assert!(s.cities.contains("LA"));
    }

    #[test]
    fn identical_ages_average_exactly() {
        let mut text = String::from("city,age\n");
        for _ in 0..7 {
            text.push_str("Oslo,37\n");
        }
        let s = quoted(&text).unwrap();
        assert_eq!(s.row_count, 7);
        assert_eq!(s.average_age, 37.0);
        assert_eq!(s.cities.len(), 1);
    }

    #[test]
    fn header_only_has_zero_average() {
        let s = quoted("age,city\n").unwrap();
        assert_eq!(s.row_count, 0);
        assert_eq!(s.average_age, 0.0);
        assert!(s.cities.is_empty());
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(matches!(quoted(""), Err(CsvError::EmptyTable)));
    }

    #[test]
    fn missing_column_is_named() {
        match quoted("name,age\nA,3\n") {
            Err(CsvError::MissingColumn { column }) => assert_eq!(column, "city"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn custom_column_names() {
        let table = parse_str("Years,Town\n30,Bergen\n50,Bergen\n", ParseMode::QuoteAware).unwrap();
        let columns = SummaryColumns {
            age: "Years".into(),
            city: "Town".into(),
        };
        let s = summarize(&table, &columns).unwrap();
        assert_eq!(s.average_age, 40.0);
        assert!(quoted("Years,Town\n30,Bergen\n").is_err());
    }

    #[test]
    fn non_numeric_age_reports_line_and_value() {
        match quoted("age,city\n30,LA\n\nthirty,NYC\n") {
            Err(CsvError::FieldFormat {
                line,
                column,
                value,
            }) => {
                assert_eq!(line, 4);
                assert_eq!(column, "age");
                assert_eq!(value, "thirty");
            }
            other => panic!("expected FieldFormat, got {:?}", other),
        }
    }

    #[test]
    fn quoted_comma_does_not_shift_columns() {
        let text = "id,name,age,city\n1,\"Doe, Jr.\",30,NYC\n2,Roe,40,LA\n";
        let s = quoted(text).unwrap();
        assert_eq!(s.row_count, 2);
        assert_eq!(s.average_age, 35.0);
        assert_eq!(
            s.cities.iter().cloned().collect::<Vec<_>>(),
            vec!["LA".to_string(), "NYC".to_string()]
        );
    }

    #[test]
    fn naive_split_breaks_row_arity() {
        let text = "id,name,age,city\n1,\"Doe, Jr.\",30,NYC\n";
        let table = parse_str(text, ParseMode::Naive).unwrap();
        match summarize(&table, &SummaryColumns::default()) {
            Err(CsvError::RowArity {
                line,
                expected,
                found,
            }) => {
                assert_eq!((line, expected, found), (2, 4, 5));
            }
            other => panic!("expected RowArity, got {:?}", other),
        }
    }

    #[test]
    fn extreme_ages_do_not_overflow() {
        let s = quoted("age,city\n9223372036854775807,a\n1,b\n").unwrap();
        assert_eq!(s.row_count, 2);
        assert_eq!(s.average_age, 4611686018427387904.0);

        let s = quoted("age,city\n-9223372036854775808,a\n-9223372036854775808,b\n").unwrap();
        assert_eq!(s.average_age, -9223372036854775808.0);
    }

    #[test]
    fn padded_quoted_name_keeps_age_and_city() {
        let s = quoted("id, name, age, city\n1, \"Doe, Jr.\", 30, NYC\n").unwrap();
        assert_eq!(s.row_count, 1);
        assert_eq!(s.average_age, 30.0);
        assert!(s.cities.contains("NYC"));
    }

    #[test]
    fn short_row_is_an_arity_error() {
        assert!(matches!(
            quoted("age,city\n30\n"),
            Err(CsvError::RowArity { found: 1, .. })
        ));
    }

    #[test]
    fn display_lists_cities_in_order() {
        let s = quoted("age,city\n20,b\n30,a\n").unwrap();
        assert_eq!(s.to_string(), "rows=2 avg_age=25.00 cities=[a, b]");
    }
}
