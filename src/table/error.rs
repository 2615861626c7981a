// src/table/error.rs

use std::{io, path::PathBuf};

/// Everything that can go wrong between opening a CSV file and producing a summary.
#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed CSV at line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: csv::Error,
    },

    #[error("no data: the table has no header row")]
    EmptyTable,

    #[error("required column {column:?} is missing from the header")]
    MissingColumn { column: String },

    #[error("line {line}: expected {expected} fields, found {found}")]
    RowArity {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: column {column:?} holds non-numeric value {value:?}")]
    FieldFormat {
        line: usize,
        column: String,
        value: String,
    },
}
