// src/table/mod.rs
pub mod error;
pub mod naive;
pub mod quoted;
pub mod summary;
pub mod utils;

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};
use tracing::debug;

pub use error::CsvError;
pub use summary::{summarize, summarize_file, Summary, SummaryColumns};

/// One parsed record: its fields plus the 1-based line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Every record of a CSV input, in file order. Row 0 is the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Record>,
}

impl Table {
    pub fn header(&self) -> Option<&Record> {
        self.rows.first()
    }

    /// Everything after the header.
    pub fn data_rows(&self) -> &[Record] {
        self.rows.get(1..).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `name` in the header; the first match wins.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header()?.fields.iter().position(|f| f == name)
    }
}

/// Which reader turns lines into fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// The lab's flawed baseline: split on every comma.
    Naive,
    #[default]
    QuoteAware,
}

impl ParseMode {
    pub fn as_str(&self) -> &str {
        match self {
            ParseMode::Naive => "naive",
            ParseMode::QuoteAware => "quote-aware",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "naive" => Some(ParseMode::Naive),
            "quote-aware" | "quoted" => Some(ParseMode::QuoteAware),
            _ => None,
        }
    }
}

/// Read and parse the CSV file at `path`. The file handle is closed before returning.
#[tracing::instrument(level = "info", skip(path, mode), fields(path = %path.as_ref().display(), mode = mode.as_str()))]
pub fn parse_file<P: AsRef<Path>>(path: P, mode: ParseMode) -> Result<Table, CsvError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CsvError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_table(file, path, mode)?;
    debug!(rows = table.len(), "parsed table");
    Ok(table)
}

/// Parse CSV from any reader, e.g. stdin or an in-memory buffer.
pub fn parse_reader<R: Read>(reader: R, mode: ParseMode) -> Result<Table, CsvError> {
    read_table(reader, Path::new("<reader>"), mode)
}

pub fn parse_str(text: &str, mode: ParseMode) -> Result<Table, CsvError> {
    parse_reader(text.as_bytes(), mode)
}

fn read_table<R: Read>(reader: R, origin: &Path, mode: ParseMode) -> Result<Table, CsvError> {
    let rows = match mode {
        ParseMode::Naive => naive::read_records(BufReader::new(reader), origin)?,
        ParseMode::QuoteAware => quoted::read_records(reader, origin)?,
    };
    Ok(Table { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::logging::init_test_logging;

    #[test]
    fn parse_file_reads_both_modes() -> Result<()> {
        init_test_logging();
        let mut tmp = NamedTempFile::new()?;
        write!(tmp, "name,age,city\n\"Lee, Ann\",41,Austin\n")?;

        let quoted = parse_file(tmp.path(), ParseMode::QuoteAware)?;
        assert_eq!(quoted.len(), 2);
        assert_eq!(quoted.data_rows()[0].fields, vec!["Lee, Ann", "41", "Austin"]);

        let naive = parse_file(tmp.path(), ParseMode::Naive)?;
        assert_eq!(naive.data_rows()[0].fields.len(), 4);
        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        for mode in [ParseMode::Naive, ParseMode::QuoteAware] {
            match parse_file(&path, mode) {
                Err(CsvError::Io { path: p, .. }) => assert_eq!(p, path),
                other => panic!("expected Io error, got {:?}", other),
            }
        }
    }

    #[test]
    fn column_index_uses_first_match() {
        let table = parse_str("age,city,age\n1,x,2\n", ParseMode::QuoteAware).unwrap();
        assert_eq!(table.column_index("age"), Some(0));
        assert_eq!(table.column_index("city"), Some(1));
        assert_eq!(table.column_index("zip"), None);
        assert!(Table::default().column_index("age").is_none());
        assert!(Table::default().data_rows().is_empty());
    }

    #[test]
    fn parse_mode_names_round_trip() {
        for mode in [ParseMode::Naive, ParseMode::QuoteAware] {
            assert_eq!(ParseMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(ParseMode::from_str(" Quoted "), Some(ParseMode::QuoteAware));
        assert_eq!(ParseMode::from_str("regex"), None);
    }
}
