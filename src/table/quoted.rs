// src/table/quoted.rs

use csv::ReaderBuilder;
use std::{io::Read, path::Path};
use tracing::trace;

use super::{
    error::CsvError,
    utils::{strip_field_padding, LineCursor},
    Record,
};

/// Quote-aware reader built on the `csv` crate.
///
/// - commas and line breaks inside `"..."` stay in the field
/// - `""` inside a quoted field becomes a single `"`
/// - spaces and tabs around a field are dropped, also before an opening
///   quote; whitespace inside quotes is kept
/// - whitespace-only lines are dropped, a lone `""` is a record
///
/// Each record keeps the line it starts on; a field spanning several lines
/// does not shift the numbering of the records after it. Invalid UTF-8 is
/// reported as [`CsvError::Malformed`] with the line of the offending record.
pub fn read_records<R: Read>(mut reader: R, origin: &Path) -> Result<Vec<Record>, CsvError> {
    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .map_err(|source| CsvError::Io {
            path: origin.to_path_buf(),
            source,
        })?;
    let bytes = strip_field_padding(&raw);

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // arity is checked against the header when summarizing
        .from_reader(bytes.as_slice());

    let mut lines = LineCursor::new(&bytes);
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|source| CsvError::Malformed {
            line: source
                .position()
                .map(|p| lines.line_at(p.byte() as usize))
                .unwrap_or_default(),
            source,
        })?;

        let line = record
            .position()
            .map(|p| lines.line_at(p.byte() as usize))
            .unwrap_or_default();
        trace!(line, fields = record.len(), "quoted record");
        rows.push(Record {
            line,
            fields: record.iter().map(str::to_string).collect(),
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Vec<Record> {
        read_records(text.as_bytes(), Path::new("<test>")).unwrap()
    }

    #[test]
    fn keeps_quoted_commas_in_one_field() {
        let rows = read("id,name,age,city\n1,\"Doe, Jr.\",30,NYC\n");
        assert_eq!(rows[1].fields, vec!["1", "Doe, Jr.", "30", "NYC"]);
    }

    #[test]
    fn padded_quoted_fields_are_recognized() {
        let rows = read("age,city\n30, \"New York\"\n");
        assert_eq!(rows[1].fields, vec!["30", "New York"]);

        let rows = read("id, name, age, city\n1, \"Doe, Jr.\" , 30, NYC\n");
        assert_eq!(rows[0].fields, vec!["id", "name", "age", "city"]);
        assert_eq!(rows[1].fields, vec!["1", "Doe, Jr.", "30", "NYC"]);
    }

    #[test]
    fn unescapes_doubled_quotes() {
        let rows = read("name\n\"\"\"Name\"\"\"\n\"Eve \"\"The Hacker\"\"\"\n");
        assert_eq!(rows[1].fields, vec!["\"Name\""]);
        assert_eq!(rows[2].fields, vec!["Eve \"The Hacker\""]);
    }

    #[test]
    fn whitespace_inside_quotes_is_data() {
        let rows = read("a,b\n\"  x  \",  y  \n");
        assert_eq!(rows[1].fields, vec!["  x  ", "y"]);
    }

    #[test]
    fn lone_empty_quoted_field_is_a_record() {
        let rows = read("name\n\"\"\n   \nBo\n");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].fields, vec![""]);
        assert_eq!(rows[1].line, 2);
        assert_eq!(rows[2].fields, vec!["Bo"]);
        assert_eq!(rows[2].line, 4);
    }

    #[test]
    fn multiline_field_keeps_line_numbers() {
        let text = "id,note,age\n1,\"first\nsecond\",30\n\n   \n2,plain,40\n";
        let rows = read(text);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].fields, vec!["1", "first\nsecond", "30"]);
        assert_eq!(rows[1].line, 2);
        assert_eq!(rows[2].fields, vec!["2", "plain", "40"]);
        assert_eq!(rows[2].line, 6);
    }

    #[test]
    fn trims_unquoted_fields_and_handles_crlf() {
        let rows = read("a , b\r\n 1 ,2 \r\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields, vec!["a", "b"]);
        assert_eq!(rows[1].fields, vec!["1", "2"]);
        assert_eq!(rows[1].line, 2);
    }

    #[test]
    fn invalid_utf8_is_malformed_with_line() {
        let bytes: &[u8] = b"age,city\n30,LA\n\n31,\xff\xfe\n";
        match read_records(bytes, Path::new("<test>")) {
            Err(CsvError::Malformed { line, .. }) => assert_eq!(line, 4),
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn empty_input_has_no_records() {
        assert!(read("").is_empty());
        assert!(read("\n  \n").is_empty());
    }
}
