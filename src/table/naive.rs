// src/table/naive.rs
//
// The lab's flawed baseline reader. Kept as-is so the harness can show
// where it goes wrong: no quote awareness, no unescaping of doubled quotes.

use std::{io::BufRead, path::Path};
use tracing::trace;

use super::{error::CsvError, utils::clean_str, Record};

/// Split every non-blank line on `,` and clean each piece with [`clean_str`].
///
/// A quoted field that contains a comma ends up as two (or more) fields, so
/// rows after it can be longer than the header.
pub fn read_records<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<Record>, CsvError> {
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CsvError::Io {
            path: origin.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<String> = line.split(',').map(clean_str).collect();
        trace!(line = idx + 1, fields = fields.len(), "naive split");
        rows.push(Record {
            line: idx + 1,
            fields,
        });
    }
    Ok(rows)
}
