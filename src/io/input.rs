//! Line and record scanning over puzzle input files

use crate::io::error::{ReassemblyError, Result};
use std::path::Path;

/// Read a whole puzzle input file into memory
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be opened or is not valid UTF-8
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| ReassemblyError::FileSystem {
        path: path.to_path_buf(),
        operation: "read input",
        source: e,
    })
}

/// Iterate raw lines with any trailing carriage return removed
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(|line| line.trim_end_matches('\r'))
}

/// Iterate blank-line-delimited records
///
/// Any run of blank lines separates two records, and lines holding only
/// carriage returns count as blank. Leading and trailing blank lines never
/// produce an empty record. Each record keeps its inner newlines.
pub fn records(text: &str) -> Records<'_> {
    Records { rest: text }
}

/// Iterator returned by [`records`]
#[derive(Debug, Clone)]
pub struct Records<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let mut start = None;
        let mut end = 0;
        let mut offset = 0;

        for line in self.rest.split_inclusive('\n') {
            let blank = line.trim_end_matches(['\n', '\r']).is_empty();
            match (blank, start) {
                (false, None) => {
                    start = Some(offset);
                    end = offset + line.len();
                }
                (false, Some(_)) => end = offset + line.len(),
                (true, Some(_)) => break,
                (true, None) => {}
            }
            offset += line.len();
        }

        let begin = start?;
        let record = self.rest.get(begin..end)?.trim_end_matches(['\n', '\r']);
        self.rest = self.rest.get(end..).unwrap_or_default();
        Some(record)
    }
}
