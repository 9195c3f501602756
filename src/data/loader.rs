use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{CsvRow, DataError};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Open `path` and print the first three fields of every record to stdout.
///
/// Returns the number of printed rows. The file handle is dropped before
/// returning, on success and on error alike.
pub fn read_and_print(path: &Path) -> Result<usize> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_rows(file, &mut out).with_context(|| format!("reading {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV printer
// ---------------------------------------------------------------------------

/// CSV layout: comma separated, no header row, at least three fields per
/// record. Records may differ in length; anything past the third field is
/// ignored. A blank line is an empty record and fails like any short row.
pub fn print_rows<R: Read, W: Write>(mut reader: R, out: &mut W) -> Result<usize, DataError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    // The csv reader drops empty lines, so find them up front.
    let blank = first_blank_line(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let mut record = csv::StringRecord::new();
    let mut count = 0;
    while reader.read_record(&mut record)? {
        // A record ending past the blank line was read after skipping it.
        if let Some(blank) = blank.filter(|b| reader.position().byte() > b.byte) {
            return Err(DataError::ShortRow { line: blank.line, fields: 0 });
        }
        let row = CsvRow::from_record(&record)?;
        writeln!(out, "{row}")?;
        count += 1;
    }
    out.flush()?;

    match blank {
        Some(blank) => Err(DataError::ShortRow { line: blank.line, fields: 0 }),
        None => Ok(count),
    }
}

/// Where an empty line starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BlankLine {
    /// 1-based, counted by `\n`.
    line: u64,
    byte: u64,
}

/// The first empty line outside a quoted field.
fn first_blank_line(bytes: &[u8]) -> Option<BlankLine> {
    let mut line = 1;
    let mut line_start = 0;
    let mut at_line_start = true;
    let mut quoted = false;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'\n' => {
                if at_line_start && !quoted {
                    return Some(BlankLine {
                        line,
                        byte: line_start as u64,
                    });
                }
                line += 1;
                line_start = i + 1;
                at_line_start = !quoted;
            }
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => {}
            b'"' => {
                quoted = !quoted;
                at_line_start = false;
            }
            _ => at_line_start = false,
        }
    }
    None
}
