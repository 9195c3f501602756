use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// DataError – everything that can go wrong while reading data.csv
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV")]
    Csv(#[from] csv::Error),

    /// A record needs at least three fields to form a [`CsvRow`].
    #[error("line {line}: expected at least 3 fields, found {fields}")]
    ShortRow { line: u64, fields: usize },
}

// ---------------------------------------------------------------------------
// CsvRow – first three raw fields of one record
// ---------------------------------------------------------------------------

/// The first three columns of a CSV record, kept as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow(pub String, pub String, pub String);

impl CsvRow {
    /// Take the first three fields of `record`.
    pub fn from_record(record: &csv::StringRecord) -> Result<Self, DataError> {
        match (record.get(0), record.get(1), record.get(2)) {
            (Some(a), Some(b), Some(c)) => Ok(CsvRow(a.to_string(), b.to_string(), c.to_string())),
            _ => Err(DataError::ShortRow {
                line: record.position().map(|p| p.line()).unwrap_or(0),
                fields: record.len(),
            }),
        }
    }
}

/// Renders as a tuple of quoted strings: `('1', '2', '3')`.
impl fmt::Display for CsvRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            quote_field(&self.0),
            quote_field(&self.1),
            quote_field(&self.2)
        )
    }
}

/// Quote a field the way a string literal is shown inside a tuple.
/// Single quotes by default, double quotes when that avoids escaping.
fn quote_field(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

// ---------------------------------------------------------------------------
// Series3 – parallel x / y / z columns
// ---------------------------------------------------------------------------

/// Three equally long coordinate columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series3 {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl Series3 {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate points as `[x, y, z]`.
    pub fn points(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((&x, &y), &z)| [x, y, z])
    }
}

/// Samples for the connected 3D line.
#[derive(Debug, Clone)]
pub struct LineSamples {
    pub points: Series3,
}

/// One scatter layer's points plus the scalar each point is coloured by.
#[derive(Debug, Clone)]
pub struct ScatterSamples {
    pub points: Series3,
    pub values: Vec<f64>,
}
