// File: crates/petalplot-core/src/data.rs
// Summary: Iris record model and CSV loader with lenient numeric coercion.

use std::io;
use std::path::Path;

use indexmap::IndexSet;
use log::{debug, warn};

use crate::error::{ChartError, Result};

pub const SPECIES: &str = "Species";
pub const PETAL_LENGTH: &str = "PetalLength";
pub const PETAL_WIDTH: &str = "PetalWidth";

/// One dataset row. Numeric fields hold the coerced cell value and may be NaN.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub species: String,
    pub petal_length: f64,
    pub petal_width: f64,
}

impl Record {
    pub fn new(species: impl Into<String>, petal_length: f64, petal_width: f64) -> Self {
        Self { species: species.into(), petal_length, petal_width }
    }

    /// Build a record from raw cell text, coercing the numeric columns.
    pub fn from_cells(species: &str, petal_length: &str, petal_width: &str) -> Self {
        Self::new(species, coerce_number(petal_length), coerce_number(petal_width))
    }
}

/// Coerce a text cell to a number the way a script-language unary `+` does.
///
/// Blank cells become `0`, `Infinity` spellings become infinities, `0x`/`0o`/`0b`
/// integers are read in their radix and anything that is not a plain decimal
/// literal becomes NaN. No error is ever raised.
pub fn coerce_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }
    // Rust's float parser also accepts "inf"/"nan"; those are not numeric here.
    if !s.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut acc = 0.0f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    acc
}

/// Rewrite blank lines outside quoted fields as one empty quoted field, so the
/// csv reader yields them as records instead of skipping them. A single line
/// terminator at the end of the text closes the last row and adds nothing.
fn keep_blank_lines(text: &str) -> String {
    let body = match text.strip_suffix('\n') {
        Some(t) => t.strip_suffix('\r').unwrap_or(t),
        None => text,
    };
    let lines: Vec<&str> = body.split('\n').collect();
    let last = lines.len() - 1;
    let mut out = String::with_capacity(body.len() + 2);
    let mut in_quotes = false;
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if !in_quotes && i < last && matches!(*line, "" | "\r") {
            out.push_str("\"\"");
        } else {
            out.push_str(line);
        }
        if line.matches('"').count() % 2 == 1 {
            in_quotes = !in_quotes;
        }
    }
    out
}

/// In-memory table of records, in file order.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Load a headered CSV from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading dataset from {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_reader(io::BufReader::new(file))
    }

    /// Load a headered CSV from any reader. Only `Species`, `PetalLength` and
    /// `PetalWidth` are read. Absent cells read as blank, so short rows yield `0`
    /// (or an empty species), and blank lines are kept as empty records.
    pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let text = keep_blank_lines(&text);
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = rdr.headers()?.clone();
        let idx = |name: &'static str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(ChartError::MissingColumn(name))
        };
        let i_species = idx(SPECIES)?;
        let i_length = idx(PETAL_LENGTH)?;
        let i_width = idx(PETAL_WIDTH)?;

        let mut records = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let number = |i: usize| coerce_number(rec.get(i).unwrap_or_default());
            records.push(Record {
                species: rec.get(i_species).unwrap_or_default().to_string(),
                petal_length: number(i_length),
                petal_width: number(i_width),
            });
        }

        if records.is_empty() {
            warn!("dataset has a header row but no records");
        }
        debug!("loaded {} records", records.len());
        Ok(Self { records })
    }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Distinct species in first-seen order.
    pub fn species(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.species.as_str())
            .collect::<IndexSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn petal_lengths(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.petal_length).collect()
    }

    pub fn petal_widths(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.petal_width).collect()
    }
}
