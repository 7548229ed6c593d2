// src/services/csv.rs

//! Line-oriented CSV decoder for spreadsheet exports.
//!
//! Each physical line is one row. Double quotes toggle a quoted span in which
//! the delimiter is literal; the quote characters themselves are dropped.
//! A newline inside a quoted field is not supported and splits the row.

use crate::models::RawRecord;

/// Decodes exported sheet text into header-keyed records.
#[derive(Debug, Clone, Copy)]
pub struct CsvDecoder {
    delimiter: char,
}

impl Default for CsvDecoder {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl CsvDecoder {
    /// Create a decoder for the given field delimiter.
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Decode text whose first line is the header row.
    ///
    /// A leading byte-order mark is skipped. Rows with fewer fields than the
    /// header are dropped; extra trailing fields are ignored. Text without at
    /// least one data line yields nothing.
    pub fn decode(&self, text: &str) -> Vec<RawRecord> {
        let text = text.trim_start_matches('\u{feff}').trim();
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() < 2 {
            return Vec::new();
        }

        let header: Vec<String> = self
            .split_line(lines[0])
            .into_iter()
            .map(|name| name.to_lowercase())
            .collect();

        let mut records = Vec::with_capacity(lines.len() - 1);
        let mut dropped = 0usize;

        for line in &lines[1..] {
            let values = self.split_line(line);
            if values.len() < header.len() {
                dropped += 1;
                continue;
            }

            let record: RawRecord = header.iter().cloned().zip(values).collect();
            records.push(record);
        }

        if dropped > 0 {
            log::debug!(
                "Dropped {} row(s) with fewer than {} fields",
                dropped,
                header.len()
            );
        }

        records
    }

    /// Split one line into trimmed, unquoted fields.
    pub fn split_line(&self, line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;

        for ch in line.chars() {
            if ch == '"' {
                in_quotes = !in_quotes;
            } else if ch == self.delimiter && !in_quotes {
                fields.push(current.trim().to_string());
                current.clear();
            } else {
                current.push(ch);
            }
        }
        fields.push(current.trim().to_string());

        fields
    }
}
