//! Raw tabular decoding with encoding and delimiter detection.

use std::borrow::Cow;

use csv::ReaderBuilder;
use encoding_rs::{UTF_8, WINDOWS_1252};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Character encodings attempted, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextEncoding {
    Utf8,
    Latin1,
    Windows1252,
}

const ENCODINGS: [TextEncoding; 3] = [
    TextEncoding::Utf8,
    TextEncoding::Latin1,
    TextEncoding::Windows1252,
];

/// Field delimiters attempted, in order.
const DELIMITERS: [u8; 2] = [b',', b';'];

impl TextEncoding {
    fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "latin-1",
            Self::Windows1252 => "windows-1252",
        }
    }

    /// Decodes the byte stream, or `None` when the bytes are not valid in
    /// this encoding. The single-byte encodings always succeed; UTF-8 is
    /// strict so that mojibake falls through to the regional attempts.
    fn decode(self, bytes: &[u8]) -> Option<Cow<'_, str>> {
        match self {
            Self::Utf8 => {
                let (text, _, had_errors) = UTF_8.decode(bytes);
                if had_errors { None } else { Some(text) }
            }
            Self::Latin1 => Some(encoding_rs::mem::decode_latin1(bytes)),
            Self::Windows1252 => {
                let (text, _, _) = WINDOWS_1252.decode(bytes);
                Some(text)
            }
        }
    }
}

/// An ordered sequence of rows under header-derived column labels.
///
/// Header labels are normalized but not guaranteed unique or consistent
/// between sources; lives only inside one pipeline run.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Index of the column with the given header, if present.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Attempts a full tabular parse of the decoded text with one delimiter.
///
/// Returns `None` when the parse errors out or yields no header row; a
/// successful single-column parse is returned as-is and rejected by the
/// caller's column-count check.
fn parse_with_delimiter(text: &str, delimiter: u8) -> Option<RawTable> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.ok()?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }

    let mut rows_iter = raw_rows.into_iter();
    let headers: Vec<String> = rows_iter.next()?.iter().map(|v| normalize_header(v)).collect();

    let mut rows = Vec::new();
    for record in rows_iter {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    Some(RawTable { headers, rows })
}

/// Decodes a raw byte stream into a [`RawTable`].
///
/// Tries each character encoding crossed with each delimiter, in order,
/// and accepts the first combination whose parse resolves more than one
/// column. Fails with [`IngestError::Decode`] when every combination
/// fails or yields a single-column result.
pub fn decode_table(bytes: &[u8]) -> Result<RawTable> {
    for encoding in ENCODINGS {
        let Some(text) = encoding.decode(bytes) else {
            continue;
        };
        for delimiter in DELIMITERS {
            if let Some(table) = parse_with_delimiter(&text, delimiter)
                && table.headers.len() > 1
            {
                debug!(
                    encoding = encoding.label(),
                    delimiter = %(delimiter as char),
                    columns = table.headers.len(),
                    rows = table.rows.len(),
                    "decoded delimited table"
                );
                return Ok(table);
            }
        }
    }
    Err(IngestError::Decode {
        attempts: ENCODINGS.len() * DELIMITERS.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_comma() {
        let table = decode_table("A,B\n1,2\n".as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["1".to_string(), "2".to_string()]]);
    }

    #[test]
    fn test_decode_semicolon_delimiter() {
        let table = decode_table("A;B;C\nx;y;z\n".as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["A", "B", "C"]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_decode_latin1_bytes() {
        // "Descrição;Número" in Latin-1, which is invalid UTF-8.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"Descri\xe7\xe3o;N\xfamero\n");
        bytes.extend_from_slice(b"falha;42\n");
        let table = decode_table(&bytes).unwrap();
        assert_eq!(table.headers, vec!["Descrição", "Número"]);
        assert_eq!(
            table.rows,
            vec![vec!["falha".to_string(), "42".to_string()]]
        );
    }

    #[test]
    fn test_decode_single_column_fails() {
        let err = decode_table("just a line of text\nanother line\n".as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::Decode { attempts: 6 }));
    }

    #[test]
    fn test_decode_empty_input_fails() {
        assert!(decode_table(b"").is_err());
    }

    #[test]
    fn test_decode_strips_bom_and_whitespace() {
        let table = decode_table("\u{feff}A , B\n 1 , 2 \n".as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows[0], vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_decode_skips_blank_rows() {
        let table = decode_table("A,B\n,,\n1,2\n".as_bytes()).unwrap();
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_decode_pads_short_rows() {
        let table = decode_table("A,B,C\n1,2\n".as_bytes()).unwrap();
        assert_eq!(
            table.rows[0],
            vec!["1".to_string(), "2".to_string(), String::new()]
        );
    }

    #[test]
    fn test_column_index() {
        let table = decode_table("A,B\n1,2\n".as_bytes()).unwrap();
        assert_eq!(table.column_index("B"), Some(1));
        assert_eq!(table.column_index("C"), None);
    }
}
