//! Error types for incident data ingestion.

use thiserror::Error;

/// Errors that can occur while decoding a raw byte stream into a table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// No (encoding, delimiter) combination produced more than one column.
    ///
    /// Raised both when every parse attempt fails outright and when the
    /// best attempt yields a single column, which signals either a
    /// non-delimited file or a wrong delimiter guess.
    #[error("no encoding/delimiter combination produced a delimited table ({attempts} attempts)")]
    Decode { attempts: usize },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::Decode { attempts: 6 };
        assert_eq!(
            err.to_string(),
            "no encoding/delimiter combination produced a delimited table (6 attempts)"
        );
    }
}
