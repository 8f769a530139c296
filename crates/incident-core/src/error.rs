//! Error types for the unification pipeline.

use incident_ingest::IngestError;
use thiserror::Error;

/// Fatal pipeline errors. Both variants abort the run; no partial report
/// is produced. Non-fatal degradations are collected as report warnings
/// instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// One of the two inputs could not be decoded into a delimited table.
    #[error("failed to decode {source_name} input: {source}")]
    Source {
        source_name: String,
        #[source]
        source: IngestError,
    },

    /// The description field resolved to no column, so failure types
    /// cannot be extracted for this source.
    #[error("no description column found in the {source_name} input")]
    MissingRequiredColumn { source_name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_source() {
        let err = PipelineError::MissingRequiredColumn {
            source_name: "grid".to_string(),
        };
        assert_eq!(err.to_string(), "no description column found in the grid input");
    }
}
