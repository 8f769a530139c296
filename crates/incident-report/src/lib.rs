//! Report artifacts built from a [`incident_model::UnifiedReport`].
//!
//! The pipeline's output contract is a serializable table: a fixed header
//! set with one string row per canonical record. Presentation layers
//! (spreadsheet writers, web tables) consume it as-is; this crate also
//! writes it out as a delimited file for the CLI.

pub mod table;

pub use table::{DEFAULT_REPORT_FILE_NAME, UnifiedTable, write_csv, write_csv_file};
