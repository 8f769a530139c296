//! Data model for the incident unification pipeline.
//!
//! The two source systems ("Grid" and "Export") deliver incident records
//! with divergent column names, date formats, and description shapes.
//! This crate defines the canonical record set they are normalized into,
//! the per-source schema configuration driving that normalization, and
//! the pipeline configuration values.

pub mod config;
pub mod record;
pub mod schema;

pub use config::PipelineConfig;
pub use record::{CanonicalRecord, Origin, ReportTotals, SlaStatus, UnifiedReport};
pub use schema::{ExtractStrategy, LogicalField, SourceSchema};
