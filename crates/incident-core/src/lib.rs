//! Core pipeline: normalization, SLA computation, and reconciliation.
//!
//! Data flows strictly forward. Each source is decoded into a raw table,
//! its logical fields are resolved, every row is normalized (failure
//! type, opened-at timestamp, SLA deadline), and the two normalized
//! streams are merged into one canonical, status-tagged, ordered report.
//!
//! Per-row parse failures never abort a run; they degrade to null
//! timestamps or sentinel labels so the failure scope stays visible at
//! the row level.

pub mod error;
pub mod failure;
pub mod normalize;
pub mod pipeline;
pub mod reconcile;
pub mod sla;
pub mod temporal;

pub use error::PipelineError;
pub use failure::{UNIDENTIFIED, extract_failure_type};
pub use normalize::{NormalizedRow, NormalizedSource, normalize_source};
pub use pipeline::{unify, unify_at};
pub use reconcile::{reconcile, refresh_status};
pub use sla::compute_deadline;
pub use temporal::parse_datetime;
