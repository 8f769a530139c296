//! End-to-end unification: two raw byte streams in, one report out.

use std::time::Instant;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, info_span};

use incident_ingest::{decode_table, resolve_fields};
use incident_model::{PipelineConfig, SourceSchema, UnifiedReport};

use crate::error::PipelineError;
use crate::normalize::{NormalizedSource, normalize_source};
use crate::reconcile::reconcile;

/// Decodes, resolves, and normalizes one source branch.
fn ingest_branch(
    bytes: &[u8],
    schema: &SourceSchema,
    config: &PipelineConfig,
) -> Result<NormalizedSource, PipelineError> {
    let span = info_span!("ingest", source = schema.name);
    let _guard = span.enter();
    let start = Instant::now();

    let table = decode_table(bytes).map_err(|source| PipelineError::Source {
        source_name: schema.name.to_string(),
        source,
    })?;
    let fields = resolve_fields(&table, schema);
    let normalized = normalize_source(&table, &fields, schema, config)?;
    debug!(
        source = schema.name,
        columns = table.headers.len(),
        rows = normalized.rows.len(),
        warnings = normalized.warnings.len(),
        duration_ms = start.elapsed().as_millis(),
        "source normalized"
    );
    Ok(normalized)
}

/// Runs the full pipeline with the evaluation instant captured now.
pub fn unify(
    grid_bytes: &[u8],
    export_bytes: &[u8],
    config: &PipelineConfig,
) -> Result<UnifiedReport, PipelineError> {
    unify_at(grid_bytes, export_bytes, config, Local::now().naive_local())
}

/// Runs the full pipeline against a fixed evaluation instant.
///
/// The two branches are pure functions of disjoint inputs and are
/// processed independently before reconciliation; `now` is captured once
/// and reused for every record so the report is a consistent snapshot.
pub fn unify_at(
    grid_bytes: &[u8],
    export_bytes: &[u8],
    config: &PipelineConfig,
    now: NaiveDateTime,
) -> Result<UnifiedReport, PipelineError> {
    let span = info_span!("unify");
    let _guard = span.enter();
    let start = Instant::now();

    let grid = ingest_branch(grid_bytes, &SourceSchema::grid(), config)?;
    let export = ingest_branch(export_bytes, &SourceSchema::export(), config)?;
    let report = reconcile(grid, export, config, now);

    info!(
        total = report.totals.total,
        breached = report.totals.breached,
        grid = report.totals.grid,
        export = report.totals.export,
        warnings = report.warnings.len(),
        duration_ms = start.elapsed().as_millis(),
        "unification complete"
    );
    Ok(report)
}
