//! Merging the two normalized streams into one canonical report.

use chrono::NaiveDateTime;
use std::cmp::Ordering;

use incident_model::{
    CanonicalRecord, Origin, PipelineConfig, ReportTotals, SlaStatus, UnifiedReport,
};

use crate::normalize::{NormalizedRow, NormalizedSource};

/// Breach state of one deadline at the evaluation instant. A deadline
/// exactly equal to the instant is still on time.
fn status_at(deadline: Option<NaiveDateTime>, now: NaiveDateTime) -> SlaStatus {
    match deadline {
        Some(deadline) if deadline < now => SlaStatus::Breached,
        _ => SlaStatus::OnTime,
    }
}

fn to_record(row: NormalizedRow, origin: Origin, now: NaiveDateTime) -> CanonicalRecord {
    CanonicalRecord {
        status: status_at(row.sla_deadline, now),
        id: row.id,
        failure_type: row.failure_type,
        opened_at: row.opened_at,
        sla_deadline: row.sla_deadline,
        origin,
    }
}

/// Descending by `opened_at`, null timestamps last.
fn compare_opened_desc(a: &CanonicalRecord, b: &CanonicalRecord) -> Ordering {
    match (a.opened_at, b.opened_at) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Merges the two normalized branches into a [`UnifiedReport`].
///
/// The export branch is filtered first: when its team column resolved,
/// only rows whose trimmed team value equals the configured target
/// exactly (case-sensitive) are retained. Records are then origin-tagged,
/// status is evaluated against the single `now` instant, and the merged
/// sequence is ordered descending by `opened_at` with nulls last.
pub fn reconcile(
    grid: NormalizedSource,
    export: NormalizedSource,
    config: &PipelineConfig,
    now: NaiveDateTime,
) -> UnifiedReport {
    let mut warnings = grid.warnings;
    warnings.extend(export.warnings);

    let export_rows: Vec<NormalizedRow> = if export.team_resolved {
        export
            .rows
            .into_iter()
            .filter(|row| {
                row.team.as_deref().map(str::trim) == Some(config.target_team.as_str())
            })
            .collect()
    } else {
        export.rows
    };

    let mut records: Vec<CanonicalRecord> = Vec::with_capacity(grid.rows.len() + export_rows.len());
    records.extend(grid.rows.into_iter().map(|row| to_record(row, Origin::Grid, now)));
    records.extend(
        export_rows
            .into_iter()
            .map(|row| to_record(row, Origin::Export, now)),
    );

    records.sort_by(compare_opened_desc);

    let mut totals = ReportTotals {
        total: records.len(),
        ..ReportTotals::default()
    };
    for record in &records {
        if record.status == SlaStatus::Breached {
            totals.breached += 1;
        }
        match record.origin {
            Origin::Grid => totals.grid += 1,
            Origin::Export => totals.export += 1,
        }
    }

    UnifiedReport {
        records,
        totals,
        evaluated_at: now,
        warnings,
    }
}

/// Re-evaluates breach status against a new instant.
///
/// Only `status`, the breached total, and the stored instant change;
/// every other field keeps its value.
pub fn refresh_status(report: &mut UnifiedReport, now: NaiveDateTime) {
    report.totals.breached = 0;
    for record in &mut report.records {
        record.status = status_at(record.sla_deadline, now);
        if record.status == SlaStatus::Breached {
            report.totals.breached += 1;
        }
    }
    report.evaluated_at = now;
}
