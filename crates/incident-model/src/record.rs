//! Canonical incident records and the unified report built from them.

use chrono::NaiveDateTime;
use std::fmt;

/// Which source system a canonical record came from.
///
/// Fixed at record creation and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The Grid (TCloud) incident grid export.
    Grid,
    /// The Export system ticket dump.
    Export,
}

impl Origin {
    /// Display label used in the unified table's `Origem` column.
    pub fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid (TCloud)",
            Self::Export => "Export System",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// SLA breach state relative to the report's evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlaStatus {
    /// Deadline is null or not yet passed.
    OnTime,
    /// Deadline is strictly earlier than the evaluation instant.
    Breached,
}

impl SlaStatus {
    /// Display label used in the unified table's `Status_SLA` column.
    pub fn label(self) -> &'static str {
        match self {
            Self::OnTime => "No Prazo",
            Self::Breached => "Vencido",
        }
    }
}

impl fmt::Display for SlaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One normalized incident record in the canonical schema.
///
/// Invariant: `status == Breached` iff `sla_deadline` is `Some` and
/// strictly earlier than the evaluation instant the report was built
/// against, else `OnTime`.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalRecord {
    /// Source identifier, or a synthetic row index when the source has none.
    pub id: String,
    /// Normalized short failure label.
    pub failure_type: String,
    /// When the incident was opened; null when the source value was unparseable.
    pub opened_at: Option<NaiveDateTime>,
    /// SLA deadline after the fallback policy was applied.
    pub sla_deadline: Option<NaiveDateTime>,
    /// Source system the record came from.
    pub origin: Origin,
    /// Breach state at the report's evaluation instant.
    pub status: SlaStatus,
}

/// Aggregate counts over the merged record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportTotals {
    pub total: usize,
    pub breached: usize,
    pub grid: usize,
    pub export: usize,
}

/// The combined report: ordered canonical records plus aggregates.
///
/// Records are sorted descending by `opened_at` with null timestamps
/// last. Built once per run; the evaluation instant is captured at build
/// time and reused for every record so the whole report is a consistent
/// status snapshot.
#[derive(Debug, Clone)]
pub struct UnifiedReport {
    pub records: Vec<CanonicalRecord>,
    pub totals: ReportTotals,
    /// The instant breach status was evaluated against.
    pub evaluated_at: NaiveDateTime,
    /// Non-fatal degradations encountered during the run.
    pub warnings: Vec<String>,
}

impl UnifiedReport {
    /// Returns failure-type labels with their frequencies, most frequent
    /// first. Ties break alphabetically so the ordering is deterministic.
    pub fn failure_type_counts(&self) -> Vec<(String, usize)> {
        let mut counts = std::collections::BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.failure_type.clone()).or_insert(0usize) += 1;
        }
        let mut ordered: Vec<(String, usize)> = counts.into_iter().collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ordered
    }

    /// The `n` most frequent failure types.
    pub fn top_failure_types(&self, n: usize) -> Vec<(String, usize)> {
        let mut counts = self.failure_type_counts();
        counts.truncate(n);
        counts
    }
}
