//! The unified output table.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Serialize;

use incident_model::{CanonicalRecord, UnifiedReport};

/// Default file name for the exported unified report.
pub const DEFAULT_REPORT_FILE_NAME: &str = "incidentes_unificados.csv";

const HEADERS: [&str; 6] = [
    "ID",
    "Tipo_Falha",
    "Data_Abertura",
    "Prazo_SLA",
    "Origem",
    "Status_SLA",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The canonical table: fixed headers, one string row per record.
///
/// Null timestamps render as empty cells so downstream consumers see the
/// failure scope at the row level.
#[derive(Debug, Clone, Serialize)]
pub struct UnifiedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn format_timestamp(value: Option<NaiveDateTime>) -> String {
    value
        .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

fn record_row(record: &CanonicalRecord) -> Vec<String> {
    vec![
        record.id.clone(),
        record.failure_type.clone(),
        format_timestamp(record.opened_at),
        format_timestamp(record.sla_deadline),
        record.origin.label().to_string(),
        record.status.label().to_string(),
    ]
}

impl UnifiedTable {
    /// Builds the table from a report, preserving record order.
    pub fn from_report(report: &UnifiedReport) -> Self {
        Self {
            headers: HEADERS.iter().map(|h| (*h).to_string()).collect(),
            rows: report.records.iter().map(record_row).collect(),
        }
    }
}

/// Writes the table as delimited text.
pub fn write_csv<W: Write>(table: &UnifiedTable, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(&table.headers)
        .context("write report headers")?;
    for row in &table.rows {
        csv_writer.write_record(row).context("write report row")?;
    }
    csv_writer.flush().context("flush report")?;
    Ok(())
}

/// Writes the table to a file path.
pub fn write_csv_file(table: &UnifiedTable, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create report file {}", path.display()))?;
    write_csv(table, file)
}
