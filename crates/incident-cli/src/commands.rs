//! The unify run driver.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use incident_core::unify;
use incident_model::PipelineConfig;
use incident_report::{DEFAULT_REPORT_FILE_NAME, UnifiedTable, write_csv_file};

use crate::cli::Cli;
use crate::types::RunResult;

fn config_from_cli(cli: &Cli) -> PipelineConfig {
    let mut config = PipelineConfig::default().with_sla_hours(cli.sla_hours);
    if let Some(team) = &cli.team {
        config = config.with_target_team(team.clone());
    }
    config
}

/// Reads both inputs, runs the pipeline, and writes the report artifact.
pub fn run_unify(cli: &Cli) -> Result<RunResult> {
    let start = Instant::now();
    let config = config_from_cli(cli);

    let grid_bytes =
        fs::read(&cli.grid).with_context(|| format!("read grid input {}", cli.grid.display()))?;
    let export_bytes = fs::read(&cli.export)
        .with_context(|| format!("read export input {}", cli.export.display()))?;
    debug!(
        grid = %cli.grid.display(),
        grid_bytes = grid_bytes.len(),
        export = %cli.export.display(),
        export_bytes = export_bytes.len(),
        "inputs loaded"
    );

    let report = unify(&grid_bytes, &export_bytes, &config)?;
    let table = UnifiedTable::from_report(&report);

    let output = if cli.dry_run {
        None
    } else {
        let path: PathBuf = cli
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_FILE_NAME));
        write_csv_file(&table, &path)?;
        Some(path)
    };

    let output_label = output
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "none (dry run)".to_string());
    info!(
        total = report.totals.total,
        breached = report.totals.breached,
        output = %output_label,
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunResult {
        report,
        table,
        output,
    })
}
