//! Integration tests for the CLI run driver.

use std::fs;
use std::path::Path;

use clap::Parser;

use incident_cli::cli::Cli;
use incident_cli::commands::run_unify;

const GRID_CSV: &str = "\
Exibir ID,Descrição,Data de criação\n\
INC-1,Acesso,17/12/2025 09:00:00\n\
INC-2,\"Tipo de falha: Timeout\nDetalhes\",16 de dez. de 2025 08:30:00\n";

const EXPORT_CSV: &str = "\
Número;Assunto;Data Hora de Abertura;Resolver até;Equipe Responsável\n\
400001;Incidente - Rede;15/12/2025 10:00:00;;TCLOUD-DEVOPS-PROTHEUS\n\
400002;Incidente - Disco;15/12/2025 11:00:00;;OUTRO-TIME\n";

fn write_inputs(dir: &Path) -> (String, String) {
    let grid = dir.join("grid.csv");
    let export = dir.join("export.csv");
    fs::write(&grid, GRID_CSV).unwrap();
    fs::write(&export, EXPORT_CSV).unwrap();
    (
        grid.to_string_lossy().into_owned(),
        export.to_string_lossy().into_owned(),
    )
}

#[test]
fn test_run_writes_unified_report() {
    let dir = tempfile::tempdir().unwrap();
    let (grid, export) = write_inputs(dir.path());
    let output = dir.path().join("unificado.csv");
    let output_arg = output.to_string_lossy().into_owned();

    let cli = Cli::parse_from([
        "incident-unify",
        grid.as_str(),
        export.as_str(),
        "--output",
        output_arg.as_str(),
    ]);
    let result = run_unify(&cli).unwrap();

    assert_eq!(result.report.totals.total, 3);
    assert_eq!(result.report.totals.grid, 2);
    assert_eq!(result.report.totals.export, 1);
    assert_eq!(result.output.as_deref(), Some(output.as_path()));

    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(
        contents.lines().next().unwrap(),
        "ID,Tipo_Falha,Data_Abertura,Prazo_SLA,Origem,Status_SLA"
    );
    assert_eq!(contents.lines().count(), 4);
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (grid, export) = write_inputs(dir.path());
    let output = dir.path().join("unificado.csv");
    let output_arg = output.to_string_lossy().into_owned();

    let cli = Cli::parse_from([
        "incident-unify",
        grid.as_str(),
        export.as_str(),
        "--output",
        output_arg.as_str(),
        "--dry-run",
    ]);
    let result = run_unify(&cli).unwrap();

    assert!(result.output.is_none());
    assert!(!output.exists());
    assert_eq!(result.table.rows.len(), 3);
}

#[test]
fn test_missing_input_file_fails_with_path_context() {
    let dir = tempfile::tempdir().unwrap();
    let (_, export) = write_inputs(dir.path());
    let missing = dir.path().join("nope.csv");
    let missing_arg = missing.to_string_lossy().into_owned();

    let cli = Cli::parse_from(["incident-unify", missing_arg.as_str(), export.as_str()]);
    let err = run_unify(&cli).unwrap_err();
    assert!(err.to_string().contains("read grid input"));
}

#[test]
fn test_undecodable_input_surfaces_pipeline_error() {
    let dir = tempfile::tempdir().unwrap();
    let (_, export) = write_inputs(dir.path());
    let garbage = dir.path().join("garbage.csv");
    fs::write(&garbage, "linha unica sem delimitador\noutra linha\n").unwrap();
    let garbage_arg = garbage.to_string_lossy().into_owned();

    let cli = Cli::parse_from([
        "incident-unify",
        garbage_arg.as_str(),
        export.as_str(),
        "--dry-run",
    ]);
    let err = run_unify(&cli).unwrap_err();
    assert!(err.to_string().contains("grid"));
}
