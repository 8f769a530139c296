use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use incident_model::SlaStatus;

use crate::types::RunResult;

/// Records shown in the console preview.
const PREVIEW_ROWS: usize = 10;

pub fn print_summary(result: &RunResult) {
    let totals = &result.report.totals;
    match &result.output {
        Some(path) => println!("Report: {}", path.display()),
        None => println!("Report: not written (dry run)"),
    }
    println!(
        "Evaluated at: {}",
        result.report.evaluated_at.format("%Y-%m-%d %H:%M:%S")
    );

    let mut metrics = Table::new();
    metrics.set_header(vec![
        header_cell("Total"),
        header_cell("Vencidos"),
        header_cell("Origem Grid"),
        header_cell("Origem Export"),
    ]);
    apply_table_style(&mut metrics);
    for index in 0..4 {
        align_column(&mut metrics, index, CellAlignment::Right);
    }
    metrics.add_row(vec![
        Cell::new(totals.total).add_attribute(Attribute::Bold),
        count_cell(totals.breached, Color::Red),
        Cell::new(totals.grid),
        Cell::new(totals.export),
    ]);
    println!("{metrics}");

    print_top_failures(result);
    print_preview(result);

    if !result.report.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &result.report.warnings {
            eprintln!("- {warning}");
        }
    }
}

fn print_top_failures(result: &RunResult) {
    let top = result.report.top_failure_types(5);
    if top.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Tipo de Falha"), header_cell("Ocorrências")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (failure_type, count) in top {
        table.add_row(vec![Cell::new(failure_type), Cell::new(count)]);
    }
    println!();
    println!("Top 5 tipos de falha:");
    println!("{table}");
}

fn print_preview(result: &RunResult) {
    if result.table.rows.is_empty() {
        return;
    }
    let mut table = Table::new();
    let header_cells: Vec<Cell> = result
        .table
        .headers
        .iter()
        .map(|h| header_cell(h))
        .collect();
    table.set_header(header_cells);
    apply_table_style(&mut table);
    for (row, record) in result
        .table
        .rows
        .iter()
        .zip(result.report.records.iter())
        .take(PREVIEW_ROWS)
    {
        let mut cells: Vec<Cell> = row
            .iter()
            .take(row.len().saturating_sub(1))
            .map(|value| {
                if value.is_empty() {
                    dim_cell("-")
                } else {
                    Cell::new(value)
                }
            })
            .collect();
        cells.push(status_cell(record.status));
        table.add_row(cells);
    }
    println!();
    let shown = result.table.rows.len().min(PREVIEW_ROWS);
    println!("Registros ({shown} de {}):", result.table.rows.len());
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn status_cell(status: SlaStatus) -> Cell {
    match status {
        SlaStatus::Breached => Cell::new(status.label())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        SlaStatus::OnTime => Cell::new(status.label()).fg(Color::Green),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
