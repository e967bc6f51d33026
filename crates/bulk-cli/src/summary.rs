use std::collections::BTreeMap;

use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use serde_json::json;

use bulk_cli::pipeline::ImportRun;
use bulk_model::ErrorKind;
use bulk_report::IssueRow;
use bulk_validate::DATE_FORMAT;

use crate::cli::ReportFormatArg;

pub fn print_report(run: &ImportRun, format: ReportFormatArg) -> Result<()> {
    match format {
        ReportFormatArg::Table => print_tables(run),
        ReportFormatArg::Json => {
            let report = json!({
                "kind": run.kind.as_str(),
                "records": run.outcome.records.len(),
                "validationErrors": run.outcome.result.validation_errors,
                "containsErrors": run.outcome.result.contains_errors,
                "issues": run.issues,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn print_tables(run: &ImportRun) {
    println!("Import: {}", run.kind.as_str());
    println!("Records: {}", run.outcome.records.len());
    if run.issues.is_empty() {
        println!("No issues found.");
        return;
    }

    let mut counts: BTreeMap<ErrorKind, usize> = BTreeMap::new();
    for issue in &run.issues {
        *counts.entry(issue.kind).or_default() += 1;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Error"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (kind, count) in &counts {
        table.add_row(vec![kind_cell(*kind), count_cell(*count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(run.issues.len()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    println!();
    println!("Issues:");
    println!("{}", issue_table(&run.issues));
    if counts.contains_key(&ErrorKind::DateFormat) {
        println!("Dates must be written as {DATE_FORMAT}.");
    }
}

fn issue_table(issues: &[IssueRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Column"),
        header_cell("Header"),
        header_cell("Error"),
        header_cell("Detail"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    for issue in issues {
        table.add_row(vec![
            issue.line.map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(issue.column),
            issue
                .header
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            kind_cell(issue.kind),
            Cell::new(&issue.detail),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn kind_cell(kind: ErrorKind) -> Cell {
    let color = match kind {
        ErrorKind::EmptyFile | ErrorKind::ExcessHeader | ErrorKind::InvalidHeaderPosition => {
            Color::Magenta
        }
        ErrorKind::EmptyRow | ErrorKind::ExtraField => Color::Yellow,
        _ => Color::Red,
    };
    Cell::new(kind.as_str()).fg(color)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
