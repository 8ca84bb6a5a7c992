//! Coverage summary printed after a run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::{DeriveResult, RenderResult};

pub fn print_render_summary(result: &RenderResult) {
    println!("Value column: {}", result.value_label);
    println!("Static map: {}", result.png);
    if let Some(html) = &result.html {
        println!("Interactive map: {html}");
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Input rows"),
        Cell::new(result.diagnostics.input_rows),
    ]);
    table.add_row(vec![
        Cell::new("Resolved rows"),
        Cell::new(result.diagnostics.resolved_rows()),
    ]);
    table.add_row(vec![
        Cell::new("Metric entries"),
        Cell::new(result.stats.metric_entries),
    ]);
    table.add_row(vec![
        Cell::new("Dropped ISO codes"),
        count_cell(result.diagnostics.dropped_codes, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Missing values"),
        count_cell(result.diagnostics.missing_values, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Unresolved names"),
        count_cell(result.diagnostics.unresolved.len(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Geometry features"),
        Cell::new(result.stats.features),
    ]);
    table.add_row(vec![
        Cell::new("Coded features"),
        Cell::new(result.stats.coded_features),
    ]);
    table.add_row(vec![
        Cell::new("Matched features")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.stats.matched)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if let Some(range) = result.range {
        println!("Value range: {:.4} to {:.4}", range.min, range.max);
    } else {
        println!("Value range: no plottable values");
    }
    report_unresolved(&result.diagnostics.unresolved);
}

pub fn print_derive_summary(result: &DeriveResult) {
    println!("Output: {}", result.output);
    println!(
        "Derived {} rows, {} unmatched",
        result.derivation.rows.len(),
        result.derivation.unmatched.len()
    );
    report_unresolved(&result.derivation.unmatched);
}

/// One line per identifier that resolved to nothing, on stderr so the
/// summary table stays pipeable.
fn report_unresolved(names: &[String]) {
    if names.is_empty() {
        return;
    }
    eprintln!("Unresolved countries (skipped):");
    for name in names {
        eprintln!("- {name}");
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    let cell = Cell::new(count);
    if count > 0 { cell.fg(color) } else { cell }
}
