use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lcia_cli::pipeline::MapSummary;

pub fn print_summary(summary: &MapSummary) {
    println!("Input: {}", summary.input.display());
    match &summary.system {
        Some(system) => println!("Mapping system: {system}"),
        None => println!("Mapping system: -"),
    }
    if let Some(path) = &summary.output {
        println!("Output: {}", path.display());
    }

    let stats = &summary.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table.add_row(vec![Cell::new("Input rows"), Cell::new(stats.input_rows)]);
    if stats.applied {
        table.add_row(vec![Cell::new("Matched"), Cell::new(stats.matched)]);
        table.add_row(vec![Cell::new("Created"), Cell::new(stats.created)]);
        table.add_row(vec![
            Cell::new("Preserved (unmapped)"),
            count_cell(stats.preserved, Color::Yellow),
        ]);
        table.add_row(vec![
            Cell::new("Dropped (unmapped)"),
            count_cell(stats.unmapped, Color::Yellow),
        ]);
        table.add_row(vec![
            Cell::new("Duplicate combinations"),
            count_cell(stats.duplicates.combinations.len(), Color::Red),
        ]);
    } else {
        table.add_row(vec![
            Cell::new("Mapping").fg(Color::Yellow),
            Cell::new("not applied").fg(Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("Output rows")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.output_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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
        Cell::new(count).fg(Color::DarkGrey)
    }
}
