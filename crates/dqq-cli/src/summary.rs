use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ScoreResult;

pub fn print_summary(result: &ScoreResult) {
    println!("Input: {}", result.source.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Meals"),
        header_cell("FGDS"),
        header_cell("NCD-P"),
        header_cell("NCD-R"),
        header_cell("GDR"),
        header_cell("All-5"),
        header_cell("MDD-W"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for day in &result.days {
        let indicators = &day.indicators;
        table.add_row(vec![
            Cell::new(day.date),
            Cell::new(day.meals),
            Cell::new(indicators.fgds),
            Cell::new(indicators.ncdp),
            Cell::new(indicators.ncdr),
            gdr_cell(indicators.gdr),
            flag_cell(indicators.all5),
            mddw_cell(indicators.mddw),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// GDR centers on 9: above reads protective (green), below risky (red).
fn gdr_cell(gdr: i8) -> Cell {
    if gdr > 9 {
        Cell::new(gdr).fg(Color::Green)
    } else if gdr < 9 {
        Cell::new(gdr).fg(Color::Red)
    } else {
        Cell::new(gdr)
    }
}

fn flag_cell(value: u8) -> Cell {
    if value == 1 {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("-").add_attribute(Attribute::Dim)
    }
}

fn mddw_cell(value: Option<u8>) -> Cell {
    match value {
        Some(v) => flag_cell(v),
        None => Cell::new("n/a").add_attribute(Attribute::Dim),
    }
}
