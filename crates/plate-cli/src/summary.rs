use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use plate_cli::workflow::ValidateOutcome;
use plate_model::{PlateCandidate, PlateType};
use plate_standards::Region;

pub fn print_candidates(candidates: &[PlateCandidate]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Plate"),
        header_cell("Plate Type"),
        header_cell("Vehicle"),
        header_cell("Region"),
    ]);
    apply_table_style(&mut table);
    for candidate in candidates {
        table.add_row(vec![
            Cell::new(&candidate.plate_number).add_attribute(Attribute::Bold),
            Cell::new(&candidate.plate_type),
            Cell::new(&candidate.vehicle_type),
            Cell::new(&candidate.region),
        ]);
    }
    println!("{table}");
}

pub fn print_validation(outcome: &ValidateOutcome) {
    println!("Plate: {}", outcome.record.plate_number);
    println!("Vehicle type: {}", outcome.vehicle_type);
    if outcome.report.is_valid() {
        println!("Result: VALID");
        return;
    }
    println!(
        "Result: INVALID ({} field error(s))",
        outcome.report.error_count()
    );
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Message")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Left);
    for (field, message) in &outcome.report.errors {
        table.add_row(vec![
            Cell::new(field.as_str()).fg(Color::Red),
            Cell::new(message),
        ]);
    }
    println!("{table}");
}

pub fn print_regions(regions: &[Region]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Prefix"),
        header_cell("Name"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for region in regions {
        table.add_row(vec![
            Cell::new(&region.code)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(region.prefix),
            Cell::new(&region.name),
        ]);
    }
    println!("{table}");
}

pub fn print_plate_types(vehicle_type: &str, allowed: &[PlateType]) {
    println!("Vehicle type: {vehicle_type}");
    let mut table = Table::new();
    table.set_header(vec![header_cell("Allowed Plate Types")]);
    apply_table_style(&mut table);
    for plate_type in allowed {
        table.add_row(vec![Cell::new(plate_type.as_str())]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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
