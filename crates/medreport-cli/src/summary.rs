//! Table rendering for parsed reports and the field registry.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use medreport_map::ParsedReport;
use medreport_model::{DiseaseForm, field_def};

pub fn print_parsed_report(parsed: &ParsedReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Disease"),
        header_cell("Field"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (disease, form) in parsed {
        for (name, value) in form {
            // show the form label where the registry knows the field
            let label = field_def(*disease, name).map_or(name.as_str(), |def| def.label);
            table.add_row(vec![
                Cell::new(disease.label()),
                Cell::new(label),
                Cell::new(value.to_string()),
            ]);
        }
    }
    println!("{table}");
}

pub fn print_field_listing(forms: &[&DiseaseForm]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Disease"),
        header_cell("Field"),
        header_cell("Form label"),
        header_cell("Kind"),
        header_cell("Aliases"),
    ]);
    apply_table_style(&mut table);
    for form in forms {
        for field in form.fields {
            table.add_row(vec![
                Cell::new(form.disease.label()),
                Cell::new(field.name),
                Cell::new(field.label),
                Cell::new(field.kind.to_string()),
                Cell::new(field.aliases.join(", ")),
            ]);
        }
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
