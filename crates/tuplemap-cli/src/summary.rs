use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use tuplemap_map::{MappingRegistry, Result};

/// Table of registered pairs with their rule and unmapped member names.
pub fn profiles_table(registry: &MappingRegistry) -> Result<Table> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Destination"),
        header_cell("Rules"),
        header_cell("Unmapped"),
    ]);
    apply_table_style(&mut table);
    for pair in registry.pairs() {
        let members = registry.members(&pair)?;
        let unmapped = registry.unmapped_members(&pair)?;
        table.add_row(vec![
            Cell::new(pair.source.short_name()),
            Cell::new(pair.destination.short_name()),
            list_cell(&members),
            unmapped_cell(&unmapped),
        ]);
    }
    Ok(table)
}

pub fn print_profiles(registry: &MappingRegistry, profiles: &[&str]) -> Result<()> {
    println!("Profiles: {}", profiles.join(", "));
    println!("{}", profiles_table(registry)?);
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn list_cell(members: &[&str]) -> Cell {
    if members.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(members.join(", "))
    }
}

fn unmapped_cell(members: &[&str]) -> Cell {
    if members.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(members.join(", ")).fg(Color::Yellow)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).add_attribute(Attribute::Dim)
}
