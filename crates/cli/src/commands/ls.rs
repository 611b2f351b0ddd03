use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use photojury_core::domain::PhotoEntry;
use photojury_core::Competition;

pub fn run(competition: &Competition, category: Option<&str>, json: bool) -> Result<()> {
    match category {
        Some(name) => list_category(competition, name, json),
        None => list_all(competition, json),
    }
}

fn list_category(competition: &Competition, category: &str, json: bool) -> Result<()> {
    let entries = competition.list_photos(category)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No photos in category '{category}'.");
        return Ok(());
    }

    println!("{}", entries_table(&entries));
    println!("{} photos in {category}", entries.len());

    Ok(())
}

fn list_all(competition: &Competition, json: bool) -> Result<()> {
    let categories = competition.categories()?;

    if json {
        let mut by_category = serde_json::Map::new();
        for category in &categories {
            let entries = competition.list_photos(&category.name)?;
            by_category.insert(category.name.clone(), serde_json::to_value(entries)?);
        }
        let doc = serde_json::Value::Object(by_category);
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    if categories.is_empty() {
        println!("No photos yet.");
        return Ok(());
    }

    for category in &categories {
        let entries = competition.list_photos(&category.name)?;
        println!();
        println!("  {} ({} photos)", category.name, entries.len());
        if !entries.is_empty() {
            println!("{}", entries_table(&entries));
        }
    }
    println!();

    Ok(())
}

fn entries_table(entries: &[PhotoEntry]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("ID"),
        Cell::new("Photo"),
        Cell::new("Photographer"),
    ]);

    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.position),
            Cell::new(entry.id),
            Cell::new(&entry.title),
            Cell::new(&entry.photographer),
        ]);
    }

    table
}
