use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use photojury_core::Competition;

pub fn run(competition: &Competition, category: Option<&str>, json: bool) -> Result<()> {
    let mut report = competition.score_report()?;
    if let Some(name) = category {
        report.retain(|line| line.category == name);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.is_empty() {
        println!("No scores recorded yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("ID"),
        Cell::new("Photo"),
        Cell::new("Photographer"),
        Cell::new("Category"),
        Cell::new("Scores"),
        Cell::new("Mean"),
    ]);

    for line in &report {
        table.add_row(vec![
            Cell::new(line.photo_id),
            Cell::new(&line.title),
            Cell::new(&line.photographer),
            Cell::new(&line.category),
            Cell::new(line.entries),
            Cell::new(format!("{:.1}", line.mean)),
        ]);
    }

    println!("{table}");

    Ok(())
}
