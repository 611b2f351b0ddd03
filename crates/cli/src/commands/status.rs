use anyhow::Result;
use photojury_core::Competition;

pub fn run(competition: &Competition, json: bool) -> Result<()> {
    let counts = competition.counts()?;
    let orphans = competition.orphaned_files()?;

    if json {
        let value = serde_json::json!({
            "categories": counts.categories,
            "photos": counts.photos,
            "scores": counts.scores,
            "orphaned_files": orphans,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!();
    println!("  Competition Status");
    println!("  ==================");
    println!();
    println!("   Categories: {:>6}", counts.categories);
    println!("   Photos:     {:>6}", counts.photos);
    println!("   Scores:     {:>6}", counts.scores);
    println!();
    println!("  {}", orphan_summary(orphans.len()));
    for orphan in &orphans {
        println!("   {}", orphan.display());
    }
    println!();

    Ok(())
}

fn orphan_summary(count: usize) -> String {
    match count {
        0 => "No orphaned files.".to_string(),
        1 => "1 orphaned file (stored but not in the catalog):".to_string(),
        n => format!("{n} orphaned files (stored but not in the catalog):"),
    }
}
