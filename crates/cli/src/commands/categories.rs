use anyhow::Result;
use photojury_core::Competition;

pub fn list(competition: &Competition) -> Result<()> {
    let categories = competition.categories()?;

    if categories.is_empty() {
        println!("No categories yet. The first submitted photo creates one.");
        return Ok(());
    }

    for category in &categories {
        let count = competition.list_photos(&category.name)?.len();
        println!("  {} ({} photos)", category.name, count);
    }

    Ok(())
}

pub fn add(competition: &Competition, name: String) -> Result<()> {
    let category = competition.add_category(&name)?;
    println!("Added category: {}", category.name);
    Ok(())
}
