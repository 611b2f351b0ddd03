use anyhow::Result;
use photojury_core::Competition;

pub fn run(competition: &mut Competition, id: i64) -> Result<()> {
    let photo = competition.remove_photo(id)?;
    println!(
        "Removed photo #{}: \"{}\" by {}",
        photo.id, photo.title, photo.photographer
    );
    Ok(())
}
