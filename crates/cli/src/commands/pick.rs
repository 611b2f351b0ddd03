use anyhow::Result;
use photojury_core::Competition;

pub fn run(competition: &Competition, category: &str) -> Result<()> {
    let (photo, position) = competition.pick_random_photo(category)?;

    println!("Photo #{position}");
    println!("  ID:           {}", photo.id);
    println!("  Title:        {}", photo.title);
    println!("  Photographer: {}", photo.photographer);
    println!("  File:         {}", photo.path.display());

    Ok(())
}
