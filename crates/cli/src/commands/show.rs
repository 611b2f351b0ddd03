use anyhow::Result;
use photojury_core::error::Error;
use photojury_core::Competition;

pub fn run(competition: &Competition, id: i64) -> Result<()> {
    let photo = competition.photo(id)?;

    println!("Photo #{}", photo.id);
    println!("  Title:        {}", photo.title);
    println!("  Photographer: {}", photo.photographer);
    println!("  Category:     {}", photo.category);
    println!("  File:         {}", photo.path.display());

    match competition.display_image(id, 1200) {
        Ok(image) => println!("  Size:         {}x{}", image.width(), image.height()),
        Err(Error::ImageMissing(path)) => {
            println!("  Size:         file missing ({})", path.display())
        }
        Err(e) => return Err(e.into()),
    }

    let scores = competition.scores_for_photo(id)?;
    if scores.is_empty() {
        println!("  Scores:       none yet");
    } else {
        let values: Vec<String> = scores.iter().map(|s| s.value.to_string()).collect();
        let mean = scores.iter().map(|s| s.value as f64).sum::<f64>() / scores.len() as f64;
        println!("  Scores:       {} (mean {mean:.1})", values.join(", "));
    }

    Ok(())
}
