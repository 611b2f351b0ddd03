use std::path::Path;

use anyhow::{bail, Result};
use photojury_core::image_store::{load_image, Rotation};
use photojury_core::Competition;

pub fn run(
    competition: &Competition,
    file: &Path,
    category: &str,
    title: &str,
    photographer: &str,
    rotate: &str,
) -> Result<()> {
    let rotation = parse_rotation(file, rotate)?;
    let image = load_image(file)?;
    let id = competition.add_photo(category, title, photographer, file, &image, rotation)?;
    println!("Added photo #{id}: \"{title}\" by {photographer} ({category})");
    Ok(())
}

fn parse_rotation(file: &Path, rotate: &str) -> Result<Rotation> {
    Ok(match rotate {
        "auto" => Rotation::from_exif(file),
        "0" => Rotation::None,
        "90" => Rotation::Cw90,
        "180" => Rotation::Cw180,
        "270" => Rotation::Cw270,
        other => bail!("invalid rotation '{other}' (use auto, 0, 90, 180, or 270)"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rotation_quarter_turns() {
        let file = Path::new("photo.jpg");
        assert_eq!(parse_rotation(file, "0").unwrap(), Rotation::None);
        assert_eq!(parse_rotation(file, "90").unwrap(), Rotation::Cw90);
        assert_eq!(parse_rotation(file, "180").unwrap(), Rotation::Cw180);
        assert_eq!(parse_rotation(file, "270").unwrap(), Rotation::Cw270);
    }

    #[test]
    fn test_parse_rotation_rejects_other_angles() {
        assert!(parse_rotation(Path::new("photo.jpg"), "45").is_err());
        assert!(parse_rotation(Path::new("photo.jpg"), "").is_err());
    }

    #[test]
    fn test_parse_rotation_auto_without_exif_is_none() {
        // No such file: EXIF probing degrades to no rotation.
        let rotation = parse_rotation(Path::new("/no/such/file.jpg"), "auto").unwrap();
        assert_eq!(rotation, Rotation::None);
    }
}
