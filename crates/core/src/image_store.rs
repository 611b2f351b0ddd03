use std::collections::HashSet;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::error::{Error, Result};
use crate::store::Store;

/// Quarter-turn applied to an image before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Cw90,
    Cw180,
    Cw270,
}

impl Rotation {
    /// Derive the rotation from the file's EXIF orientation tag.
    /// Anything unreadable or unhandled (mirrored variants included)
    /// degrades to `Rotation::None`.
    pub fn from_exif(path: &Path) -> Rotation {
        let orientation = (|| {
            let file = std::fs::File::open(path).ok()?;
            let mut reader = std::io::BufReader::new(file);
            let exif = exif::Reader::new().read_from_container(&mut reader).ok()?;
            exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?
                .value
                .get_uint(0)
        })();
        match orientation {
            Some(3) => Rotation::Cw180,
            Some(6) => Rotation::Cw90,
            Some(8) => Rotation::Cw270,
            _ => Rotation::None,
        }
    }

    pub fn apply(self, image: &DynamicImage) -> DynamicImage {
        match self {
            Rotation::None => image.clone(),
            Rotation::Cw90 => image.rotate90(),
            Rotation::Cw180 => image.rotate180(),
            Rotation::Cw270 => image.rotate270(),
        }
    }
}

/// Flat directory of competition image files, named
/// `<timestamp>_<original basename>`. The store never overwrites:
/// name collisions get a numeric suffix.
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write a decoded image into the store and return the stored path.
    /// The source file itself is never touched; only the decoded pixels
    /// (rotated if requested) are re-encoded at the target path.
    pub fn ingest(
        &self,
        source: &Path,
        image: &DynamicImage,
        rotation: Rotation,
    ) -> Result<PathBuf> {
        let base_name = source
            .file_name()
            .ok_or(Error::MissingField {
                field: "source file name",
            })?
            .to_string_lossy();
        std::fs::create_dir_all(&self.dir)?;

        let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S");
        let target = build_store_path(&self.dir, &format!("{timestamp}_{base_name}"));
        match rotation {
            Rotation::None => image.save(&target)?,
            _ => rotation.apply(image).save(&target)?,
        }
        log::debug!("stored image at {}", target.display());
        Ok(target)
    }

    /// Best-effort removal of a stored file. Returns true if a file
    /// was deleted. A missing file is not an error; any other failure
    /// is logged and swallowed.
    pub fn delete(&self, path: &Path) -> bool {
        match std::fs::remove_file(path) {
            Ok(()) => true,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => {
                log::warn!("could not delete {}: {e}", path.display());
                false
            }
        }
    }

    /// Files in the store directory that no photo row references,
    /// sorted by path. A missing directory counts as no orphans.
    pub fn orphaned_files(&self, store: &Store) -> Result<Vec<PathBuf>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let referenced: HashSet<PathBuf> = store
            .all_photos()?
            .into_iter()
            .map(|photo| photo.path)
            .collect();

        let mut orphans = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.is_file() && !referenced.contains(&path) {
                orphans.push(path);
            }
        }
        orphans.sort();
        Ok(orphans)
    }
}

/// Pick a path under `dir` for `file_name`, appending `_1`, `_2`, ... to
/// the stem until the name is free.
fn build_store_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    let extension = Path::new(file_name)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut counter = 1;
    loop {
        let candidate = dir.join(format!("{stem}_{counter}{extension}"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Decode an image file into memory.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    Ok(image::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_jpeg(path: &Path, width: u32, height: u32) {
        let img = image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        img.save(path).unwrap();
    }

    // ── build_store_path ─────────────────────────────────────────

    #[test]
    fn test_build_store_path_no_collision() {
        let tmp = tempfile::tempdir().unwrap();
        let path = build_store_path(tmp.path(), "photo.jpg");
        assert_eq!(path, tmp.path().join("photo.jpg"));
    }

    #[test]
    fn test_build_store_path_appends_counter() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("photo.jpg"), b"x").unwrap();
        let path = build_store_path(tmp.path(), "photo.jpg");
        assert_eq!(path, tmp.path().join("photo_1.jpg"));
    }

    #[test]
    fn test_build_store_path_counts_past_taken_suffixes() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("photo.jpg"), b"x").unwrap();
        std::fs::write(tmp.path().join("photo_1.jpg"), b"x").unwrap();
        std::fs::write(tmp.path().join("photo_2.jpg"), b"x").unwrap();
        let path = build_store_path(tmp.path(), "photo.jpg");
        assert_eq!(path, tmp.path().join("photo_3.jpg"));
    }

    #[test]
    fn test_build_store_path_without_extension() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("photo"), b"x").unwrap();
        let path = build_store_path(tmp.path(), "photo");
        assert_eq!(path, tmp.path().join("photo_1"));
    }

    // ── Ingest ───────────────────────────────────────────────────

    #[test]
    fn test_ingest_names_with_timestamp_prefix() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("sunset.jpg");
        create_jpeg(&source, 32, 32);

        let store = ImageStore::new(&tmp.path().join("stored"));
        let image = load_image(&source).unwrap();
        let stored = store.ingest(&source, &image, Rotation::None).unwrap();

        assert!(stored.exists());
        let name = stored.file_name().unwrap().to_string_lossy();
        assert_eq!(name.len(), "sunset.jpg".len() + 15);
        assert!(name[..14].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(&name[14..15], "_");
        assert!(name.ends_with("sunset.jpg"));
    }

    #[test]
    fn test_ingest_twice_never_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("sunset.jpg");
        create_jpeg(&source, 32, 32);

        let store = ImageStore::new(&tmp.path().join("stored"));
        let image = load_image(&source).unwrap();
        let first = store.ingest(&source, &image, Rotation::None).unwrap();
        let second = store.ingest(&source, &image, Rotation::None).unwrap();

        assert_ne!(first, second);
        assert!(first.exists());
        assert!(second.exists());
    }

    #[test]
    fn test_ingest_leaves_source_in_place() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("sunset.jpg");
        create_jpeg(&source, 32, 32);

        let store = ImageStore::new(&tmp.path().join("stored"));
        let image = load_image(&source).unwrap();
        store.ingest(&source, &image, Rotation::None).unwrap();
        assert!(source.exists());
    }

    #[test]
    fn test_ingest_applies_rotation() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("wide.jpg");
        create_jpeg(&source, 64, 32);

        let store = ImageStore::new(&tmp.path().join("stored"));
        let image = load_image(&source).unwrap();
        let stored = store.ingest(&source, &image, Rotation::Cw90).unwrap();

        let reloaded = load_image(&stored).unwrap();
        assert_eq!(reloaded.width(), 32);
        assert_eq!(reloaded.height(), 64);
    }

    // ── Rotation ─────────────────────────────────────────────────

    #[test]
    fn test_rotation_apply_swaps_dimensions() {
        let img = DynamicImage::new_rgb8(64, 32);
        assert_eq!(Rotation::None.apply(&img).width(), 64);
        assert_eq!(Rotation::Cw90.apply(&img).width(), 32);
        assert_eq!(Rotation::Cw180.apply(&img).width(), 64);
        assert_eq!(Rotation::Cw270.apply(&img).width(), 32);
    }

    #[test]
    fn test_from_exif_without_metadata_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("plain.jpg");
        create_jpeg(&source, 16, 16);
        assert_eq!(Rotation::from_exif(&source), Rotation::None);
    }

    #[test]
    fn test_from_exif_unreadable_file_is_none() {
        assert_eq!(
            Rotation::from_exif(Path::new("/no/such/file.jpg")),
            Rotation::None
        );
    }

    // ── Delete ───────────────────────────────────────────────────

    #[test]
    fn test_delete_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("gone.jpg");
        std::fs::write(&path, b"x").unwrap();

        let store = ImageStore::new(tmp.path());
        assert!(store.delete(&path));
        assert!(!path.exists());
    }

    #[test]
    fn test_delete_missing_file_is_quiet() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ImageStore::new(tmp.path());
        assert!(!store.delete(&tmp.path().join("never.jpg")));
    }

    // ── Orphans ──────────────────────────────────────────────────

    #[test]
    fn test_orphaned_files_reports_unreferenced() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ImageStore::new(tmp.path());

        let db = Store::open_in_memory().unwrap();
        let category = db.ensure_category("Beginner").unwrap();
        let kept = tmp.path().join("kept.jpg");
        std::fs::write(&kept, b"x").unwrap();
        db.insert_photo(&kept, category.id, "Kept", "Sam").unwrap();

        let stray = tmp.path().join("stray.jpg");
        std::fs::write(&stray, b"x").unwrap();

        assert_eq!(store.orphaned_files(&db).unwrap(), vec![stray]);
    }

    #[test]
    fn test_orphaned_files_missing_dir_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ImageStore::new(&tmp.path().join("absent"));
        let db = Store::open_in_memory().unwrap();
        assert!(store.orphaned_files(&db).unwrap().is_empty());
    }
}
