pub mod domain;
pub mod error;
pub mod image_store;
pub mod judging;
pub mod store;

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::domain::*;
use crate::error::{Error, Result};
use crate::image_store::{ImageStore, Rotation};
use crate::store::Store;

/// Progress events emitted while a reset walks the stored files.
pub enum ResetProgress {
    /// Reset started; `total` files will be visited.
    Start { total: usize },
    /// A stored file was removed.
    FileRemoved { path: PathBuf },
    /// A stored file was already gone or could not be removed.
    FileSkipped { path: PathBuf },
    /// File pass finished; database rows are wiped next.
    Complete { removed: usize, skipped: usize },
}

/// What a reset actually deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetOutcome {
    pub files_removed: usize,
    pub files_skipped: usize,
    pub scores: usize,
    pub photos: usize,
    pub categories: usize,
}

/// A photography competition: the catalog database plus its image
/// directory. Holds no judging state; callers remember which photo
/// a pick returned.
pub struct Competition {
    store: Store,
    images: ImageStore,
}

impl Competition {
    /// Open (or create) a competition rooted at the given database path
    /// and image directory.
    pub fn open(db_path: &Path, image_dir: &Path) -> Result<Self> {
        let store = Store::open(db_path)?;
        let images = ImageStore::new(image_dir);
        Ok(Self { store, images })
    }

    // ── Catalog ──────────────────────────────────────────────────────

    pub fn add_category(&self, name: &str) -> Result<Category> {
        let name = require(name, "category")?;
        self.store.ensure_category(name)
    }

    pub fn categories(&self) -> Result<Vec<Category>> {
        self.store.list_categories()
    }

    /// Register a photo: copy its pixels into the image store (rotated
    /// if requested), then record it under the category, creating the
    /// category on first use. Returns the new photo id.
    ///
    /// If the database insert fails after the file was written, the
    /// file stays behind; `orphaned_files` will report it.
    pub fn add_photo(
        &self,
        category: &str,
        title: &str,
        photographer: &str,
        source: &Path,
        image: &DynamicImage,
        rotation: Rotation,
    ) -> Result<i64> {
        let category = require(category, "category")?;
        let title = require(title, "title")?;
        let photographer = require(photographer, "photographer")?;
        if source.file_name().is_none() {
            return Err(Error::MissingField {
                field: "source file name",
            });
        }

        let category = self.store.ensure_category(category)?;
        let stored = self.images.ingest(source, image, rotation)?;
        self.store
            .insert_photo(&stored, category.id, title, photographer)
    }

    pub fn photo(&self, id: i64) -> Result<Photo> {
        self.store.get_photo(id)?.ok_or(Error::PhotoNotFound(id))
    }

    /// Entries of a category with 1-based positions, recomputed from
    /// the current ascending-id order on every call.
    pub fn list_photos(&self, category: &str) -> Result<Vec<PhotoEntry>> {
        let entries = self
            .store
            .photos_in_category(category)?
            .into_iter()
            .enumerate()
            .map(|(i, photo)| PhotoEntry {
                position: i + 1,
                id: photo.id,
                title: photo.title,
                photographer: photo.photographer,
            })
            .collect();
        Ok(entries)
    }

    /// Remove a photo and its scores. The stored file is deleted
    /// best-effort first; the row goes away even if the file does not.
    pub fn remove_photo(&mut self, id: i64) -> Result<Photo> {
        let photo = self.photo(id)?;
        self.images.delete(&photo.path);
        self.store.delete_photo(id)?;
        Ok(photo)
    }

    // ── Judging ──────────────────────────────────────────────────────

    /// Draw one photo uniformly at random from a category, with its
    /// current 1-based position in that category's listing.
    pub fn pick_random_photo(&self, category: &str) -> Result<(Photo, usize)> {
        let photos = self.store.photos_in_category(category)?;
        let (photo, position) = judging::pick_random(&photos)
            .ok_or_else(|| Error::EmptyCategory(category.to_string()))?;
        Ok((photo.clone(), position))
    }

    /// Record a judge's score for a photo. Every call appends; earlier
    /// scores for the same photo are kept.
    pub fn record_score(&self, photo_id: i64, value: i64) -> Result<()> {
        let value = judging::validate_score(value)?;
        self.photo(photo_id)?;
        self.store.insert_score(photo_id, value)?;
        Ok(())
    }

    pub fn scores_for_photo(&self, photo_id: i64) -> Result<Vec<Score>> {
        self.photo(photo_id)?;
        self.store.scores_for_photo(photo_id)
    }

    pub fn score_report(&self) -> Result<Vec<ScoreLine>> {
        self.store.score_report()
    }

    // ── Display ──────────────────────────────────────────────────────

    /// Load a photo's stored image, downscaled to fit within `max_dim`
    /// on the longer edge. Smaller images come back untouched.
    pub fn display_image(&self, id: i64, max_dim: u32) -> Result<DynamicImage> {
        let photo = self.photo(id)?;
        if !photo.path.exists() {
            return Err(Error::ImageMissing(photo.path));
        }
        let image = image_store::load_image(&photo.path)?;
        if image.width() > max_dim || image.height() > max_dim {
            Ok(image.thumbnail(max_dim, max_dim))
        } else {
            Ok(image)
        }
    }

    // ── Maintenance ──────────────────────────────────────────────────

    pub fn counts(&self) -> Result<Counts> {
        self.store.counts()
    }

    /// Stored files no photo row references.
    pub fn orphaned_files(&self) -> Result<Vec<PathBuf>> {
        self.images.orphaned_files(&self.store)
    }

    /// Wipe the competition: best-effort delete of every stored file,
    /// then all scores, photos, and categories in one transaction.
    /// Files that fail to delete never block the database wipe.
    pub fn reset(
        &mut self,
        mut progress_cb: Option<&mut dyn FnMut(ResetProgress)>,
    ) -> Result<ResetOutcome> {
        let photos = self.store.all_photos()?;
        if let Some(ref mut cb) = progress_cb {
            cb(ResetProgress::Start {
                total: photos.len(),
            });
        }

        let mut files_removed = 0;
        let mut files_skipped = 0;
        for photo in &photos {
            if self.images.delete(&photo.path) {
                files_removed += 1;
                if let Some(ref mut cb) = progress_cb {
                    cb(ResetProgress::FileRemoved {
                        path: photo.path.clone(),
                    });
                }
            } else {
                files_skipped += 1;
                if let Some(ref mut cb) = progress_cb {
                    cb(ResetProgress::FileSkipped {
                        path: photo.path.clone(),
                    });
                }
            }
        }
        if let Some(ref mut cb) = progress_cb {
            cb(ResetProgress::Complete {
                removed: files_removed,
                skipped: files_skipped,
            });
        }

        let (scores, photos, categories) = self.store.clear_all()?;
        Ok(ResetOutcome {
            files_removed,
            files_skipped,
            scores,
            photos,
            categories,
        })
    }
}

fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::MissingField { field })
    } else {
        Ok(trimmed)
    }
}
