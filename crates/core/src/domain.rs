use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A skill category photos compete in. Names are unique and never renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A cataloged competition photo. `path` points at the stored image file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: i64,
    pub path: PathBuf,
    pub category_id: i64,
    pub category: String,
    pub title: String,
    pub photographer: String,
}

/// One row of a category listing. `position` is the 1-based rank within the
/// category, derived from ascending-id order at listing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoEntry {
    pub position: usize,
    pub id: i64,
    pub title: String,
    pub photographer: String,
}

/// A single recorded judging score. Scores accumulate; they are never
/// edited or removed individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub id: i64,
    pub photo_id: i64,
    pub value: i64,
    pub recorded_at: String,
}

/// Per-photo score summary for the report view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub photo_id: i64,
    pub title: String,
    pub photographer: String,
    pub category: String,
    pub entries: usize,
    pub mean: f64,
}

/// Row counts for the status summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub categories: usize,
    pub photos: usize,
    pub scores: usize,
}
