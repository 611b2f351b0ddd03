pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

use crate::domain::*;
use crate::error::Result;

/// SQLite-backed repository for categories, photos, and scores.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open or create the competition database at the given path with WAL mode.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        schema::initialize(&conn)?;
        schema::migrate(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        schema::initialize(&conn)?;
        schema::migrate(&conn)?;
        Ok(Self { conn })
    }

    // ── Categories ───────────────────────────────────────────────────

    /// Look up a category by name, creating it if absent.
    pub fn ensure_category(&self, name: &str) -> Result<Category> {
        self.conn.execute(
            "INSERT OR IGNORE INTO categories (name) VALUES (?1)",
            params![name],
        )?;
        let category = self.conn.query_row(
            "SELECT id, name FROM categories WHERE name = ?1",
            params![name],
            |row| {
                Ok(Category {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        )?;
        Ok(category)
    }

    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY name")?;
        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    // ── Photos ───────────────────────────────────────────────────────

    pub fn insert_photo(
        &self,
        path: &Path,
        category_id: i64,
        title: &str,
        photographer: &str,
    ) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO photos (filepath, category_id, title, photographer)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                path.to_string_lossy().as_ref(),
                category_id,
                title,
                photographer
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_photo(&self, id: i64) -> Result<Option<Photo>> {
        let photo = self
            .conn
            .query_row(
                "SELECT p.id, p.filepath, p.category_id, c.name, p.title, p.photographer
                 FROM photos p JOIN categories c ON c.id = p.category_id
                 WHERE p.id = ?1",
                params![id],
                photo_from_row,
            )
            .ok();
        Ok(photo)
    }

    /// Photos in a category in ascending id order. The returned order is what
    /// gives each photo its 1-based display position. Unknown categories list
    /// as empty.
    pub fn photos_in_category(&self, category: &str) -> Result<Vec<Photo>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.filepath, p.category_id, c.name, p.title, p.photographer
             FROM photos p JOIN categories c ON c.id = p.category_id
             WHERE c.name = ?1
             ORDER BY p.id",
        )?;
        let photos = stmt
            .query_map(params![category], photo_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(photos)
    }

    pub fn all_photos(&self) -> Result<Vec<Photo>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.filepath, p.category_id, c.name, p.title, p.photographer
             FROM photos p JOIN categories c ON c.id = p.category_id
             ORDER BY p.id",
        )?;
        let photos = stmt
            .query_map([], photo_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(photos)
    }

    /// Delete a photo row and its scores in one transaction.
    /// Returns true if the photo existed.
    pub fn delete_photo(&mut self, id: i64) -> Result<bool> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM scores WHERE photo_id = ?1", params![id])?;
        let deleted = tx.execute("DELETE FROM photos WHERE id = ?1", params![id])?;
        tx.commit()?;
        Ok(deleted > 0)
    }

    /// Delete every score, photo, and category row in one transaction,
    /// in reference order. Returns the per-table deleted counts.
    pub fn clear_all(&mut self) -> Result<(usize, usize, usize)> {
        let tx = self.conn.transaction()?;
        let scores = tx.execute("DELETE FROM scores", [])?;
        let photos = tx.execute("DELETE FROM photos", [])?;
        let categories = tx.execute("DELETE FROM categories", [])?;
        tx.commit()?;
        Ok((scores, photos, categories))
    }

    // ── Scores ───────────────────────────────────────────────────────

    pub fn insert_score(&self, photo_id: i64, value: i64) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO scores (photo_id, score, recorded_at)
             VALUES (?1, ?2, datetime('now'))",
            params![photo_id, value],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All scores for one photo, oldest first.
    pub fn scores_for_photo(&self, photo_id: i64) -> Result<Vec<Score>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, photo_id, score, recorded_at FROM scores
             WHERE photo_id = ?1 ORDER BY id",
        )?;
        let scores = stmt
            .query_map(params![photo_id], |row| {
                Ok(Score {
                    id: row.get(0)?,
                    photo_id: row.get(1)?,
                    value: row.get(2)?,
                    recorded_at: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(scores)
    }

    /// Per-photo score summary across all categories. Photos without any
    /// scores are left out.
    pub fn score_report(&self) -> Result<Vec<ScoreLine>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.title, p.photographer, c.name, COUNT(s.id), AVG(s.score)
             FROM photos p
             JOIN categories c ON c.id = p.category_id
             JOIN scores s ON s.photo_id = p.id
             GROUP BY p.id
             ORDER BY c.name, p.id",
        )?;
        let lines = stmt
            .query_map([], |row| {
                Ok(ScoreLine {
                    photo_id: row.get(0)?,
                    title: row.get(1)?,
                    photographer: row.get(2)?,
                    category: row.get(3)?,
                    entries: row.get::<_, i64>(4)? as usize,
                    mean: row.get(5)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(lines)
    }

    /// Row counts for the status summary in a single query.
    pub fn counts(&self) -> Result<Counts> {
        let counts = self.conn.query_row(
            "SELECT
                (SELECT COUNT(*) FROM categories),
                (SELECT COUNT(*) FROM photos),
                (SELECT COUNT(*) FROM scores)",
            [],
            |row| {
                Ok(Counts {
                    categories: row.get::<_, i64>(0)? as usize,
                    photos: row.get::<_, i64>(1)? as usize,
                    scores: row.get::<_, i64>(2)? as usize,
                })
            },
        )?;
        Ok(counts)
    }
}

fn photo_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Photo> {
    Ok(Photo {
        id: row.get(0)?,
        path: PathBuf::from(row.get::<_, String>(1)?),
        category_id: row.get(2)?,
        category: row.get(3)?,
        title: row.get(4)?,
        photographer: row.get(5)?,
    })
}
