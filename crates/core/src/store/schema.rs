use rusqlite::Connection;

use crate::error::Result;

pub fn initialize(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS categories (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS photos (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            filepath    TEXT NOT NULL,
            category_id INTEGER NOT NULL REFERENCES categories(id),
            title       TEXT NOT NULL DEFAULT '',
            photographer TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_photos_category ON photos(category_id);

        CREATE TABLE IF NOT EXISTS scores (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            photo_id    INTEGER NOT NULL REFERENCES photos(id),
            score       INTEGER NOT NULL,
            recorded_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_scores_photo ON scores(photo_id);
        ",
    )?;
    Ok(())
}

/// Bring an existing database up to the current photo columns.
/// Early databases stored photos as (id, filepath, category_id) only;
/// the title and photographer columns are added in place, defaulted to
/// empty strings, and existing rows are otherwise left untouched.
pub fn migrate(conn: &Connection) -> Result<()> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('photos')")?;
    let existing = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    for column in ["title", "photographer"] {
        if !existing.iter().any(|c| c == column) {
            log::debug!("adding photos.{column} column");
            conn.execute(
                &format!("ALTER TABLE photos ADD COLUMN {column} TEXT NOT NULL DEFAULT ''"),
                [],
            )?;
        }
    }
    Ok(())
}
