use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("{field} must not be empty")]
    MissingField { field: &'static str },

    #[error("score {0} is outside the 0-10 scale")]
    ScoreOutOfRange(i64),

    #[error("photo not found: {0}")]
    PhotoNotFound(i64),

    #[error("no photos in category: {0}")]
    EmptyCategory(String),

    #[error("stored image file is missing: {}", .0.display())]
    ImageMissing(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
