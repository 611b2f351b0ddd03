use rand::seq::SliceRandom;

use crate::domain::Photo;
use crate::error::{Error, Result};

/// Scores run from 0 to `MAX_SCORE`, both ends included.
pub const MAX_SCORE: i64 = 10;

/// Pick one photo uniformly at random and return it with its 1-based
/// position in the slice. Position in the catalog order is what judges
/// announce, so the slice must already be in listing order.
pub fn pick_random(photos: &[Photo]) -> Option<(&Photo, usize)> {
    let mut rng = rand::thread_rng();
    let photo = photos.choose(&mut rng)?;
    let index = photos.iter().position(|p| p.id == photo.id)?;
    Some((photo, index + 1))
}

pub fn validate_score(value: i64) -> Result<i64> {
    if (0..=MAX_SCORE).contains(&value) {
        Ok(value)
    } else {
        Err(Error::ScoreOutOfRange(value))
    }
}
