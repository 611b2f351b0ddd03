use anyhow::Result;
use photojury_core::judging::MAX_SCORE;
use photojury_core::Competition;

pub fn run(competition: &Competition, id: i64, value: i64) -> Result<()> {
    competition.record_score(id, value)?;
    let photo = competition.photo(id)?;
    println!("Recorded {value}/{MAX_SCORE} for photo #{id} (\"{}\")", photo.title);
    Ok(())
}
