pub mod add;
pub mod categories;
pub mod ls;
pub mod pick;
pub mod reset;
pub mod rm;
pub mod score;
pub mod scores;
pub mod show;
pub mod status;
