pub mod blocked;
pub mod leaderboard;
pub mod quiz;
pub mod results;
pub mod round_summary;
pub mod setup;
