// Service exports
pub mod kings_league;

pub use kings_league::{KingsLeagueClient, KingsLeagueError, MatchFeed};
