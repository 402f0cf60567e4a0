//! Data structures for the Americano tournament: players, matches, standings, tournament state.

mod game;
mod player;
mod stats;
mod tournament;

pub use game::{Match, MatchId, Score, Side, Team, Winner};
pub use player::{Player, PlayerId};
pub use stats::PlayerStats;
pub use tournament::{MaxScore, Tournament, TournamentError, TournamentId};
