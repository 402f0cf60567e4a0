//! Per-player standings row.

use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Statistics view of a player (for API / display).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_id: PlayerId,
    pub name: String,
    pub matches_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: u32,
    pub points_against: u32,
    pub points_difference: i64,
}

impl PlayerStats {
    /// Empty row for a player who has not played yet.
    pub fn for_player(p: &Player) -> Self {
        Self {
            player_id: p.id,
            name: p.name.clone(),
            ..Self::default()
        }
    }

    /// Add another row for the same player into this one.
    pub fn absorb(&mut self, other: &PlayerStats) {
        self.matches_played += other.matches_played;
        self.wins += other.wins;
        self.losses += other.losses;
        self.ties += other.ties;
        self.points_for += other.points_for;
        self.points_against += other.points_against;
        self.points_difference += other.points_difference;
    }
}
