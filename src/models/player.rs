//! Player data structure.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player (positive, stable for the tournament lifetime).
pub type PlayerId = u32;

/// A player in the tournament. Immutable once created.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Players numbered 1..=n with placeholder names ("Player 1", ...).
    pub fn numbered(n: usize) -> Vec<Player> {
        (1..=n as PlayerId)
            .map(|id| Player::new(id, format!("Player {id}")))
            .collect()
    }
}
