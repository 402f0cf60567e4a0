//! Match generation entry point: picks a strategy by player count.

use crate::logic::fixed_designs::fixed_design_matches;
use crate::logic::limits::{SearchLimits, MAX_PLAYERS, MIN_PLAYERS};
use crate::logic::multi_court::{court_count, multi_court_matches, multi_court_target};
use crate::logic::single_court::single_court_matches;
use crate::models::{Match, Player, PlayerId};
use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

/// Input the scheduler refuses before any search starts.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ScheduleError {
    #[error("Need at least {min} players to generate matches (got {got})")]
    NotEnoughPlayers { min: usize, got: usize },
    #[error("At most {max} players are supported (got {got})")]
    TooManyPlayers { max: usize, got: usize },
    #[error("Player ids must be positive")]
    ZeroPlayerId,
    #[error("Player id {0} appears more than once")]
    DuplicatePlayerId(PlayerId),
}

/// Generate an Americano schedule with the thread-local RNG and default limits.
pub fn generate_matches(players: &[Player]) -> Result<Vec<Match>, ScheduleError> {
    generate_matches_with(players, &mut rand::thread_rng(), &SearchLimits::default())
}

/// Generate an Americano schedule.
///
/// - `multi_court_from` players or more: round/court heuristic.
/// - 4, 5 or 6 players: fixed complete design, randomly ordered and oriented.
/// - anything else: single-court heuristic, at most one match per player.
///
/// The heuristics may return fewer matches than aimed for; that is logged, not an error.
pub fn generate_matches_with<R: Rng + ?Sized>(
    players: &[Player],
    rng: &mut R,
    limits: &SearchLimits,
) -> Result<Vec<Match>, ScheduleError> {
    validate_players(players)?;

    if players.len() >= limits.multi_court_from {
        return Ok(multi_court_matches(players, rng, limits));
    }
    if let Some(matches) = fixed_design_matches(players, rng) {
        return Ok(matches);
    }
    Ok(single_court_matches(players, rng, limits))
}

fn validate_players(players: &[Player]) -> Result<(), ScheduleError> {
    let got = players.len();
    if got < MIN_PLAYERS {
        return Err(ScheduleError::NotEnoughPlayers {
            min: MIN_PLAYERS,
            got,
        });
    }
    if got > MAX_PLAYERS {
        return Err(ScheduleError::TooManyPlayers {
            max: MAX_PLAYERS,
            got,
        });
    }
    let mut seen = HashSet::with_capacity(got);
    for p in players {
        if p.id == 0 {
            return Err(ScheduleError::ZeroPlayerId);
        }
        if !seen.insert(p.id) {
            return Err(ScheduleError::DuplicatePlayerId(p.id));
        }
    }
    Ok(())
}

/// Matches a full schedule has for `player_count` players with default limits
/// (the heuristics may fall short of it).
pub fn target_match_count(player_count: usize) -> usize {
    match player_count {
        0..=3 => 0,
        4 => 3,
        n if n < SearchLimits::default().multi_court_from => n,
        n => multi_court_target(n),
    }
}

/// Summary shown before a tournament starts: "N matches, C courts".
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct SchedulePreview {
    pub players: usize,
    pub courts: usize,
    pub matches: usize,
    pub rounds: Option<usize>,
}

impl SchedulePreview {
    pub fn for_player_count(player_count: usize) -> Self {
        let courts = court_count(player_count);
        let matches = target_match_count(player_count);
        Self {
            players: player_count,
            courts,
            matches,
            rounds: (courts > 1).then(|| matches.div_ceil(courts)),
        }
    }
}
