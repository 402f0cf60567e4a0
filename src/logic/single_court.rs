//! One court, no rounds: greedy random search for small groups without a fixed design.

use crate::logic::limits::{SearchLimits, MIN_PLAYERS};
use crate::logic::pairing::team_splits;
use crate::logic::tracker::SearchState;
use crate::models::{Match, MatchId, Player, PlayerId};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate up to one match per player, never repeating a partnership.
///
/// For each match slot:
/// 1. Shuffle all players, then stable-sort by matches played (ties keep shuffle order).
/// 2. Take the first four and try their three team splits in random order.
/// 3. Accept the first split whose two partnerships are both new.
///
/// A slot that finds nothing within `slot_attempts` ends generation early and the
/// matches produced so far are returned.
pub fn single_court_matches<R: Rng + ?Sized>(
    players: &[Player],
    rng: &mut R,
    limits: &SearchLimits,
) -> Vec<Match> {
    if players.len() < MIN_PLAYERS {
        return Vec::new();
    }
    let mut state = SearchState::new(players);
    let mut matches = Vec::with_capacity(players.len());
    let mut total_attempts = 0;

    for slot in 1..=players.len() as MatchId {
        let mut accepted = None;
        let mut slot_attempts = 0;
        while accepted.is_none()
            && slot_attempts < limits.slot_attempts
            && total_attempts < limits.total_attempts
        {
            slot_attempts += 1;
            total_attempts += 1;

            let mut order: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
            order.shuffle(rng);
            order.sort_by_key(|&id| state.matches_played(id));

            let mut splits = team_splits([order[0], order[1], order[2], order[3]]);
            splits.shuffle(rng);
            accepted = splits
                .into_iter()
                .find(|split| state.has_fresh_partnerships(split));
        }

        let Some(split) = accepted else {
            log::warn!(
                "Could not generate match {} with unique pairs after {} attempts",
                slot,
                slot_attempts
            );
            break;
        };
        state.commit(&split);
        let (team_1, team_2) = split.oriented(rng);
        matches.push(Match::new(slot, team_1, team_2));
    }

    log::info!(
        "Generated {} matches for {} players with unique pairs",
        matches.len(),
        players.len()
    );
    matches
}
