//! Precomputed complete schedules for 4, 5 and 6 players.
//!
//! Each entry is a match given as two teams of indices into the player list.

use crate::logic::pairing::TeamSplit;
use crate::models::{Match, MatchId, Player};
use rand::seq::SliceRandom;
use rand::Rng;

type Design = &'static [[[usize; 2]; 2]];

/// All three ways to split four players; nobody sits out.
const FOUR_PLAYERS: Design = &[[[0, 1], [2, 3]], [[0, 2], [1, 3]], [[0, 3], [1, 2]]];

/// Every one of the 10 pairs exactly once; each player sits out exactly once.
const FIVE_PLAYERS: Design = &[
    [[0, 1], [2, 3]],
    [[0, 2], [1, 4]],
    [[0, 3], [2, 4]],
    [[0, 4], [1, 3]],
    [[1, 2], [3, 4]],
];

/// 12 of the 15 pairs exactly once (0-3, 1-4 and 2-5 unused); each player plays 4 and sits out 2.
const SIX_PLAYERS: Design = &[
    [[0, 1], [2, 4]],
    [[0, 2], [3, 5]],
    [[0, 4], [1, 5]],
    [[0, 5], [1, 3]],
    [[1, 2], [3, 4]],
    [[2, 3], [4, 5]],
];

fn design_for(player_count: usize) -> Option<Design> {
    match player_count {
        4 => Some(FOUR_PLAYERS),
        5 => Some(FIVE_PLAYERS),
        6 => Some(SIX_PLAYERS),
        _ => None,
    }
}

/// Lay out the fixed design for `players` in random order and orientation, ids 1..=N.
/// Returns `None` when no design exists for this player count.
pub fn fixed_design_matches<R: Rng + ?Sized>(
    players: &[Player],
    rng: &mut R,
) -> Option<Vec<Match>> {
    let design = design_for(players.len())?;
    let mut order: Vec<_> = design.to_vec();
    order.shuffle(rng);

    let matches = order
        .iter()
        .zip(1..)
        .map(|(teams, id): (&[[usize; 2]; 2], MatchId)| {
            let [t1, t2] = *teams;
            let split = TeamSplit::new(
                [players[t1[0]].id, players[t1[1]].id],
                [players[t2[0]].id, players[t2[1]].id],
            );
            let (team_1, team_2) = split.oriented(rng);
            Match::new(id, team_1, team_2)
        })
        .collect();
    Some(matches)
}
