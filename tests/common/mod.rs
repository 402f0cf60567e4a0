//! Helpers shared by the schedule tests.

#![allow(dead_code)]

use padel_americano_web::{Match, PairKey, Player, PlayerId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{BTreeMap, HashSet};

pub fn players(n: usize) -> Vec<Player> {
    Player::numbered(n)
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// How often each partnership occurs.
pub fn partnership_counts(matches: &[Match]) -> BTreeMap<PairKey, usize> {
    let mut counts = BTreeMap::new();
    for m in matches {
        for team in [&m.team_1, &m.team_2] {
            *counts.entry(PairKey::new(team[0], team[1])).or_insert(0) += 1;
        }
    }
    counts
}

/// Matches played per player id.
pub fn appearances(matches: &[Match]) -> BTreeMap<PlayerId, usize> {
    let mut counts = BTreeMap::new();
    for m in matches {
        for p in m.players() {
            *counts.entry(p).or_insert(0) += 1;
        }
    }
    counts
}

/// Every match has four distinct players.
pub fn assert_well_formed(matches: &[Match]) {
    for m in matches {
        let distinct: HashSet<_> = m.players().into_iter().collect();
        assert_eq!(distinct.len(), 4, "match {} reuses a player: {:?}", m.id, m);
    }
}

pub fn assert_ids_sequential(matches: &[Match]) {
    let ids: Vec<_> = matches.iter().map(|m| m.id).collect();
    let expected: Vec<_> = (1..=matches.len() as u32).collect();
    assert_eq!(ids, expected);
}
