//! Partnership, opposition and participation records for one generation run.
//!
//! Candidates are evaluated against a shared `SearchState` by `&` reference only;
//! the state changes solely through [`SearchState::commit`] once a match is accepted.

use crate::logic::pairing::{PairKey, TeamSplit};
use crate::models::{Match, Player, PlayerId};
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct SearchState {
    partnerships: HashMap<PairKey, u32>,
    oppositions: HashMap<PairKey, u32>,
    participation: HashMap<PlayerId, u32>,
}

impl SearchState {
    pub fn new(players: &[Player]) -> Self {
        Self {
            participation: players.iter().map(|p| (p.id, 0)).collect(),
            ..Self::default()
        }
    }

    pub fn partnership_count(&self, key: PairKey) -> u32 {
        self.partnerships.get(&key).copied().unwrap_or(0)
    }

    pub fn opposition_count(&self, key: PairKey) -> u32 {
        self.oppositions.get(&key).copied().unwrap_or(0)
    }

    pub fn has_partnered(&self, a: PlayerId, b: PlayerId) -> bool {
        self.partnership_count(PairKey::new(a, b)) > 0
    }

    /// Neither team of `split` has played together before.
    pub fn has_fresh_partnerships(&self, split: &TeamSplit) -> bool {
        split
            .partnerships()
            .iter()
            .all(|&key| self.partnership_count(key) == 0)
    }

    /// How many of the four cross-team pairs have already faced each other.
    pub fn repeated_oppositions(&self, split: &TeamSplit) -> usize {
        split
            .oppositions()
            .iter()
            .filter(|&&key| self.opposition_count(key) > 0)
            .count()
    }

    pub fn matches_played(&self, player: PlayerId) -> u32 {
        self.participation.get(&player).copied().unwrap_or(0)
    }

    /// Record an accepted match.
    pub fn commit(&mut self, split: &TeamSplit) {
        for key in split.partnerships() {
            *self.partnerships.entry(key).or_insert(0) += 1;
        }
        for key in split.oppositions() {
            *self.oppositions.entry(key).or_insert(0) += 1;
        }
        for player in split.players() {
            *self.participation.entry(player).or_insert(0) += 1;
        }
    }
}

/// Partnerships that appear more than once in `matches`, with their counts, sorted by key.
pub fn repeated_partnerships(matches: &[Match]) -> Vec<(PairKey, u32)> {
    let mut counts: HashMap<PairKey, u32> = HashMap::new();
    for m in matches {
        *counts.entry(PairKey::of_team(&m.team_1)).or_insert(0) += 1;
        *counts.entry(PairKey::of_team(&m.team_2)).or_insert(0) += 1;
    }
    let mut repeated: Vec<_> = counts.into_iter().filter(|&(_, n)| n > 1).collect();
    repeated.sort();
    repeated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_updates_all_three_records() {
        let players = Player::numbered(4);
        let mut state = SearchState::new(&players);
        let split = TeamSplit::new([1, 2], [3, 4]);
        assert!(state.has_fresh_partnerships(&split));
        assert_eq!(state.repeated_oppositions(&split), 0);

        state.commit(&split);

        assert!(state.has_partnered(2, 1));
        assert!(!state.has_partnered(1, 3));
        assert_eq!(state.opposition_count(PairKey::new(4, 1)), 1);
        assert_eq!(state.matches_played(3), 1);
        assert!(!state.has_fresh_partnerships(&split));
        assert_eq!(
            state.repeated_oppositions(&TeamSplit::new([1, 3], [2, 4])),
            2
        );
    }

    #[test]
    fn repeated_partnerships_reports_duplicates() {
        let matches = vec![
            Match::new(1, [1, 2], [3, 4]),
            Match::new(2, [2, 1], [3, 5]),
        ];
        assert_eq!(repeated_partnerships(&matches), vec![(PairKey::new(1, 2), 2)]);
    }
}
