//! Round-structured scheduling across several simultaneous courts (8+ players).

use crate::logic::limits::{SearchLimits, MAX_GENERATED_MATCHES, MIN_PLAYERS};
use crate::logic::pairing::{team_splits, PairKey, TeamSplit};
use crate::logic::tracker::{repeated_partnerships, SearchState};
use crate::models::{Match, MatchId, Player, PlayerId};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// Courts played in parallel for a player count.
pub fn court_count(player_count: usize) -> usize {
    match player_count {
        0..=7 => 1,
        8..=11 => 2,
        12..=15 => 3,
        n => n.div_ceil(4),
    }
}

/// Total matches aimed for by the multi-court scheduler.
pub fn multi_court_target(player_count: usize) -> usize {
    match player_count {
        8 => 14,
        9 => 18,
        10 => 22,
        11 => 27,
        12 => 33,
        13 => 39,
        14 | 15 => 45,
        n => (n * n.saturating_sub(1)).div_ceil(8).min(MAX_GENERATED_MATCHES),
    }
}

/// Generate a round/court schedule.
///
/// Each round sorts players by matches played (then id) and fills the courts in turn,
/// each court drawing four players who have not played this round yet. Partnerships
/// never repeat; repeated oppositions are tolerated more as attempts pile up. A round
/// that yields no match ends generation unless the total is already within two of the
/// target, in which case the round is tried again (bounded by the round ceiling).
///
/// Match ids follow generation order: round by round, court by court.
pub fn multi_court_matches<R: Rng + ?Sized>(
    players: &[Player],
    rng: &mut R,
    limits: &SearchLimits,
) -> Vec<Match> {
    let player_count = players.len();
    let courts = court_count(player_count);
    let target = multi_court_target(player_count);
    let max_rounds = target.div_ceil(courts) + limits.extra_rounds;

    let mut state = SearchState::new(players);
    let mut look_ahead = RoundLookAhead::for_tournament(players, courts);
    let mut matches: Vec<Match> = Vec::with_capacity(target);
    let mut round_number: u32 = 1;
    let mut next_id: MatchId = 1;

    for _ in 0..max_rounds {
        if matches.len() >= target {
            break;
        }
        let mut order: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
        order.sort_by_key(|&id| (state.matches_played(id), id));

        let mut in_round: HashSet<PlayerId> = HashSet::new();
        let mut round_matches: Vec<Match> = Vec::with_capacity(courts);

        for court in 1..=courts as u32 {
            if matches.len() + round_matches.len() >= target {
                break;
            }
            let candidates: Vec<PlayerId> = order
                .iter()
                .copied()
                .filter(|id| !in_round.contains(id))
                .collect();
            let Some(split) =
                find_court_match(&candidates, &state, look_ahead.as_mut(), rng, limits)
            else {
                break;
            };

            state.commit(&split);
            in_round.extend(split.players());
            let (team_1, team_2) = split.oriented(rng);
            round_matches.push(Match::new(next_id, team_1, team_2).on_court(court, round_number));
            next_id += 1;
        }

        if !round_matches.is_empty() {
            matches.append(&mut round_matches);
            round_number += 1;
        } else if matches.len() + 2 >= target {
            log::debug!(
                "Round {} produced no match with {}/{} generated, retrying",
                round_number,
                matches.len(),
                target
            );
        } else {
            break;
        }
    }

    log::info!(
        "Generated {} matches across {} rounds for {} players ({} courts)",
        matches.len(),
        round_number - 1,
        player_count,
        courts
    );
    if matches.len() < target {
        log::warn!(
            "Search exhausted: {} of {} target matches for {} players",
            matches.len(),
            target,
            player_count
        );
    }
    let repeated = repeated_partnerships(&matches);
    if !repeated.is_empty() {
        log::warn!("Found {} duplicate partnerships", repeated.len());
    }
    matches
}

/// Try up to `court_attempts` times to draw four of `candidates` (ordered least-played
/// first) and split them into two teams acceptable under the current records.
fn find_court_match<R: Rng + ?Sized>(
    candidates: &[PlayerId],
    state: &SearchState,
    mut look_ahead: Option<&mut RoundLookAhead>,
    rng: &mut R,
    limits: &SearchLimits,
) -> Option<TeamSplit> {
    if candidates.len() < MIN_PLAYERS {
        return None;
    }
    for attempt in 1..=limits.court_attempts {
        let pool_size = limits.pool_size(attempt, candidates.len());
        let mut pool = candidates[..pool_size].to_vec();
        pool.shuffle(rng);

        let mut splits = team_splits([pool[0], pool[1], pool[2], pool[3]]);
        splits.shuffle(rng);
        for split in splits {
            if !state.has_fresh_partnerships(&split) {
                continue;
            }
            if !limits.accepts_oppositions(attempt, state.repeated_oppositions(&split)) {
                continue;
            }
            if let Some(guard) = look_ahead.as_deref_mut() {
                let taken = split.players();
                let leftover: Vec<PlayerId> = candidates
                    .iter()
                    .copied()
                    .filter(|id| !taken.contains(id))
                    .collect();
                if !guard.keeps_schedule_completable(state, &split, &leftover) {
                    continue;
                }
            }
            return Some(split);
        }
    }
    None
}

const LOOK_AHEAD_PLAYERS: usize = 8;
const ALL_SEATS: u8 = u8::MAX;

/// Feasibility guard for 8 players on 2 courts, where every round seats everyone and
/// the 14 target matches use each of the 28 partnerships exactly once.
///
/// A proposed match is accepted only if the rest of its round can still be filled with
/// fresh partnerships and the partnerships left afterwards still split into whole
/// rounds. Without the second condition the unused partnerships can end up as a
/// 3-cycle plus a 5-cycle, and no round can be completed from them.
struct RoundLookAhead {
    seat: HashMap<PlayerId, usize>,
    /// Unused-partnership sets already known to split (or not) into whole rounds.
    known: HashMap<u64, bool>,
}

impl RoundLookAhead {
    fn for_tournament(players: &[Player], courts: usize) -> Option<Self> {
        if players.len() != LOOK_AHEAD_PLAYERS || courts != 2 {
            return None;
        }
        Some(Self {
            seat: players.iter().enumerate().map(|(i, p)| (p.id, i)).collect(),
            known: HashMap::new(),
        })
    }

    fn keeps_schedule_completable(
        &mut self,
        state: &SearchState,
        split: &TeamSplit,
        leftover: &[PlayerId],
    ) -> bool {
        let unused = self.unused_partnerships(state) & !self.pair_bits(&split.partnerships());
        match leftover {
            [] => self.splits_into_rounds(unused),
            &[a, b, c, d] => team_splits([a, b, c, d]).iter().any(|rest| {
                let bits = self.pair_bits(&rest.partnerships());
                (unused & bits) == bits && self.splits_into_rounds(unused & !bits)
            }),
            _ => true,
        }
    }

    fn pair_bit(&self, key: PairKey) -> u64 {
        match (self.seat.get(&key.lo()), self.seat.get(&key.hi())) {
            (Some(&a), Some(&b)) => edge_bit(a, b),
            _ => 0,
        }
    }

    fn pair_bits(&self, keys: &[PairKey]) -> u64 {
        keys.iter().fold(0, |bits, &key| bits | self.pair_bit(key))
    }

    fn unused_partnerships(&self, state: &SearchState) -> u64 {
        let ids: Vec<(PlayerId, usize)> = self.seat.iter().map(|(&id, &s)| (id, s)).collect();
        let mut unused = 0;
        for (i, &(a, seat_a)) in ids.iter().enumerate() {
            for &(b, seat_b) in &ids[i + 1..] {
                if !state.has_partnered(a, b) {
                    unused |= edge_bit(seat_a, seat_b);
                }
            }
        }
        unused
    }

    /// Whether `edges` can be partitioned into perfect matchings of all eight seats.
    fn splits_into_rounds(&mut self, edges: u64) -> bool {
        if edges == 0 {
            return true;
        }
        if let Some(&known) = self.known.get(&edges) {
            return known;
        }
        // Every round pairs seat 0 with someone; fix its lowest partner to avoid
        // trying the same decomposition in every order.
        let result = match (1..LOOK_AHEAD_PLAYERS).find(|&s| edges & edge_bit(0, s) != 0) {
            None => false,
            Some(partner) => {
                let mut rounds = Vec::new();
                perfect_matchings(
                    edges,
                    ALL_SEATS & !(1 | 1 << partner),
                    edge_bit(0, partner),
                    &mut rounds,
                );
                rounds
                    .into_iter()
                    .any(|round| self.splits_into_rounds(edges & !round))
            }
        };
        self.known.insert(edges, result);
        result
    }
}

fn edge_bit(a: usize, b: usize) -> u64 {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    1 << (lo * LOOK_AHEAD_PLAYERS + hi)
}

/// Collect every way to complete `chosen` into a perfect matching of the `open` seats.
fn perfect_matchings(edges: u64, open: u8, chosen: u64, out: &mut Vec<u64>) {
    if open == 0 {
        out.push(chosen);
        return;
    }
    let v = open.trailing_zeros() as usize;
    let rest = open & !(1 << v);
    let mut others = rest;
    while others != 0 {
        let u = others.trailing_zeros() as usize;
        others &= others - 1;
        let bit = edge_bit(v, u);
        if edges & bit != 0 {
            perfect_matchings(edges, rest & !(1 << u), chosen | bit, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_graph() -> u64 {
        let mut edges = 0;
        for a in 0..8 {
            for b in a + 1..8 {
                edges |= edge_bit(a, b);
            }
        }
        edges
    }

    fn cycle(seats: &[usize]) -> u64 {
        (0..seats.len()).fold(0, |edges, i| {
            edges | edge_bit(seats[i], seats[(i + 1) % seats.len()])
        })
    }

    fn guard() -> RoundLookAhead {
        RoundLookAhead::for_tournament(&Player::numbered(8), 2).unwrap()
    }

    #[test]
    fn complete_graph_splits_into_seven_rounds() {
        let mut la = guard();
        assert!(la.splits_into_rounds(full_graph()));
    }

    #[test]
    fn even_cycles_split_but_odd_cycles_do_not() {
        let mut la = guard();
        assert!(la.splits_into_rounds(cycle(&[0, 1, 2, 3, 4, 5, 6, 7])));
        assert!(la.splits_into_rounds(cycle(&[0, 1, 2, 3]) | cycle(&[4, 5, 6, 7])));
        assert!(!la.splits_into_rounds(cycle(&[0, 1, 2]) | cycle(&[3, 4, 5, 6, 7])));
    }

    #[test]
    fn perfect_matchings_of_complete_graph() {
        let mut out = Vec::new();
        perfect_matchings(full_graph(), ALL_SEATS, 0, &mut out);
        assert_eq!(out.len(), 105);
    }

    #[test]
    fn guard_only_applies_to_eight_players_on_two_courts() {
        assert!(RoundLookAhead::for_tournament(&Player::numbered(9), 2).is_none());
        assert!(RoundLookAhead::for_tournament(&Player::numbered(8), 3).is_none());
    }

    #[test]
    fn court_and_target_tables() {
        assert_eq!(court_count(7), 1);
        assert_eq!(court_count(8), 2);
        assert_eq!(court_count(11), 2);
        assert_eq!(court_count(15), 3);
        assert_eq!(court_count(16), 4);
        assert_eq!(court_count(17), 5);
        assert_eq!(multi_court_target(16), 30);
        assert_eq!(multi_court_target(32), 60);
    }
}
