//! Integration tests for the fixed 4, 5 and 6 player schedules.

mod common;

use common::{appearances, assert_ids_sequential, assert_well_formed, partnership_counts, players, rng};
use padel_americano_web::{generate_matches, generate_matches_with, PairKey, SearchLimits};
use std::collections::BTreeSet;

#[test]
fn four_players_play_all_three_splits() {
    for seed in 0..50 {
        let matches =
            generate_matches_with(&players(4), &mut rng(seed), &SearchLimits::default()).unwrap();
        assert_eq!(matches.len(), 3);
        assert_well_formed(&matches);
        assert_ids_sequential(&matches);

        let splits: BTreeSet<_> = matches
            .iter()
            .map(|m| {
                let mut s = [
                    PairKey::new(m.team_1[0], m.team_1[1]),
                    PairKey::new(m.team_2[0], m.team_2[1]),
                ];
                s.sort();
                s
            })
            .collect();
        assert_eq!(splits.len(), 3);
        assert!(appearances(&matches).values().all(|&n| n == 3));
        assert!(matches.iter().all(|m| m.court.is_none() && m.round.is_none()));
    }
}

#[test]
fn five_players_use_every_pair_once_and_rest_once() {
    for seed in 0..50 {
        let matches =
            generate_matches_with(&players(5), &mut rng(seed), &SearchLimits::default()).unwrap();
        assert_eq!(matches.len(), 5);
        assert_well_formed(&matches);
        assert_ids_sequential(&matches);

        let pairs = partnership_counts(&matches);
        assert_eq!(pairs.len(), 10);
        assert!(pairs.values().all(|&n| n == 1));

        let counts = appearances(&matches);
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&n| n == 4), "{counts:?}");
    }
}

#[test]
fn six_players_use_twelve_pairs_and_play_four_each() {
    for seed in 0..50 {
        let matches =
            generate_matches_with(&players(6), &mut rng(seed), &SearchLimits::default()).unwrap();
        assert_eq!(matches.len(), 6);
        assert_well_formed(&matches);
        assert_ids_sequential(&matches);

        let pairs = partnership_counts(&matches);
        assert_eq!(pairs.len(), 12);
        assert!(pairs.values().all(|&n| n == 1));

        let counts = appearances(&matches);
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&n| n == 4), "{counts:?}");
    }
}

#[test]
fn fixed_designs_ignore_search_limits() {
    let starved = SearchLimits {
        slot_attempts: 0,
        total_attempts: 0,
        court_attempts: 0,
        ..SearchLimits::default()
    };
    for n in 4..=6 {
        let matches = generate_matches_with(&players(n), &mut rng(1), &starved).unwrap();
        assert_eq!(matches.len(), [3, 5, 6][n - 4]);
    }
}

#[test]
fn fixed_designs_vary_presentation() {
    let orders: BTreeSet<_> = (0..20)
        .map(|seed| {
            let matches =
                generate_matches_with(&players(5), &mut rng(seed), &SearchLimits::default())
                    .unwrap();
            matches.iter().map(|m| m.players()).collect::<Vec<_>>()
        })
        .collect();
    assert!(orders.len() > 1);
}

#[test]
fn thread_rng_entry_point_works() {
    let matches = generate_matches(&players(4)).unwrap();
    assert_eq!(matches.len(), 3);
}
