//! Standings: per-player wins, ties, losses and points from scored matches.

use crate::models::{Match, Player, PlayerStats, Side, TournamentError, Winner};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Standings for `players` from the scored matches in `matches`, best first.
pub fn calculate_standings(players: &[Player], matches: &[Match]) -> Vec<PlayerStats> {
    let mut stats: HashMap<_, PlayerStats> = players
        .iter()
        .map(|p| (p.id, PlayerStats::for_player(p)))
        .collect();

    for m in matches {
        let Some(score) = m.score else { continue };
        for side in [Side::Team1, Side::Team2] {
            let scored = score.points(side);
            let conceded = score.points(side.other());
            for pid in m.team(side) {
                let Some(row) = stats.get_mut(pid) else {
                    log::warn!("Match {} references unknown player {}", m.id, pid);
                    continue;
                };
                row.matches_played += 1;
                row.points_for += scored;
                row.points_against += conceded;
                row.points_difference += i64::from(scored) - i64::from(conceded);
                match (score.winner, side) {
                    (Winner::Tie, _) => row.ties += 1,
                    (Winner::Team1, Side::Team1) | (Winner::Team2, Side::Team2) => row.wins += 1,
                    _ => row.losses += 1,
                }
            }
        }
    }

    let mut rows: Vec<_> = stats.into_values().collect();
    sort_standings(&mut rows);
    rows
}

/// Point difference first, then wins; player id keeps the order stable.
pub fn sort_standings(rows: &mut [PlayerStats]) {
    rows.sort_by_key(|r| (Reverse(r.points_difference), Reverse(r.wins), r.player_id));
}

/// Add `round` into `overall`, player by player, and re-sort.
pub fn merge_standings(overall: &[PlayerStats], round: &[PlayerStats]) -> Vec<PlayerStats> {
    let mut merged = overall.to_vec();
    for row in round {
        match merged.iter_mut().find(|o| o.player_id == row.player_id) {
            Some(existing) => existing.absorb(row),
            None => merged.push(row.clone()),
        }
    }
    sort_standings(&mut merged);
    merged
}

/// Standings as CSV, one row per player in rank order.
pub fn standings_csv(rows: &[PlayerStats]) -> Result<String, TournamentError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let csv_err = |e: csv::Error| TournamentError::Csv(e.to_string());
    writer
        .write_record([
            "rank",
            "player",
            "difference",
            "points_for",
            "points_against",
            "matches",
            "wins",
            "ties",
            "losses",
        ])
        .map_err(csv_err)?;
    for (rank, r) in rows.iter().enumerate() {
        writer
            .write_record([
                (rank + 1).to_string(),
                r.name.clone(),
                r.points_difference.to_string(),
                r.points_for.to_string(),
                r.points_against.to_string(),
                r.matches_played.to_string(),
                r.wins.to_string(),
                r.ties.to_string(),
                r.losses.to_string(),
            ])
            .map_err(csv_err)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| TournamentError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TournamentError::Csv(e.to_string()))
}
