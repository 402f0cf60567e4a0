//! Americano doubles tournament web app: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    calculate_standings, court_count, enter_score, finish_matches, generate_matches,
    generate_matches_with, repeated_partnerships, reshuffle_tournament, score_from_entry,
    standings_csv, start_tournament, target_match_count, PairKey, ScheduleError,
    SchedulePreview, SearchLimits,
};
pub use models::{
    Match, MatchId, MaxScore, Player, PlayerId, PlayerStats, Score, Side, Team, Tournament,
    TournamentError, TournamentId, Winner,
};
