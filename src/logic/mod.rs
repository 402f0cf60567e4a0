//! Tournament business logic: match generation, score entry, standings.

mod fixed_designs;
mod limits;
mod multi_court;
mod pairing;
mod schedule;
mod scoring;
mod setup;
mod single_court;
mod standings;
mod tracker;

pub use fixed_designs::fixed_design_matches;
pub use limits::{SearchLimits, MAX_GENERATED_MATCHES, MAX_PLAYERS, MIN_PLAYERS};
pub use multi_court::{court_count, multi_court_matches, multi_court_target};
pub use pairing::{team_splits, PairKey, TeamSplit};
pub use schedule::{
    generate_matches, generate_matches_with, target_match_count, ScheduleError, SchedulePreview,
};
pub use scoring::{enter_score, finish_matches, score_from_entry};
pub use setup::{reshuffle_tournament, start_tournament};
pub use single_court::single_court_matches;
pub use standings::{calculate_standings, merge_standings, sort_standings, standings_csv};
pub use tracker::{repeated_partnerships, SearchState};
