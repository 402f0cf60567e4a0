//! Setup phase: create a tournament with its schedule, and reshuffle it later.

use crate::logic::schedule::generate_matches;
use crate::models::{MaxScore, Tournament, TournamentError};

/// Create a tournament from player names and generate its matches.
pub fn start_tournament<S: AsRef<str>>(
    names: &[S],
    max_score: MaxScore,
) -> Result<Tournament, TournamentError> {
    let mut tournament = Tournament::from_names(names, max_score)?;
    tournament.matches = generate_matches(&tournament.players)?;
    log::info!(
        "Started tournament {} with {} players, {} matches to {}",
        tournament.id,
        tournament.players.len(),
        tournament.matches.len(),
        max_score.get()
    );
    Ok(tournament)
}

/// Fresh schedule for the same players and max score. Scores and the finished
/// results are cleared; overall standings are kept.
pub fn reshuffle_tournament(tournament: &mut Tournament) -> Result<(), TournamentError> {
    tournament.matches = generate_matches(&tournament.players)?;
    tournament.results = None;
    log::info!(
        "Reshuffled tournament {}: {} matches",
        tournament.id,
        tournament.matches.len()
    );
    Ok(())
}
