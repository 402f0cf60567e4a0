//! Score entry: one side's score is entered, the other side gets the remainder.

use crate::logic::standings::{calculate_standings, merge_standings};
use crate::models::{MatchId, MaxScore, Score, Side, Tournament, TournamentError};

/// Score for a match where `side` scored `entered` out of `max_score`.
/// The other side gets `max_score - entered`.
pub fn score_from_entry(
    side: Side,
    entered: u32,
    max_score: MaxScore,
) -> Result<Score, TournamentError> {
    let max = max_score.get();
    if entered > max {
        return Err(TournamentError::ScoreOutOfRange {
            score: entered,
            max,
        });
    }
    let other = max - entered;
    Ok(match side {
        Side::Team1 => Score::new(entered, other),
        Side::Team2 => Score::new(other, entered),
    })
}

/// Enter (or overwrite) the score of one match.
pub fn enter_score(
    tournament: &mut Tournament,
    match_id: MatchId,
    side: Side,
    entered: u32,
) -> Result<(), TournamentError> {
    if tournament.results.is_some() {
        return Err(TournamentError::AlreadyFinished);
    }
    let score = score_from_entry(side, entered, tournament.max_score)?;
    let m = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    m.score = Some(score);
    Ok(())
}

/// Close the current schedule.
///
/// With `fill_even`, unscored matches are recorded as ties at half the max score each;
/// otherwise they stay unscored and do not count. The matches are snapshotted into
/// `results` and this schedule's standings are added to the overall standings.
/// A finished schedule accepts no more scores and cannot be finished again.
pub fn finish_matches(
    tournament: &mut Tournament,
    fill_even: bool,
) -> Result<(), TournamentError> {
    if tournament.results.is_some() {
        return Err(TournamentError::AlreadyFinished);
    }
    if fill_even {
        let half = tournament.max_score.even_split();
        for m in tournament.matches.iter_mut().filter(|m| m.score.is_none()) {
            m.score = Some(Score::new(half, half));
        }
    }
    let round = calculate_standings(&tournament.players, &tournament.matches);
    tournament.overall_standings = merge_standings(&tournament.overall_standings, &round);
    tournament.results = Some(tournament.matches.clone());
    log::info!(
        "Tournament {} finished with {} scored matches",
        tournament.id,
        tournament.matches.iter().filter(|m| m.score.is_some()).count()
    );
    Ok(())
}
