//! Tournament, MaxScore and TournamentError.

use crate::logic::ScheduleError;
use crate::models::game::{Match, MatchId};
use crate::models::player::{Player, PlayerId};
use crate::models::stats::PlayerStats;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("Player names must not be empty")]
    EmptyPlayerName,
    #[error("A player named {0:?} already exists")]
    DuplicatePlayerName(String),
    #[error("Max score must be one of 16, 24 or 32 (got {0})")]
    InvalidMaxScore(u32),
    #[error("Matches are already finished; reshuffle to play again")]
    AlreadyFinished,
    #[error("Match {0} not found")]
    MatchNotFound(MatchId),
    #[error("Score {score} is above the max score {max}")]
    ScoreOutOfRange { score: u32, max: u32 },
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error("Failed to (de)serialize tournament: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to write standings CSV: {0}")]
    Csv(String),
}

/// Points a match is played to. Only a small fixed set is offered.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MaxScore(u32);

impl MaxScore {
    pub const ALLOWED: [u32; 3] = [16, 24, 32];

    pub fn get(self) -> u32 {
        self.0
    }

    /// Score each side gets when an unscored match is closed as a tie.
    pub fn even_split(self) -> u32 {
        self.0 / 2
    }
}

impl Default for MaxScore {
    fn default() -> Self {
        MaxScore(16)
    }
}

impl TryFrom<u32> for MaxScore {
    type Error = TournamentError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if Self::ALLOWED.contains(&value) {
            Ok(MaxScore(value))
        } else {
            Err(TournamentError::InvalidMaxScore(value))
        }
    }
}

impl From<MaxScore> for u32 {
    fn from(m: MaxScore) -> u32 {
        m.0
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Full tournament state: players, scheduled matches, finished results and running standings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub created_at: DateTime<Utc>,
    pub players: Vec<Player>,
    pub max_score: MaxScore,
    /// Current schedule, with scores as they are entered.
    pub matches: Vec<Match>,
    /// Snapshot of `matches` taken when the tournament was finished.
    #[serde(default)]
    pub results: Option<Vec<Match>>,
    /// Standings accumulated over every finished tournament with these players.
    #[serde(default)]
    pub overall_standings: Vec<PlayerStats>,
}

impl Tournament {
    /// Create a tournament from player names. Names are trimmed and must be unique
    /// (case-insensitive); ids are assigned 1..=N in the given order. No matches yet.
    pub fn from_names<S: AsRef<str>>(
        names: &[S],
        max_score: MaxScore,
    ) -> Result<Self, TournamentError> {
        let mut players: Vec<Player> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(TournamentError::EmptyPlayerName);
            }
            if players.iter().any(|p| p.name.eq_ignore_ascii_case(name)) {
                return Err(TournamentError::DuplicatePlayerName(name.to_string()));
            }
            players.push(Player::new(players.len() as PlayerId + 1, name));
        }
        Ok(Self::with_players(players, max_score))
    }

    /// Tournament with the given players and no matches.
    pub fn with_players(players: Vec<Player>, max_score: MaxScore) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            players,
            max_score,
            matches: Vec::new(),
            results: None,
            overall_standings: Vec::new(),
        }
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Matches still waiting for a score.
    pub fn unscored_matches(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(|m| m.score.is_none())
    }

    pub fn to_json(&self) -> Result<String, TournamentError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a tournament exactly as it was saved. Matches are not re-validated.
    pub fn from_json(json: &str) -> Result<Self, TournamentError> {
        Ok(serde_json::from_str(json)?)
    }
}
