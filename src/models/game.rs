//! Match (game), Side, Score and Winner for 2v2 Americano games.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Sequence number of a match, 1-based and unique within one generation run.
pub type MatchId = u32;

/// Two players on the same side of the net. Order only affects display.
pub type Team = [PlayerId; 2];

/// Which side of a match a score or result refers to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "team1")]
    Team1,
    #[serde(rename = "team2")]
    Team2,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Team1 => Side::Team2,
            Side::Team2 => Side::Team1,
        }
    }
}

/// Outcome of a scored match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Winner {
    #[serde(rename = "team1")]
    Team1,
    #[serde(rename = "team2")]
    Team2,
    #[serde(rename = "tie")]
    Tie,
}

/// Final score of a match; the winner is always derived from the two scores.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub team_1_score: u32,
    pub team_2_score: u32,
    pub winner: Winner,
}

impl Score {
    pub fn new(team_1_score: u32, team_2_score: u32) -> Self {
        let winner = match team_1_score.cmp(&team_2_score) {
            std::cmp::Ordering::Greater => Winner::Team1,
            std::cmp::Ordering::Less => Winner::Team2,
            std::cmp::Ordering::Equal => Winner::Tie,
        };
        Self {
            team_1_score,
            team_2_score,
            winner,
        }
    }

    /// Points scored by `side`.
    pub fn points(&self, side: Side) -> u32 {
        match side {
            Side::Team1 => self.team_1_score,
            Side::Team2 => self.team_2_score,
        }
    }
}

/// A single 2v2 match. Court and round are only set by the multi-court scheduler.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub team_1: Team,
    pub team_2: Team,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,
    /// None until a score is entered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
}

impl Match {
    pub fn new(id: MatchId, team_1: Team, team_2: Team) -> Self {
        Self {
            id,
            team_1,
            team_2,
            court: None,
            round: None,
            score: None,
        }
    }

    /// Attach court and round numbers (multi-court schedules).
    pub fn on_court(mut self, court: u32, round: u32) -> Self {
        self.court = Some(court);
        self.round = Some(round);
        self
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Team1 => &self.team_1,
            Side::Team2 => &self.team_2,
        }
    }

    /// All four players, team 1 first.
    pub fn players(&self) -> [PlayerId; 4] {
        [self.team_1[0], self.team_1[1], self.team_2[0], self.team_2[1]]
    }
}
