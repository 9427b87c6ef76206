//! Error types for the FanConnect league portal

use crate::store::{MatchId, TeamId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FanConnectError>;

#[derive(Error, Debug)]
pub enum FanConnectError {
    #[error("storage operation failed: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not determine a data directory for the league database")]
    NoDataDir,

    #[error("failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("unknown sport: {name}")]
    UnknownSport { name: String },

    #[error("unknown team: {id}")]
    UnknownTeam { id: TeamId },

    #[error("team {team} does not play {sport}")]
    TeamNotInSport { team: String, sport: String },

    #[error("team {id} is not part of this match")]
    TeamNotInMatch { id: TeamId },

    #[error("match not found: {id}")]
    MatchNotFound { id: MatchId },

    #[error("a match needs two different teams")]
    SameTeams,

    #[error("team {team} already has the full squad of 11 players")]
    TeamFull { team: String },

    #[error("{position} is not a valid {sport} position")]
    InvalidPosition { position: String, sport: String },

    #[error("username already taken: {username}")]
    DuplicateUsername { username: String },

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("not logged in")]
    NotLoggedIn,

    #[error("this action requires the {role} role")]
    Forbidden { role: String },

    #[error("invalid role: {value}")]
    InvalidRole { value: String },

    #[error("unrecognized match date: {value}")]
    InvalidDate { value: String },
}
