//! Command implementations for the FanConnect CLI
//!
//! The command layer owns the validation the store deliberately skips:
//! duplicate usernames, squad caps, identical teams in a fixture, and
//! position/sport membership checks all happen here, before the store is
//! touched.

pub mod auth;
pub mod bookings;
pub mod data;
pub mod matches;
pub mod roster;
pub mod standings;
pub mod stats;

use crate::error::{FanConnectError, Result};
use crate::store::{LeagueDatabase, Sport, Team, TeamId, User};

/// Resolve a sport by name, case-insensitively.
pub(crate) fn resolve_sport(db: &LeagueDatabase, name: &str) -> Result<Sport> {
    db.sports()?
        .into_iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| FanConnectError::UnknownSport {
            name: name.to_string(),
        })
}

pub(crate) fn resolve_team(db: &LeagueDatabase, id: TeamId) -> Result<Team> {
    db.teams()?
        .into_iter()
        .find(|t| t.id == id)
        .ok_or(FanConnectError::UnknownTeam { id })
}

/// The persisted session, required for user-scoped commands.
pub(crate) fn require_user(db: &LeagueDatabase) -> Result<User> {
    db.current_user()?.ok_or(FanConnectError::NotLoggedIn)
}
