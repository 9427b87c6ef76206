//! Data models for the storage layer
//!
//! Field names serialize in camelCase so the persisted blobs keep the
//! shape of the portal's original localStorage layout.

use super::ids::{BookingId, MatchId, PlayerId, SportId, TeamId, UserId};
use crate::error::FanConnectError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Account role, stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Manager,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Manager => "manager",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Role {
    type Err = FanConnectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            "manager" => Ok(Role::Manager),
            _ => Err(FanConnectError::InvalidRole {
                value: s.to_string(),
            }),
        }
    }
}

/// A portal account. Passwords are stored and compared in clear text,
/// preserving the original system's (insecure, by design) contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// Fields a caller supplies when registering an account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// A sport category. The team/player totals are denormalized at seed time
/// and are not kept in sync with later roster mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sport {
    pub id: SportId,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub total_teams: u32,
    pub total_players: u32,
    pub created_at: DateTime<Utc>,
}

/// A team within one sport. The sport name is a denormalized copy of the
/// referenced [`Sport`]'s name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub sport: String,
    pub sport_id: SportId,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub drawn: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
    pub founded: i32,
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Competition points from the win/draw counters. The stored `points`
    /// field is never trusted directly; surfaces recompute it from here.
    pub fn computed_points(&self) -> u32 {
        self.won * 3 + self.drawn
    }
}

#[derive(Debug, Clone)]
pub struct NewTeam {
    pub name: String,
    pub sport: String,
    pub sport_id: SportId,
}

/// A player owned by exactly one team. Team name and sport are denormalized
/// display copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team_id: TeamId,
    pub team_name: String,
    pub sport: String,
    pub position: String,
    pub age: u32,
    pub nationality: String,
    pub matches_played: u32,
    pub goals: u32,
    pub assists: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub rating: String,
    pub joined_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub name: String,
    pub team_id: TeamId,
    pub team_name: String,
    pub sport: String,
    pub position: String,
    pub age: u32,
    pub nationality: String,
}

/// Match lifecycle state, stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Upcoming,
    Completed,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchStatus::Upcoming => "upcoming",
            MatchStatus::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of a completed match.
///
/// On the wire this is the winning team's name, or the literal string
/// `"Draw"`, matching the original record format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Winner(String),
    Draw,
}

impl MatchOutcome {
    pub fn as_str(&self) -> &str {
        match self {
            MatchOutcome::Winner(name) => name,
            MatchOutcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for MatchOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MatchOutcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(if s == "Draw" {
            MatchOutcome::Draw
        } else {
            MatchOutcome::Winner(s)
        })
    }
}

/// A scheduled or completed fixture between two teams of one sport.
/// Team names are denormalized copies; `team1_id`/`team2_id` are the
/// authoritative references.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub sport: String,
    pub sport_id: SportId,
    pub team1: String,
    pub team1_id: TeamId,
    pub team2: String,
    pub team2_id: TeamId,
    pub date: DateTime<Utc>,
    pub venue: String,
    pub result: Option<MatchOutcome>,
    pub status: MatchStatus,
    pub attendance: Option<u32>,
    pub ticket_price: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMatch {
    pub sport: String,
    pub sport_id: SportId,
    pub team1: String,
    pub team1_id: TeamId,
    pub team2: String,
    pub team2_id: TeamId,
    pub date: DateTime<Utc>,
    pub venue: String,
}

/// Status value stamped on every new booking.
pub const BOOKING_CONFIRMED: &str = "confirmed";

/// A ticket booking. References its match and user by id only; no cascade
/// removes bookings when either side disappears (a known gap carried over
/// from the original system).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub match_id: MatchId,
    pub user_id: UserId,
    pub tickets: u32,
    pub total_amount: u32,
    pub booking_date: DateTime<Utc>,
    pub status: String,
}

/// Collection counts for the admin overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub users: usize,
    pub sports: usize,
    pub teams: usize,
    pub players: usize,
    pub matches: usize,
    pub upcoming_matches: usize,
    pub completed_matches: usize,
    pub bookings: usize,
}
