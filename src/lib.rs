//! FanConnect Sports League Library
//!
//! A local-first Rust library for running a sports-league fan portal:
//! team and player rosters, match scheduling, a derived points table,
//! user sessions, and ticket booking, all persisted in a single
//! key-value database.
//!
//! ## Features
//!
//! - **Persistence/CRUD Store**: every collection (users, sports, teams,
//!   players, matches, bookings) lives as one JSON blob in a SQLite-backed
//!   key-value namespace
//! - **Standings Engine**: pure, on-demand points-table derivation from
//!   completed match results
//! - **Sessions**: plain credential login with a persisted current-user slot
//! - **Ticket Booking**: per-match bookings priced from the match record
//! - **Events**: synchronous publish/subscribe notifications for every
//!   mutating operation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fanconnect::LeagueDatabase;
//!
//! # fn example() -> fanconnect::Result<()> {
//! let mut db = LeagueDatabase::new()?;
//! db.initialize()?;
//!
//! let football = db
//!     .sports()?
//!     .into_iter()
//!     .find(|s| s.name == "Football")
//!     .unwrap();
//!
//! for row in db.standings(football.id)? {
//!     println!("{:>2}. {:<28} {:>3} pts", row.rank, row.team, row.points);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the library at a specific database file:
//! ```bash
//! export FANCONNECT_DB=/tmp/league.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod events;
pub mod standings;
pub mod store;

// Re-export commonly used types
pub use error::{FanConnectError, Result};
pub use events::{EventBus, LeagueEvent};
pub use standings::{compute_standings, StandingsRow};
pub use store::{
    Booking, BookingId, LeagueDatabase, Match, MatchId, MatchOutcome, MatchStatus, Player,
    PlayerId, Role, Sport, SportId, Team, TeamId, User, UserId,
};

pub const DB_PATH_ENV_VAR: &str = "FANCONNECT_DB";

/// Every match sells at the same flat ticket price.
pub const TICKET_PRICE: u32 = 500;

/// A team roster holds at most this many players.
pub const MAX_SQUAD_SIZE: usize = 11;
