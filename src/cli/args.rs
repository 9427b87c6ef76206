//! CLI argument definitions and parsing structures.

use crate::store::{MatchId, PlayerId, Role, TeamId};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "fanconnect", about = "FanConnect sports league portal")]
pub struct FanConnect {
    /// Database file (or set `FANCONNECT_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Seed the database with demo leagues (no-op when already initialized).
    Init,

    /// List the available sports.
    Sports,

    /// List teams, optionally restricted to one sport.
    Teams {
        /// Sport name, e.g. "Football".
        #[clap(long, short)]
        sport: Option<String>,
    },

    /// Add a team to a sport.
    AddTeam {
        name: String,

        /// Sport name the team plays.
        #[clap(long, short)]
        sport: String,
    },

    /// Delete a team and every player it owns.
    DeleteTeam { id: TeamId },

    /// List the players of a team.
    Players { team_id: TeamId },

    /// Add a player to a team (rejected once the squad holds 11).
    AddPlayer {
        name: String,

        #[clap(long, short)]
        team_id: TeamId,

        /// Position; must be valid for the team's sport.
        #[clap(long, short)]
        position: String,

        /// Defaults to a plausible random age.
        #[clap(long)]
        age: Option<u32>,

        #[clap(long, default_value = "Indian")]
        nationality: String,
    },

    /// Delete a player.
    DeletePlayer { id: PlayerId },

    /// List matches: all by default, or only upcoming/completed.
    Matches {
        #[clap(long, conflicts_with = "completed")]
        upcoming: bool,

        #[clap(long)]
        completed: bool,

        /// Restrict to one sport by name.
        #[clap(long, short)]
        sport: Option<String>,
    },

    /// Schedule a match between two different teams of one sport.
    ScheduleMatch {
        #[clap(long, short)]
        sport: String,

        #[clap(long)]
        team1: TeamId,

        #[clap(long)]
        team2: TeamId,

        /// Kickoff, e.g. "2026-09-12 19:30" or RFC 3339.
        #[clap(long, short)]
        date: String,

        #[clap(long, short)]
        venue: String,
    },

    /// Record the result of a match. Without --winner or --draw a random
    /// demo result is drawn.
    CompleteMatch {
        id: MatchId,

        /// Winning team id; must be one of the match's two teams.
        #[clap(long, conflicts_with = "draw")]
        winner: Option<TeamId>,

        #[clap(long)]
        draw: bool,

        /// Defaults to a plausible random crowd.
        #[clap(long)]
        attendance: Option<u32>,
    },

    /// Show the points table for a sport.
    Standings {
        /// Sport name, e.g. "Cricket".
        sport: String,
    },

    /// Create a user account.
    Register {
        username: String,

        #[clap(long, short)]
        email: String,

        #[clap(long, short)]
        password: String,

        #[clap(long, default_value_t = Role::User)]
        role: Role,
    },

    /// Log in and persist the session across invocations.
    Login {
        username: String,

        #[clap(long, short)]
        password: String,
    },

    /// Clear the stored session.
    Logout,

    /// Show the logged-in user.
    Whoami,

    /// Book tickets for a match (requires a login).
    Book {
        match_id: MatchId,

        #[clap(long, short, default_value_t = 1)]
        tickets: u32,
    },

    /// List your bookings, or every booking with --all (admin only).
    Bookings {
        #[clap(long)]
        all: bool,
    },

    /// Collection counts.
    Stats,

    /// Dump every collection as JSON.
    Export {
        /// Write to a file instead of stdout.
        #[clap(long, short)]
        out: Option<PathBuf>,
    },

    /// Restore collections from an exported JSON dump.
    Import { file: PathBuf },

    /// Remove all stored data, including the session and seeding flag.
    Clear,
}
