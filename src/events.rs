//! Synchronous publish/subscribe notifications for store mutations.
//!
//! Every mutating store operation emits one [`LeagueEvent`] after its write
//! has been persisted. Delivery is synchronous and at-most-once: handlers run
//! on the calling thread, in subscription order, and a missed event is never
//! replayed. Handlers cannot fail the operation that emitted the event.

use crate::standings::StandingsRow;
use crate::store::{Booking, Match, Player, Team, User};
use tracing::{debug, info};

/// A named notification carrying the record(s) an operation affected.
#[derive(Debug, Clone)]
pub enum LeagueEvent {
    UserRegistered(User),
    UserLoggedIn(User),
    TeamAdded(Team),
    PlayerAdded(Player),
    MatchScheduled(Match),
    MatchCompleted(Match),
    TicketBooked(Booking),
    StandingsComputed { sport: String, rows: Vec<StandingsRow> },
}

impl LeagueEvent {
    /// Stable event name, usable as a routing key by handlers.
    pub fn kind(&self) -> &'static str {
        match self {
            LeagueEvent::UserRegistered(_) => "user_registered",
            LeagueEvent::UserLoggedIn(_) => "user_logged_in",
            LeagueEvent::TeamAdded(_) => "team_added",
            LeagueEvent::PlayerAdded(_) => "player_added",
            LeagueEvent::MatchScheduled(_) => "match_scheduled",
            LeagueEvent::MatchCompleted(_) => "match_completed",
            LeagueEvent::TicketBooked(_) => "ticket_booked",
            LeagueEvent::StandingsComputed { .. } => "standings_computed",
        }
    }
}

type Handler = Box<dyn Fn(&LeagueEvent)>;

/// Best-effort synchronous event dispatcher.
///
/// Owned by the [`LeagueDatabase`](crate::LeagueDatabase) instance rather
/// than living in module-global state, so each database handle carries its
/// own subscriber list.
#[derive(Default)]
pub struct EventBus {
    handlers: Vec<Handler>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for every subsequent event.
    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(&LeagueEvent) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Dispatch an event to every handler, in subscription order.
    pub fn emit(&self, event: &LeagueEvent) {
        for handler in &self.handlers {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Handler that logs every event through `tracing`.
///
/// Stands in for the trigger hooks a server-side deployment would attach
/// here (confirmation mail, audit log, cache invalidation).
pub fn tracing_logger() -> impl Fn(&LeagueEvent) {
    |event: &LeagueEvent| match event {
        LeagueEvent::UserRegistered(user) => {
            info!(username = %user.username, "new user registered");
        }
        LeagueEvent::UserLoggedIn(user) => {
            info!(username = %user.username, "user logged in");
        }
        LeagueEvent::TeamAdded(team) => {
            info!(team = %team.name, sport = %team.sport, "new team added");
        }
        LeagueEvent::PlayerAdded(player) => {
            info!(player = %player.name, team = %player.team_name, "new player added");
        }
        LeagueEvent::MatchScheduled(m) => {
            info!(team1 = %m.team1, team2 = %m.team2, date = %m.date, "match scheduled");
        }
        LeagueEvent::MatchCompleted(m) => {
            info!(team1 = %m.team1, team2 = %m.team2, result = ?m.result, "match completed");
        }
        LeagueEvent::TicketBooked(booking) => {
            info!(
                tickets = booking.tickets,
                match_id = %booking.match_id,
                total = booking.total_amount,
                "tickets booked"
            );
        }
        LeagueEvent::StandingsComputed { sport, rows } => {
            debug!(sport = %sport, teams = rows.len(), "points table recomputed");
        }
    }
}
