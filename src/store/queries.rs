//! CRUD operations, queries, and authentication
//!
//! Every operation works on whole collections: read the blob, change the
//! records, write the blob back. The store does not re-validate what the
//! command layer already checked (duplicate usernames, squad caps,
//! identical teams); callers going around the command layer can therefore
//! corrupt those invariants.

use super::models::*;
use super::schema::{LeagueDatabase, StoreKey};
use crate::error::{FanConnectError, Result};
use crate::events::LeagueEvent;
use crate::standings::{compute_standings, StandingsRow};
use crate::store::ids::{BookingId, MatchId, PlayerId, SportId, TeamId, UserId};
use chrono::{Datelike, Utc};
use rusqlite::params;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

impl LeagueDatabase {
    // ---- raw key-value access ----

    pub(crate) fn read_key(&self, key: StoreKey) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?")?;
        match stmt.query_row(params![key.as_str()], |row| row.get(0)) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub(crate) fn write_key(&mut self, key: StoreKey, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?, ?)",
            params![key.as_str(), value],
        )?;
        Ok(())
    }

    pub(crate) fn delete_key(&mut self, key: StoreKey) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?", params![key.as_str()])?;
        Ok(())
    }

    /// Parse a stored collection. A missing key is an empty collection,
    /// never an error; a corrupt blob propagates as a JSON error.
    pub(crate) fn collection<T: DeserializeOwned>(&self, key: StoreKey) -> Result<Vec<T>> {
        match self.read_key(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Serialize and overwrite a whole collection.
    pub(crate) fn set_collection<T: Serialize>(&mut self, key: StoreKey, records: &[T]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.write_key(key, &raw)
    }

    // ---- typed getters and setters ----

    pub fn users(&self) -> Result<Vec<User>> {
        self.collection(StoreKey::Users)
    }

    pub fn set_users(&mut self, users: &[User]) -> Result<()> {
        self.set_collection(StoreKey::Users, users)
    }

    pub fn sports(&self) -> Result<Vec<Sport>> {
        self.collection(StoreKey::Sports)
    }

    pub fn set_sports(&mut self, sports: &[Sport]) -> Result<()> {
        self.set_collection(StoreKey::Sports, sports)
    }

    pub fn teams(&self) -> Result<Vec<Team>> {
        self.collection(StoreKey::Teams)
    }

    pub fn set_teams(&mut self, teams: &[Team]) -> Result<()> {
        self.set_collection(StoreKey::Teams, teams)
    }

    pub fn players(&self) -> Result<Vec<Player>> {
        self.collection(StoreKey::Players)
    }

    pub fn set_players(&mut self, players: &[Player]) -> Result<()> {
        self.set_collection(StoreKey::Players, players)
    }

    pub fn matches(&self) -> Result<Vec<Match>> {
        self.collection(StoreKey::Matches)
    }

    pub fn set_matches(&mut self, matches: &[Match]) -> Result<()> {
        self.set_collection(StoreKey::Matches, matches)
    }

    pub fn bookings(&self) -> Result<Vec<Booking>> {
        self.collection(StoreKey::Bookings)
    }

    pub fn set_bookings(&mut self, bookings: &[Booking]) -> Result<()> {
        self.set_collection(StoreKey::Bookings, bookings)
    }

    // ---- query helpers ----

    pub fn teams_by_sport(&self, sport_id: SportId) -> Result<Vec<Team>> {
        Ok(self
            .teams()?
            .into_iter()
            .filter(|team| team.sport_id == sport_id)
            .collect())
    }

    pub fn players_by_team(&self, team_id: TeamId) -> Result<Vec<Player>> {
        Ok(self
            .players()?
            .into_iter()
            .filter(|player| player.team_id == team_id)
            .collect())
    }

    pub fn matches_by_sport(&self, sport_id: SportId) -> Result<Vec<Match>> {
        Ok(self
            .matches()?
            .into_iter()
            .filter(|m| m.sport_id == sport_id)
            .collect())
    }

    /// Matches not yet played, soonest first.
    pub fn upcoming_matches(&self) -> Result<Vec<Match>> {
        let mut matches: Vec<Match> = self
            .matches()?
            .into_iter()
            .filter(|m| m.status == MatchStatus::Upcoming)
            .collect();
        matches.sort_by_key(|m| m.date);
        Ok(matches)
    }

    /// Finished matches, most recent first.
    pub fn completed_matches(&self) -> Result<Vec<Match>> {
        let mut matches: Vec<Match> = self
            .matches()?
            .into_iter()
            .filter(|m| m.status == MatchStatus::Completed)
            .collect();
        matches.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(matches)
    }

    pub fn bookings_by_user(&self, user_id: UserId) -> Result<Vec<Booking>> {
        Ok(self
            .bookings()?
            .into_iter()
            .filter(|b| b.user_id == user_id)
            .collect())
    }

    // ---- inserts ----

    pub fn add_user(&mut self, new: NewUser) -> Result<User> {
        let mut users = self.users()?;
        let user = User {
            id: UserId::new(next_id(users.iter().map(|u| u.id.as_u32()))),
            username: new.username,
            password: new.password,
            email: new.email,
            role: new.role,
            created_at: Utc::now(),
            last_login: None,
        };
        users.push(user.clone());
        self.set_users(&users)?;
        self.events.emit(&LeagueEvent::UserRegistered(user.clone()));
        Ok(user)
    }

    pub fn add_team(&mut self, new: NewTeam) -> Result<Team> {
        let mut teams = self.teams()?;
        let team = Team {
            id: TeamId::new(next_id(teams.iter().map(|t| t.id.as_u32()))),
            name: new.name,
            sport: new.sport,
            sport_id: new.sport_id,
            played: 0,
            won: 0,
            lost: 0,
            drawn: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
            founded: Utc::now().year(),
            created_at: Utc::now(),
        };
        teams.push(team.clone());
        self.set_teams(&teams)?;
        self.events.emit(&LeagueEvent::TeamAdded(team.clone()));
        Ok(team)
    }

    pub fn add_player(&mut self, new: NewPlayer) -> Result<Player> {
        let mut players = self.players()?;
        let player = Player {
            id: PlayerId::new(next_id(players.iter().map(|p| p.id.as_u32()))),
            name: new.name,
            team_id: new.team_id,
            team_name: new.team_name,
            sport: new.sport,
            position: new.position,
            age: new.age,
            nationality: new.nationality,
            matches_played: 0,
            goals: 0,
            assists: 0,
            yellow_cards: 0,
            red_cards: 0,
            rating: "7.0".to_string(),
            joined_date: Utc::now(),
            created_at: Utc::now(),
        };
        players.push(player.clone());
        self.set_players(&players)?;
        self.events.emit(&LeagueEvent::PlayerAdded(player.clone()));
        Ok(player)
    }

    pub fn add_match(&mut self, new: NewMatch) -> Result<Match> {
        let mut matches = self.matches()?;
        let m = Match {
            id: MatchId::new(next_id(matches.iter().map(|m| m.id.as_u32()))),
            sport: new.sport,
            sport_id: new.sport_id,
            team1: new.team1,
            team1_id: new.team1_id,
            team2: new.team2,
            team2_id: new.team2_id,
            date: new.date,
            venue: new.venue,
            result: None,
            status: MatchStatus::Upcoming,
            attendance: None,
            ticket_price: crate::TICKET_PRICE,
            created_at: Utc::now(),
        };
        matches.push(m.clone());
        self.set_matches(&matches)?;
        self.events.emit(&LeagueEvent::MatchScheduled(m.clone()));
        Ok(m)
    }

    /// Book tickets for a match. The total is priced from the match record,
    /// not supplied by the caller.
    pub fn add_booking(&mut self, match_id: MatchId, user_id: UserId, tickets: u32) -> Result<Booking> {
        let m = self
            .matches()?
            .into_iter()
            .find(|m| m.id == match_id)
            .ok_or(FanConnectError::MatchNotFound { id: match_id })?;

        let mut bookings = self.bookings()?;
        let booking = Booking {
            id: BookingId::new(next_id(bookings.iter().map(|b| b.id.as_u32()))),
            match_id,
            user_id,
            tickets,
            total_amount: tickets * m.ticket_price,
            booking_date: Utc::now(),
            status: BOOKING_CONFIRMED.to_string(),
        };
        bookings.push(booking.clone());
        self.set_bookings(&bookings)?;
        self.events.emit(&LeagueEvent::TicketBooked(booking.clone()));
        Ok(booking)
    }

    // ---- deletes ----

    /// Remove a team and every player it owns (the only cascade rule in
    /// the system). Deleting an unknown id is a no-op.
    pub fn delete_team(&mut self, team_id: TeamId) -> Result<()> {
        let teams: Vec<Team> = self
            .teams()?
            .into_iter()
            .filter(|t| t.id != team_id)
            .collect();
        self.set_teams(&teams)?;

        let players: Vec<Player> = self
            .players()?
            .into_iter()
            .filter(|p| p.team_id != team_id)
            .collect();
        self.set_players(&players)
    }

    pub fn delete_player(&mut self, player_id: PlayerId) -> Result<()> {
        let players: Vec<Player> = self
            .players()?
            .into_iter()
            .filter(|p| p.id != player_id)
            .collect();
        self.set_players(&players)
    }

    // ---- match completion ----

    /// Record the result of a match. Returns the updated record, or `None`
    /// when the id is unknown (a normal outcome, not a failure).
    pub fn complete_match(
        &mut self,
        match_id: MatchId,
        outcome: MatchOutcome,
        attendance: u32,
    ) -> Result<Option<Match>> {
        let mut matches = self.matches()?;
        let updated = match matches.iter_mut().find(|m| m.id == match_id) {
            Some(m) => {
                m.result = Some(outcome);
                m.status = MatchStatus::Completed;
                m.attendance = Some(attendance);
                m.clone()
            }
            None => return Ok(None),
        };
        self.set_matches(&matches)?;
        self.events.emit(&LeagueEvent::MatchCompleted(updated.clone()));
        Ok(Some(updated))
    }

    // ---- standings ----

    /// Derive the ranked points table for a sport from its completed
    /// matches. A pure view: stored team counters are never written back.
    /// An unknown sport id yields an empty table.
    pub fn standings(&self, sport_id: SportId) -> Result<Vec<StandingsRow>> {
        let teams = self.teams_by_sport(sport_id)?;
        let matches = self.matches_by_sport(sport_id)?;
        let rows = compute_standings(&teams, &matches);

        let sport = teams
            .first()
            .map(|t| t.sport.clone())
            .unwrap_or_else(|| sport_id.to_string());
        self.events.emit(&LeagueEvent::StandingsComputed {
            sport,
            rows: rows.clone(),
        });
        Ok(rows)
    }

    // ---- authentication and session ----

    /// Exact-match credential check over the users collection. On success,
    /// stamps `last_login`, persists the session slot, and returns the
    /// user; on failure returns `None` without touching any state.
    pub fn authenticate(&mut self, username: &str, password: &str) -> Result<Option<User>> {
        let mut users = self.users()?;
        let user = match users
            .iter_mut()
            .find(|u| u.username == username && u.password == password)
        {
            Some(user) => {
                user.last_login = Some(Utc::now());
                user.clone()
            }
            None => return Ok(None),
        };
        self.set_users(&users)?;
        self.write_key(StoreKey::CurrentUser, &serde_json::to_string(&user)?)?;
        self.events.emit(&LeagueEvent::UserLoggedIn(user.clone()));
        Ok(Some(user))
    }

    /// Clear the persisted session.
    pub fn logout(&mut self) -> Result<()> {
        self.delete_key(StoreKey::CurrentUser)
    }

    /// Read the persisted session back; this is how a fresh process
    /// resumes a login.
    pub fn current_user(&self) -> Result<Option<User>> {
        match self.read_key(StoreKey::CurrentUser)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    // ---- utilities ----

    /// Remove every stored key, including the session and the seeding
    /// flag, so the next `initialize()` reseeds from scratch.
    pub fn clear_all_data(&mut self) -> Result<()> {
        for key in StoreKey::ALL {
            self.delete_key(key)?;
        }
        Ok(())
    }

    /// Dump every stored key as parsed JSON. Absent keys export as null.
    pub fn export_data(&self) -> Result<Value> {
        let mut data = Map::new();
        for key in StoreKey::ALL {
            let value = match self.read_key(key)? {
                Some(raw) => serde_json::from_str(&raw)?,
                None => Value::Null,
            };
            data.insert(key.as_str().to_string(), value);
        }
        Ok(Value::Object(data))
    }

    /// Restore stored keys from an `export_data` dump. Unknown keys and
    /// null values are skipped.
    pub fn import_data(&mut self, data: &Value) -> Result<()> {
        let Some(object) = data.as_object() else {
            return Ok(());
        };
        for key in StoreKey::ALL {
            if let Some(value) = object.get(key.as_str()) {
                if !value.is_null() {
                    self.write_key(key, &serde_json::to_string(value)?)?;
                }
            }
        }
        Ok(())
    }

    /// Collection counts for the admin overview.
    pub fn statistics(&self) -> Result<Statistics> {
        let matches = self.matches()?;
        Ok(Statistics {
            users: self.users()?.len(),
            sports: self.sports()?.len(),
            teams: self.teams()?.len(),
            players: self.players()?.len(),
            matches: matches.len(),
            upcoming_matches: matches
                .iter()
                .filter(|m| m.status == MatchStatus::Upcoming)
                .count(),
            completed_matches: matches
                .iter()
                .filter(|m| m.status == MatchStatus::Completed)
                .count(),
            bookings: self.bookings()?.len(),
        })
    }
}

/// Next identifier for a collection: one past the current maximum. Ids are
/// never reassigned while the maximum stays in the collection.
fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().unwrap_or(0) + 1
}
