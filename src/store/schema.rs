//! Database connection and key-value namespace management

use crate::error::{FanConnectError, Result};
use crate::events::{EventBus, LeagueEvent};
use crate::DB_PATH_ENV_VAR;
use dirs::data_local_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Logical keys of the persisted namespace: one per collection, plus the
/// single-value session slot and the seeding flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKey {
    Users,
    Sports,
    Teams,
    Players,
    Matches,
    Bookings,
    CurrentUser,
    Initialized,
}

impl StoreKey {
    /// Keys that hold record collections (excludes the session slot and
    /// the seeding flag).
    pub const COLLECTIONS: [StoreKey; 6] = [
        StoreKey::Users,
        StoreKey::Sports,
        StoreKey::Teams,
        StoreKey::Players,
        StoreKey::Matches,
        StoreKey::Bookings,
    ];

    pub const ALL: [StoreKey; 8] = [
        StoreKey::Users,
        StoreKey::Sports,
        StoreKey::Teams,
        StoreKey::Players,
        StoreKey::Matches,
        StoreKey::Bookings,
        StoreKey::CurrentUser,
        StoreKey::Initialized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Users => "users",
            StoreKey::Sports => "sports",
            StoreKey::Teams => "teams",
            StoreKey::Players => "players",
            StoreKey::Matches => "matches",
            StoreKey::Bookings => "bookings",
            StoreKey::CurrentUser => "current_user",
            StoreKey::Initialized => "initialized",
        }
    }
}

/// Database connection manager for all portal collections.
///
/// Single source of truth for persisted state. Collections are stored as
/// one JSON blob per [`StoreKey`] in a key-value table; every write
/// replaces a whole collection (read-modify-write, never partial-record
/// updates). The embedded [`EventBus`] notifies subscribers after each
/// mutating operation.
pub struct LeagueDatabase {
    pub(crate) conn: Connection,
    pub(crate) events: EventBus,
}

impl LeagueDatabase {
    /// Open the database at the default location (`FANCONNECT_DB` env var,
    /// falling back to the platform data directory) and ensure the schema
    /// exists.
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;
        Self::open(&db_path)
    }

    /// Open the database at a specific path.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::from_connection(Connection::open(path)?)
    }

    /// Open an in-memory database, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let mut db = Self {
            conn,
            events: EventBus::new(),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Resolve the database file location.
    fn database_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(DB_PATH_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        let data_dir = data_local_dir().ok_or(FanConnectError::NoDataDir)?;
        Ok(data_dir.join("fanconnect").join("league.db"))
    }

    /// Initialize the key-value schema.
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Register an event handler for every subsequent mutation.
    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(&LeagueEvent) + 'static,
    {
        self.events.subscribe(handler);
    }
}
