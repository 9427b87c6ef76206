//! Storage layer for the FanConnect league portal
//!
//! This module provides a clean abstraction over the key-value database,
//! organized into logical components:
//! - `ids`: Type-safe identifier wrappers
//! - `models`: Data structures
//! - `schema`: Database connection and namespace management
//! - `queries`: CRUD operations, queries, and authentication
//! - `seed`: One-time demo-data population

pub mod ids;
pub mod models;
pub mod queries;
pub mod schema;
pub mod seed;


// Re-export the main types and database struct for easy access
pub use ids::*;
pub use models::*;
pub use schema::{LeagueDatabase, StoreKey};
