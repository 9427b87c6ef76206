//! Command-line interface for the FanConnect portal

pub mod args;

pub use args::{Commands, FanConnect};
