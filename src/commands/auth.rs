//! Account and session commands

use super::require_user;
use crate::error::{FanConnectError, Result};
use crate::store::{LeagueDatabase, NewUser, Role};

/// Create an account. Usernames are unique; the store does not check, so
/// the scan happens here.
pub fn handle_register(
    db: &mut LeagueDatabase,
    username: String,
    email: String,
    password: String,
    role: Role,
) -> Result<()> {
    if db.users()?.iter().any(|u| u.username == username) {
        return Err(FanConnectError::DuplicateUsername { username });
    }

    let user = db.add_user(NewUser {
        username,
        email,
        password,
        role,
    })?;

    println!("✓ Registered {} ({})", user.username, user.role);
    println!("Log in with: fanconnect login {}", user.username);
    Ok(())
}

pub fn handle_login(db: &mut LeagueDatabase, username: String, password: String) -> Result<()> {
    match db.authenticate(&username, &password)? {
        Some(user) => {
            println!("✓ Welcome back, {}!", user.username);
            Ok(())
        }
        None => Err(FanConnectError::InvalidCredentials),
    }
}

pub fn handle_logout(db: &mut LeagueDatabase) -> Result<()> {
    db.logout()?;
    println!("✓ Logged out");
    Ok(())
}

pub fn handle_whoami(db: &LeagueDatabase) -> Result<()> {
    let user = require_user(db)?;
    println!("{} <{}> ({})", user.username, user.email, user.role);
    match user.last_login {
        Some(at) => println!("Last login: {}", at.format("%Y-%m-%d %H:%M UTC")),
        None => println!("Last login: never"),
    }
    Ok(())
}
