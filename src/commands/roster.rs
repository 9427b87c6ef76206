//! Sport, team, and player roster commands

use super::{resolve_sport, resolve_team};
use crate::error::{FanConnectError, Result};
use crate::store::{seed, LeagueDatabase, NewPlayer, NewTeam, PlayerId, Team, TeamId};
use rand::Rng;

pub fn handle_sports(db: &LeagueDatabase) -> Result<()> {
    for sport in db.sports()? {
        println!(
            "{:<2} {:<12} {:>3} teams, {:>4} players",
            sport.id, sport.name, sport.total_teams, sport.total_players
        );
    }
    Ok(())
}

pub fn handle_teams(db: &LeagueDatabase, sport: Option<String>) -> Result<()> {
    let teams = match sport {
        Some(name) => db.teams_by_sport(resolve_sport(db, &name)?.id)?,
        None => db.teams()?,
    };

    if teams.is_empty() {
        println!("No teams found");
        return Ok(());
    }

    println!(
        "{:<4} {:<30} {:<12} {:>3} {:>3} {:>3} {:>3} {:>4}",
        "Id", "Team", "Sport", "P", "W", "D", "L", "Pts"
    );
    for team in &teams {
        println!(
            "{:<4} {:<30} {:<12} {:>3} {:>3} {:>3} {:>3} {:>4}",
            team.id,
            team.name,
            team.sport,
            team.played,
            team.won,
            team.drawn,
            team.lost,
            team.computed_points()
        );
    }
    Ok(())
}

pub fn handle_add_team(db: &mut LeagueDatabase, name: String, sport: String) -> Result<()> {
    let sport = resolve_sport(db, &sport)?;
    let team = db.add_team(NewTeam {
        name,
        sport: sport.name.clone(),
        sport_id: sport.id,
    })?;
    println!("✓ Team \"{}\" added to {} (id {})", team.name, team.sport, team.id);
    Ok(())
}

pub fn handle_delete_team(db: &mut LeagueDatabase, id: TeamId) -> Result<()> {
    db.delete_team(id)?;
    println!("✓ Team {} deleted, along with its players", id);
    Ok(())
}

pub fn handle_players(db: &LeagueDatabase, team_id: TeamId) -> Result<()> {
    let team = resolve_team(db, team_id)?;
    let players = db.players_by_team(team_id)?;

    println!("{} — {} players", team.name, players.len());
    for player in &players {
        println!(
            "{:<4} {:<28} {:<20} age {:<3} rating {}",
            player.id, player.name, player.position, player.age, player.rating
        );
    }
    Ok(())
}

pub fn handle_add_player(
    db: &mut LeagueDatabase,
    name: String,
    team_id: TeamId,
    position: String,
    age: Option<u32>,
    nationality: String,
) -> Result<()> {
    let team = resolve_team(db, team_id)?;
    check_squad_capacity(db, &team)?;

    let positions = seed::positions_for(team.sport_id).unwrap_or(&[]);
    if !positions.iter().any(|p| p.eq_ignore_ascii_case(&position)) {
        return Err(FanConnectError::InvalidPosition {
            position,
            sport: team.sport,
        });
    }

    let age = age.unwrap_or_else(|| 18 + rand::thread_rng().gen_range(0..15));
    let player = db.add_player(NewPlayer {
        name,
        team_id,
        team_name: team.name.clone(),
        sport: team.sport,
        position,
        age,
        nationality,
    })?;

    println!("✓ Player \"{}\" added to {} (id {})", player.name, team.name, player.id);
    Ok(())
}

pub fn handle_delete_player(db: &mut LeagueDatabase, id: PlayerId) -> Result<()> {
    db.delete_player(id)?;
    println!("✓ Player {} deleted", id);
    Ok(())
}

/// A squad holds at most 11 players; the store appends without checking.
fn check_squad_capacity(db: &LeagueDatabase, team: &Team) -> Result<()> {
    if db.players_by_team(team.id)?.len() >= crate::MAX_SQUAD_SIZE {
        return Err(FanConnectError::TeamFull {
            team: team.name.clone(),
        });
    }
    Ok(())
}
