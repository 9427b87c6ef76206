//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fanconnect::{
    cli::{Commands, FanConnect},
    commands::{auth, bookings, data, matches, roster, standings, stats},
    events, LeagueDatabase,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let app = FanConnect::parse();

    let mut db = match &app.db {
        Some(path) => LeagueDatabase::open(path)?,
        None => LeagueDatabase::new()?,
    };
    db.subscribe(events::tracing_logger());

    match app.command {
        Commands::Init => data::handle_init(&mut db)?,

        Commands::Sports => roster::handle_sports(&db)?,
        Commands::Teams { sport } => roster::handle_teams(&db, sport)?,
        Commands::AddTeam { name, sport } => roster::handle_add_team(&mut db, name, sport)?,
        Commands::DeleteTeam { id } => roster::handle_delete_team(&mut db, id)?,
        Commands::Players { team_id } => roster::handle_players(&db, team_id)?,
        Commands::AddPlayer {
            name,
            team_id,
            position,
            age,
            nationality,
        } => roster::handle_add_player(&mut db, name, team_id, position, age, nationality)?,
        Commands::DeletePlayer { id } => roster::handle_delete_player(&mut db, id)?,

        Commands::Matches {
            upcoming,
            completed,
            sport,
        } => matches::handle_matches(&db, upcoming, completed, sport)?,
        Commands::ScheduleMatch {
            sport,
            team1,
            team2,
            date,
            venue,
        } => matches::handle_schedule(&mut db, sport, team1, team2, date, venue)?,
        Commands::CompleteMatch {
            id,
            winner,
            draw,
            attendance,
        } => matches::handle_complete(&mut db, id, winner, draw, attendance)?,

        Commands::Standings { sport } => standings::handle_standings(&db, sport)?,

        Commands::Register {
            username,
            email,
            password,
            role,
        } => auth::handle_register(&mut db, username, email, password, role)?,
        Commands::Login { username, password } => auth::handle_login(&mut db, username, password)?,
        Commands::Logout => auth::handle_logout(&mut db)?,
        Commands::Whoami => auth::handle_whoami(&db)?,

        Commands::Book { match_id, tickets } => bookings::handle_book(&mut db, match_id, tickets)?,
        Commands::Bookings { all } => bookings::handle_bookings(&db, all)?,

        Commands::Stats => stats::handle_stats(&db)?,
        Commands::Export { out } => data::handle_export(&db, out)?,
        Commands::Import { file } => data::handle_import(&mut db, &file)?,
        Commands::Clear => data::handle_clear(&mut db)?,
    }

    Ok(())
}
