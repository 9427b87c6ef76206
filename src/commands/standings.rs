//! Points table command

use super::resolve_sport;
use crate::error::Result;
use crate::store::LeagueDatabase;

/// Render the ranked table for one sport, derived on demand from its
/// completed matches.
pub fn handle_standings(db: &LeagueDatabase, sport: String) -> Result<()> {
    let sport = resolve_sport(db, &sport)?;
    let rows = db.standings(sport.id)?;

    if rows.is_empty() {
        println!("No teams yet for {}", sport.name);
        return Ok(());
    }

    println!("{} points table", sport.name);
    println!(
        "{:<4} {:<30} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4}",
        "Pos", "Team", "P", "W", "D", "L", "GD", "Pts"
    );
    for row in &rows {
        println!(
            "{:<4} {:<30} {:>3} {:>3} {:>3} {:>3} {:>+4} {:>4}",
            row.rank, row.team, row.played, row.won, row.drawn, row.lost, row.goal_difference, row.points
        );
    }
    println!("P = Played, W = Won, D = Drawn, L = Lost, GD = Goal Difference, Pts = Points");
    Ok(())
}
