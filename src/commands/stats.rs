//! Collection statistics command

use crate::error::Result;
use crate::store::LeagueDatabase;

pub fn handle_stats(db: &LeagueDatabase) -> Result<()> {
    let stats = db.statistics()?;
    println!("Users:     {}", stats.users);
    println!("Sports:    {}", stats.sports);
    println!("Teams:     {}", stats.teams);
    println!("Players:   {}", stats.players);
    println!(
        "Matches:   {} ({} upcoming, {} completed)",
        stats.matches, stats.upcoming_matches, stats.completed_matches
    );
    println!("Bookings:  {}", stats.bookings);
    Ok(())
}
