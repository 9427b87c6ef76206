//! Seeding, export/import, and wipe commands

use crate::error::Result;
use crate::store::LeagueDatabase;
use std::path::{Path, PathBuf};

pub fn handle_init(db: &mut LeagueDatabase) -> Result<()> {
    if db.is_initialized()? {
        println!("Database already initialized");
        return Ok(());
    }
    db.initialize()?;
    let stats = db.statistics()?;
    println!(
        "✓ Database seeded: {} sports, {} teams, {} players, {} matches",
        stats.sports, stats.teams, stats.players, stats.matches
    );
    Ok(())
}

pub fn handle_export(db: &LeagueDatabase, out: Option<PathBuf>) -> Result<()> {
    let dump = serde_json::to_string_pretty(&db.export_data()?)?;
    match out {
        Some(path) => {
            std::fs::write(&path, dump)?;
            println!("✓ Data exported to {}", path.display());
        }
        None => println!("{}", dump),
    }
    Ok(())
}

pub fn handle_import(db: &mut LeagueDatabase, file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)?;
    let data = serde_json::from_str(&raw)?;
    db.import_data(&data)?;
    println!("✓ Data imported from {}", file.display());
    Ok(())
}

pub fn handle_clear(db: &mut LeagueDatabase) -> Result<()> {
    db.clear_all_data()?;
    println!("✓ All data cleared");
    Ok(())
}
