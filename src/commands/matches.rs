//! Match scheduling and completion commands

use super::{resolve_sport, resolve_team};
use crate::error::{FanConnectError, Result};
use crate::store::{LeagueDatabase, Match, MatchId, MatchOutcome, MatchStatus, NewMatch, TeamId};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rand::Rng;

pub fn handle_matches(
    db: &LeagueDatabase,
    upcoming: bool,
    completed: bool,
    sport: Option<String>,
) -> Result<()> {
    let mut matches = if upcoming {
        db.upcoming_matches()?
    } else if completed {
        db.completed_matches()?
    } else {
        db.matches()?
    };

    if let Some(name) = sport {
        let sport = resolve_sport(db, &name)?;
        matches.retain(|m| m.sport_id == sport.id);
    }

    if matches.is_empty() {
        println!("No matches found");
        return Ok(());
    }
    for m in &matches {
        print_match(m);
    }
    Ok(())
}

fn print_match(m: &Match) {
    let outcome = match (&m.status, &m.result) {
        (MatchStatus::Completed, Some(MatchOutcome::Draw)) => "Draw".to_string(),
        (MatchStatus::Completed, Some(MatchOutcome::Winner(name))) => format!("Winner: {}", name),
        (MatchStatus::Completed, None) => "completed".to_string(),
        (MatchStatus::Upcoming, _) => "upcoming".to_string(),
    };
    println!(
        "{:<4} {}  {} vs {} — {} ({})",
        m.id,
        m.date.format("%Y-%m-%d %H:%M"),
        m.team1,
        m.team2,
        m.venue,
        outcome
    );
}

pub fn handle_schedule(
    db: &mut LeagueDatabase,
    sport: String,
    team1: TeamId,
    team2: TeamId,
    date: String,
    venue: String,
) -> Result<()> {
    if team1 == team2 {
        return Err(FanConnectError::SameTeams);
    }

    let sport = resolve_sport(db, &sport)?;
    let home = resolve_team(db, team1)?;
    let away = resolve_team(db, team2)?;
    for team in [&home, &away] {
        if team.sport_id != sport.id {
            return Err(FanConnectError::TeamNotInSport {
                team: team.name.clone(),
                sport: sport.name,
            });
        }
    }

    let m = db.add_match(NewMatch {
        sport: sport.name,
        sport_id: sport.id,
        team1: home.name.clone(),
        team1_id: home.id,
        team2: away.name.clone(),
        team2_id: away.id,
        date: parse_match_date(&date)?,
        venue,
    })?;

    println!(
        "✓ Match scheduled: {} vs {} on {} (id {})",
        m.team1,
        m.team2,
        m.date.format("%Y-%m-%d %H:%M"),
        m.id
    );
    Ok(())
}

pub fn handle_complete(
    db: &mut LeagueDatabase,
    id: MatchId,
    winner: Option<TeamId>,
    draw: bool,
    attendance: Option<u32>,
) -> Result<()> {
    let Some(m) = db.matches()?.into_iter().find(|m| m.id == id) else {
        println!("Match {} not found", id);
        return Ok(());
    };

    let outcome = if draw {
        MatchOutcome::Draw
    } else if let Some(team_id) = winner {
        if team_id == m.team1_id {
            MatchOutcome::Winner(m.team1.clone())
        } else if team_id == m.team2_id {
            MatchOutcome::Winner(m.team2.clone())
        } else {
            return Err(FanConnectError::TeamNotInMatch { id: team_id });
        }
    } else {
        random_outcome(&m)
    };

    let attendance =
        attendance.unwrap_or_else(|| 15_000 + rand::thread_rng().gen_range(0..35_000));

    if let Some(updated) = db.complete_match(id, outcome, attendance)? {
        let result = updated.result.map(|r| r.to_string()).unwrap_or_default();
        println!(
            "✓ Match completed: {} vs {}, result: {}",
            updated.team1, updated.team2, result
        );
    }
    Ok(())
}

/// Demo fallback when no explicit result is given, as in the original
/// admin action: either side or a draw, equally likely.
fn random_outcome(m: &Match) -> MatchOutcome {
    match rand::thread_rng().gen_range(0..3) {
        0 => MatchOutcome::Winner(m.team1.clone()),
        1 => MatchOutcome::Winner(m.team2.clone()),
        _ => MatchOutcome::Draw,
    }
}

/// Accept RFC 3339, "YYYY-MM-DD HH:MM", or a bare date at midnight UTC.
fn parse_match_date(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M") {
        return Ok(Utc.from_utc_datetime(&parsed));
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&parsed.and_hms_opt(0, 0, 0).unwrap_or_default()));
    }
    Err(FanConnectError::InvalidDate {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_match_date_formats() {
        assert!(parse_match_date("2026-09-12T19:30:00Z").is_ok());
        assert!(parse_match_date("2026-09-12 19:30").is_ok());
        assert!(parse_match_date("2026-09-12").is_ok());
        assert!(parse_match_date("next tuesday").is_err());
    }

    #[test]
    fn test_parse_match_date_normalizes_to_utc() {
        let parsed = parse_match_date("2026-09-12T19:30:00+05:30").unwrap();
        assert_eq!(parsed.format("%H:%M").to_string(), "14:00");
    }
}
