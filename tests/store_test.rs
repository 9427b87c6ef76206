//! Integration tests for the persistence/CRUD store

use chrono::{Duration, Utc};
use fanconnect::store::{
    LeagueDatabase, MatchOutcome, MatchStatus, NewMatch, NewPlayer, NewTeam, NewUser, Role,
    SportId, Team, TeamId,
};
use tempfile::tempdir;

fn create_test_db() -> LeagueDatabase {
    LeagueDatabase::open_in_memory().unwrap()
}

fn add_team(db: &mut LeagueDatabase, name: &str) -> Team {
    db.add_team(NewTeam {
        name: name.to_string(),
        sport: "Cricket".to_string(),
        sport_id: SportId::new(1),
    })
    .unwrap()
}

fn add_player(db: &mut LeagueDatabase, name: &str, team: &Team) {
    db.add_player(NewPlayer {
        name: name.to_string(),
        team_id: team.id,
        team_name: team.name.clone(),
        sport: team.sport.clone(),
        position: "Batsman".to_string(),
        age: 27,
        nationality: "Indian".to_string(),
    })
    .unwrap();
}

fn schedule(db: &mut LeagueDatabase, team1: &Team, team2: &Team, days_ahead: i64) -> fanconnect::Match {
    db.add_match(NewMatch {
        sport: team1.sport.clone(),
        sport_id: team1.sport_id,
        team1: team1.name.clone(),
        team1_id: team1.id,
        team2: team2.name.clone(),
        team2_id: team2.id,
        date: Utc::now() + Duration::days(days_ahead),
        venue: "Eden Gardens, Kolkata".to_string(),
    })
    .unwrap()
}

#[test]
fn test_ids_grow_monotonically_across_deletes() {
    let mut db = create_test_db();

    let mut assigned = Vec::new();
    for name in ["Alpha", "Beta", "Gamma"] {
        assigned.push(add_team(&mut db, name).id.as_u32());
    }
    db.delete_team(TeamId::new(assigned[0])).unwrap();
    assigned.push(add_team(&mut db, "Delta").id.as_u32());

    for window in assigned.windows(2) {
        assert!(window[1] > window[0], "id {} not above {}", window[1], window[0]);
    }
}

#[test]
fn test_team_delete_cascade_is_scoped() {
    let mut db = create_test_db();
    let doomed = add_team(&mut db, "Doomed");
    let kept = add_team(&mut db, "Kept");
    add_player(&mut db, "Player One", &doomed);
    add_player(&mut db, "Player Two", &doomed);
    add_player(&mut db, "Player Three", &kept);

    db.delete_team(doomed.id).unwrap();

    assert!(db.teams().unwrap().iter().all(|t| t.id != doomed.id));
    assert!(db.players().unwrap().iter().all(|p| p.team_id != doomed.id));
    assert_eq!(db.players_by_team(kept.id).unwrap().len(), 1);
}

#[test]
fn test_match_filters_and_ordering() {
    let mut db = create_test_db();
    let alpha = add_team(&mut db, "Alpha");
    let beta = add_team(&mut db, "Beta");

    let next_month = schedule(&mut db, &alpha, &beta, 30);
    let tomorrow = schedule(&mut db, &alpha, &beta, 1);
    let last_week = schedule(&mut db, &alpha, &beta, -7);
    let yesterday = schedule(&mut db, &alpha, &beta, -1);
    db.complete_match(last_week.id, MatchOutcome::Draw, 20_000)
        .unwrap();
    db.complete_match(yesterday.id, MatchOutcome::Winner("Alpha".into()), 25_000)
        .unwrap();

    let upcoming = db.upcoming_matches().unwrap();
    assert!(upcoming.iter().all(|m| m.status == MatchStatus::Upcoming));
    assert_eq!(
        upcoming.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![tomorrow.id, next_month.id]
    );

    let completed = db.completed_matches().unwrap();
    assert!(completed.iter().all(|m| m.status == MatchStatus::Completed));
    assert_eq!(
        completed.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![yesterday.id, last_week.id]
    );
}

#[test]
fn test_booking_total_uses_match_price() {
    let mut db = create_test_db();
    let alpha = add_team(&mut db, "Alpha");
    let beta = add_team(&mut db, "Beta");
    let m = schedule(&mut db, &alpha, &beta, 5);
    let user = db
        .add_user(NewUser {
            username: "fan".to_string(),
            email: "fan@example.com".to_string(),
            password: "secret".to_string(),
            role: Role::User,
        })
        .unwrap();

    let booking = db.add_booking(m.id, user.id, 3).unwrap();
    assert_eq!(booking.total_amount, 1500);
}

#[test]
fn test_seeding_runs_once() {
    let mut db = create_test_db();
    db.initialize().unwrap();
    let before = db.export_data().unwrap();

    db.initialize().unwrap();
    assert_eq!(before, db.export_data().unwrap());
}

#[test]
fn test_authentication_and_session_round_trip() {
    let mut db = create_test_db();
    db.add_user(NewUser {
        username: "fan".to_string(),
        email: "fan@example.com".to_string(),
        password: "secret".to_string(),
        role: Role::User,
    })
    .unwrap();

    assert!(db.authenticate("fan", "nope").unwrap().is_none());
    assert!(db.current_user().unwrap().is_none());

    let user = db.authenticate("fan", "secret").unwrap().unwrap();
    assert!(user.last_login.is_some());
    assert_eq!(db.current_user().unwrap().unwrap().id, user.id);

    db.logout().unwrap();
    assert!(db.current_user().unwrap().is_none());
}

#[test]
fn test_session_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("league.db");

    {
        let mut db = LeagueDatabase::open(&path).unwrap();
        db.add_user(NewUser {
            username: "fan".to_string(),
            email: "fan@example.com".to_string(),
            password: "secret".to_string(),
            role: Role::User,
        })
        .unwrap();
        db.authenticate("fan", "secret").unwrap();
    }

    // A fresh handle resumes the persisted session
    let db = LeagueDatabase::open(&path).unwrap();
    let session = db.current_user().unwrap().unwrap();
    assert_eq!(session.username, "fan");
}

#[test]
fn test_persisted_blobs_keep_original_layout() {
    let mut db = create_test_db();
    let alpha = add_team(&mut db, "Alpha");
    let beta = add_team(&mut db, "Beta");
    let m = schedule(&mut db, &alpha, &beta, -2);
    db.complete_match(m.id, MatchOutcome::Winner("Alpha".into()), 18_000)
        .unwrap();

    let dump = db.export_data().unwrap();
    let stored = &dump["matches"][0];

    // camelCase fields, result as a bare team-name string
    assert_eq!(stored["team1Id"], 1);
    assert_eq!(stored["ticketPrice"], 500);
    assert_eq!(stored["status"], "completed");
    assert_eq!(stored["result"], "Alpha");
}
