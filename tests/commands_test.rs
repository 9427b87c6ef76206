//! Integration tests for command-layer validation
//!
//! The store appends whatever it is given; these tests pin down the
//! checks the command layer performs before calling it.

use fanconnect::commands::{auth, bookings, matches, roster};
use fanconnect::store::{LeagueDatabase, MatchId, Role, TeamId};
use fanconnect::FanConnectError;

fn seeded_db() -> LeagueDatabase {
    let mut db = LeagueDatabase::open_in_memory().unwrap();
    db.initialize().unwrap();
    db
}

#[test]
fn test_register_rejects_duplicate_username() {
    let mut db = seeded_db();

    // "admin" is a seeded default account
    let err = auth::handle_register(
        &mut db,
        "admin".to_string(),
        "other@example.com".to_string(),
        "pw".to_string(),
        Role::User,
    )
    .unwrap_err();

    assert!(matches!(err, FanConnectError::DuplicateUsername { .. }));
    assert_eq!(db.users().unwrap().len(), 3);
}

#[test]
fn test_login_with_bad_credentials_fails() {
    let mut db = seeded_db();
    let err = auth::handle_login(&mut db, "admin".to_string(), "wrong".to_string()).unwrap_err();
    assert!(matches!(err, FanConnectError::InvalidCredentials));
}

#[test]
fn test_twelfth_player_is_rejected() {
    let mut db = seeded_db();
    // Seeded teams carry a full squad of 11
    let team = db.teams().unwrap()[0].clone();

    let err = roster::handle_add_player(
        &mut db,
        "One Too Many".to_string(),
        team.id,
        "Batsman".to_string(),
        Some(21),
        "Indian".to_string(),
    )
    .unwrap_err();

    assert!(matches!(err, FanConnectError::TeamFull { .. }));
    assert_eq!(db.players_by_team(team.id).unwrap().len(), 11);
}

#[test]
fn test_player_position_must_fit_the_sport() {
    let mut db = seeded_db();
    let team = db.teams().unwrap()[0].clone();
    db.delete_player(db.players_by_team(team.id).unwrap()[0].id)
        .unwrap();

    // A Cricket team cannot sign a Goalkeeper
    let err = roster::handle_add_player(
        &mut db,
        "Wrong Game".to_string(),
        team.id,
        "Goalkeeper".to_string(),
        Some(24),
        "Indian".to_string(),
    )
    .unwrap_err();

    assert!(matches!(err, FanConnectError::InvalidPosition { .. }));
}

#[test]
fn test_match_needs_two_different_teams() {
    let mut db = seeded_db();
    let team = db.teams().unwrap()[0].clone();

    let err = matches::handle_schedule(
        &mut db,
        team.sport.clone(),
        team.id,
        team.id,
        "2026-10-01 19:00".to_string(),
        "Eden Gardens, Kolkata".to_string(),
    )
    .unwrap_err();

    assert!(matches!(err, FanConnectError::SameTeams));
}

#[test]
fn test_match_teams_must_share_the_sport() {
    let mut db = seeded_db();
    let teams = db.teams().unwrap();
    let cricket = teams.iter().find(|t| t.sport == "Cricket").unwrap();
    let football = teams.iter().find(|t| t.sport == "Football").unwrap();

    let err = matches::handle_schedule(
        &mut db,
        "Cricket".to_string(),
        cricket.id,
        football.id,
        "2026-10-01".to_string(),
        "Eden Gardens, Kolkata".to_string(),
    )
    .unwrap_err();

    assert!(matches!(err, FanConnectError::TeamNotInSport { .. }));
}

#[test]
fn test_unknown_sport_is_reported() {
    let db = seeded_db();
    let err = roster::handle_teams(&db, Some("Curling".to_string())).unwrap_err();
    assert!(matches!(err, FanConnectError::UnknownSport { .. }));
}

#[test]
fn test_booking_requires_login() {
    let mut db = seeded_db();
    let match_id = db.matches().unwrap()[0].id;

    let err = bookings::handle_book(&mut db, match_id, 2).unwrap_err();
    assert!(matches!(err, FanConnectError::NotLoggedIn));
}

#[test]
fn test_all_bookings_view_is_admin_only() {
    let mut db = seeded_db();
    auth::handle_login(&mut db, "user1".to_string(), "user123".to_string()).unwrap();

    let err = bookings::handle_bookings(&db, true).unwrap_err();
    assert!(matches!(err, FanConnectError::Forbidden { .. }));
}

#[test]
fn test_booking_flow_end_to_end() {
    let mut db = seeded_db();
    auth::handle_login(&mut db, "user1".to_string(), "user123".to_string()).unwrap();

    let match_id = db.matches().unwrap()[0].id;
    bookings::handle_book(&mut db, match_id, 4).unwrap();

    let user = db.current_user().unwrap().unwrap();
    let booked = db.bookings_by_user(user.id).unwrap();
    assert_eq!(booked.len(), 1);
    assert_eq!(booked[0].total_amount, 2000);
}

#[test]
fn test_completing_winner_outside_match_is_rejected() {
    let mut db = seeded_db();
    let m = db
        .matches()
        .unwrap()
        .iter()
        .find(|m| m.result.is_none())
        .unwrap()
        .clone();
    let outsider = db
        .teams()
        .unwrap()
        .iter()
        .find(|t| t.id != m.team1_id && t.id != m.team2_id)
        .unwrap()
        .id;

    let err = matches::handle_complete(&mut db, m.id, Some(outsider), false, None).unwrap_err();
    assert!(matches!(err, FanConnectError::TeamNotInMatch { .. }));
}

#[test]
fn test_completing_unknown_match_is_a_noop() {
    let mut db = seeded_db();
    let before = db.matches().unwrap().len();

    matches::handle_complete(&mut db, MatchId::new(9_999), None, true, None).unwrap();
    assert_eq!(db.matches().unwrap().len(), before);
}

#[test]
fn test_delete_unknown_team_is_a_noop() {
    let mut db = seeded_db();
    let before = db.teams().unwrap().len();

    roster::handle_delete_team(&mut db, TeamId::new(9_999)).unwrap();
    assert_eq!(db.teams().unwrap().len(), before);
}
