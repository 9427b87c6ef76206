//! Points-table derivation from completed match results.
//!
//! The computation is a pure view over the teams and matches it is given:
//! it never reads the store and never writes tallies back to the Team
//! records. Stored team counters are maintained separately by admin
//! actions and may diverge from what this module derives.

use crate::store::{Match, MatchOutcome, MatchStatus, Team, TeamId};
use serde::Serialize;


/// One ranked line of a points table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    pub rank: usize,
    pub team_id: TeamId,
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

/// Derive the ranked table for one sport's teams from its matches.
///
/// Only matches with status `completed` count. A team is credited a win
/// when the recorded outcome names it, a draw on a drawn result, and a
/// loss otherwise (including completed matches with no recorded result).
/// Goal totals are taken from the stored team counters; match records
/// carry no score data to re-derive them from.
///
/// Ordering: points, then goal difference, then goals for, all
/// descending. The sort is stable, so fully tied teams keep their input
/// (team-id) order. Ranks are 1-based positions after the sort.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = teams
        .iter()
        .map(|team| {
            let mut played = 0;
            let mut won = 0;
            let mut drawn = 0;
            let mut lost = 0;

            for m in matches {
                if m.status != MatchStatus::Completed {
                    continue;
                }
                if m.team1_id != team.id && m.team2_id != team.id {
                    continue;
                }
                played += 1;
                match &m.result {
                    Some(MatchOutcome::Winner(name)) if *name == team.name => won += 1,
                    Some(MatchOutcome::Draw) => drawn += 1,
                    _ => lost += 1,
                }
            }

            StandingsRow {
                rank: 0,
                team_id: team.id,
                team: team.name.clone(),
                played,
                won,
                drawn,
                lost,
                goals_for: team.goals_for,
                goals_against: team.goals_against,
                goal_difference: i64::from(team.goals_for) - i64::from(team.goals_against),
                points: won * 3 + drawn,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
    });

    for (index, row) in rows.iter_mut().enumerate() {
        row.rank = index + 1;
    }
    rows
}
