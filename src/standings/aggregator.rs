use std::collections::HashMap;
use std::hash::Hash;

use super::types::{MatchResult, StandingsRow};

/// Builds a ranked standings table from a set of match results.
///
/// Matches missing either score are skipped entirely. A win is worth
/// three points and a draw one. Teams are ranked by points, then goal
/// difference, then goals scored; teams still tied after that keep the
/// order in which they first appeared in `results`.
pub fn build_standings<T>(results: &[MatchResult<T>]) -> Vec<StandingsRow<T>>
where
    T: Clone + Eq + Hash,
{
    let mut rows: Vec<StandingsRow<T>> = Vec::new();
    let mut index: HashMap<T, usize> = HashMap::new();

    for result in results {
        let (Some(home_score), Some(guest_score)) = (result.home_score, result.guest_score)
        else {
            continue;
        };

        record_side(&mut rows, &mut index, &result.home, home_score, guest_score);
        record_side(&mut rows, &mut index, &result.guest, guest_score, home_score);
    }

    for row in &mut rows {
        row.points = 3 * row.wins + row.draws;
        row.goal_difference = row.goals_scored - row.goals_conceded;
    }

    rank(&mut rows);
    rows
}

fn record_side<T>(
    rows: &mut Vec<StandingsRow<T>>,
    index: &mut HashMap<T, usize>,
    team: &T,
    scored: i64,
    conceded: i64,
) where
    T: Clone + Eq + Hash,
{
    let position = *index.entry(team.clone()).or_insert_with(|| {
        rows.push(StandingsRow::new(team.clone()));
        rows.len() - 1
    });

    let row = &mut rows[position];
    row.played += 1;
    row.goals_scored += scored;
    row.goals_conceded += conceded;

    if scored > conceded {
        row.wins += 1;
    } else if scored == conceded {
        row.draws += 1;
    } else {
        row.losses += 1;
    }
}

fn rank<T>(rows: &mut [StandingsRow<T>]) {
    // The sort is stable, so teams tied on every criterion keep their
    // first-encounter order.
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_scored.cmp(&a.goals_scored))
    });
}
