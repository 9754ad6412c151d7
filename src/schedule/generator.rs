use std::collections::HashSet;
use std::hash::Hash;

use crate::config::settings::ScheduleSettings;

use super::types::{Fixture, ScheduleError, Tour};

/// One single round-robin pass over the field. Holds the real fixtures of
/// a round plus the team that drew the bye, if any.
struct Round<T> {
    fixtures: Vec<Fixture<T>>,
    idle: Option<T>,
}

/// Builds a full double round-robin schedule with the circle method.
///
/// Every pair of teams meets exactly twice, once hosting and once
/// visiting, and the return fixture of a round directly follows its first
/// leg. The output is fully determined by the order of `participants`.
pub fn generate_schedule<T>(
    participants: &[T],
    settings: &ScheduleSettings,
) -> Result<Vec<Tour<T>>, ScheduleError>
where
    T: Clone + Eq + Hash,
{
    validate_participants(participants)?;

    let rounds = build_single_rounds(participants);
    Ok(interleave_legs(rounds, settings))
}

fn validate_participants<T>(participants: &[T]) -> Result<(), ScheduleError>
where
    T: Eq + Hash,
{
    if participants.len() < 2 {
        return Err(ScheduleError::NotEnoughTeams(participants.len()));
    }

    let mut seen = HashSet::with_capacity(participants.len());
    for participant in participants {
        if !seen.insert(participant) {
            return Err(ScheduleError::DuplicateTeam);
        }
    }

    Ok(())
}

/// Circle method over seat indices. Seat 0 stays fixed while the remaining
/// seats rotate one step to the right each round. An odd field gets a
/// phantom seat whose pairings become byes.
fn build_single_rounds<T: Clone>(participants: &[T]) -> Vec<Round<T>> {
    let real = participants.len();
    let bye = real;
    let seats = if real % 2 == 0 { real } else { real + 1 };

    let mut rotating: Vec<usize> = (1..seats).collect();
    let mut rounds = Vec::with_capacity(seats - 1);

    for _ in 0..seats - 1 {
        let mut pairs = Vec::with_capacity(seats / 2);
        pairs.push((0, rotating[seats - 2]));
        for i in 0..(seats - 2) / 2 {
            pairs.push((rotating[i], rotating[seats - 3 - i]));
        }

        let mut fixtures = Vec::with_capacity(pairs.len());
        let mut idle = None;
        for (home, guest) in pairs {
            if home == bye {
                idle = Some(participants[guest].clone());
            } else if guest == bye {
                idle = Some(participants[home].clone());
            } else {
                fixtures.push(Fixture {
                    home: participants[home].clone(),
                    guest: participants[guest].clone(),
                });
            }
        }

        rounds.push(Round { fixtures, idle });
        rotating.rotate_right(1);
    }

    rounds
}

/// Expands each single round into two consecutive tours, the second with
/// home and guest swapped, and numbers them from 1.
fn interleave_legs<T: Clone>(rounds: Vec<Round<T>>, settings: &ScheduleSettings) -> Vec<Tour<T>> {
    let mut tours = Vec::with_capacity(rounds.len() * 2);

    for round in rounds {
        let return_fixtures: Vec<Fixture<T>> = round
            .fixtures
            .iter()
            .map(|fixture| Fixture {
                home: fixture.guest.clone(),
                guest: fixture.home.clone(),
            })
            .collect();

        let idle = if settings.show_idle_team {
            round.idle
        } else {
            None
        };

        tours.push(Tour {
            number: tours.len() as u32 + 1,
            fixtures: round.fixtures,
            idle: idle.clone(),
        });
        tours.push(Tour {
            number: tours.len() as u32 + 1,
            fixtures: return_fixtures,
            idle,
        });
    }

    tours
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::*;

    fn team_names(count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("Team {i}")).collect()
    }

    fn assert_schedule_is_valid(teams: &[String], tours: &[Tour<String>]) {
        let count = teams.len();
        let expected_tours = if count % 2 == 0 {
            2 * (count - 1)
        } else {
            2 * count
        };
        assert_eq!(tours.len(), expected_tours);

        let total_fixtures: usize = tours.iter().map(|tour| tour.fixtures.len()).sum();
        assert_eq!(total_fixtures, count * (count - 1));

        for (index, tour) in tours.iter().enumerate() {
            assert_eq!(tour.number, index as u32 + 1);

            let mut busy = HashSet::new();
            for fixture in &tour.fixtures {
                assert_ne!(fixture.home, fixture.guest);
                assert!(busy.insert(fixture.home.clone()));
                assert!(busy.insert(fixture.guest.clone()));
            }
        }

        let mut encounters: HashMap<(String, String), u32> = HashMap::new();
        for tour in tours {
            for fixture in &tour.fixtures {
                *encounters
                    .entry((fixture.home.clone(), fixture.guest.clone()))
                    .or_insert(0) += 1;
            }
        }
        assert_eq!(encounters.len(), count * (count - 1));
        assert!(encounters.values().all(|&times| times == 1));
    }

    #[test]
    fn test_two_teams_play_home_and_away() {
        let tours = generate_schedule(&["X", "Y"], &ScheduleSettings::default()).unwrap();

        assert_eq!(tours.len(), 2);
        assert_eq!(tours[0].number, 1);
        assert_eq!(
            tours[0].fixtures,
            vec![Fixture {
                home: "X",
                guest: "Y"
            }]
        );
        assert_eq!(tours[1].number, 2);
        assert_eq!(
            tours[1].fixtures,
            vec![Fixture {
                home: "Y",
                guest: "X"
            }]
        );
    }

    #[test]
    fn test_three_teams_get_one_fixture_per_tour() {
        let tours = generate_schedule(&["A", "B", "C"], &ScheduleSettings::default()).unwrap();

        assert_eq!(tours.len(), 6);
        for tour in &tours {
            assert_eq!(tour.fixtures.len(), 1);
            assert!(tour.idle.is_none());
        }
    }

    #[test]
    fn test_return_leg_directly_follows_first_leg() {
        let teams = team_names(6);
        let tours = generate_schedule(&teams, &ScheduleSettings::default()).unwrap();

        for pair in tours.chunks(2) {
            let mirrored: Vec<Fixture<String>> = pair[0]
                .fixtures
                .iter()
                .map(|fixture| Fixture {
                    home: fixture.guest.clone(),
                    guest: fixture.home.clone(),
                })
                .collect();
            assert_eq!(pair[1].fixtures, mirrored);
        }
    }

    #[test]
    fn test_counts_and_coverage_for_small_fields() {
        for count in 2..=10 {
            let teams = team_names(count);
            let tours = generate_schedule(&teams, &ScheduleSettings::default()).unwrap();
            assert_schedule_is_valid(&teams, &tours);
        }
    }

    #[test]
    fn test_rejects_too_few_teams() {
        let settings = ScheduleSettings::default();

        let empty: [&str; 0] = [];
        assert_eq!(
            generate_schedule(&empty, &settings),
            Err(ScheduleError::NotEnoughTeams(0))
        );
        assert_eq!(
            generate_schedule(&["A"], &settings),
            Err(ScheduleError::NotEnoughTeams(1))
        );
    }

    #[test]
    fn test_rejects_duplicate_teams() {
        assert_eq!(
            generate_schedule(&["A", "B", "A"], &ScheduleSettings::default()),
            Err(ScheduleError::DuplicateTeam)
        );
    }

    #[test]
    fn test_idle_team_exposed_when_enabled() {
        let settings = ScheduleSettings {
            show_idle_team: true,
        };

        let tours = generate_schedule(&["A", "B", "C"], &settings).unwrap();
        let idle: Vec<Option<&str>> = tours.iter().map(|tour| tour.idle).collect();
        assert_eq!(
            idle,
            vec![
                Some("A"),
                Some("A"),
                Some("B"),
                Some("B"),
                Some("C"),
                Some("C")
            ]
        );

        let tours = generate_schedule(&["A", "B", "C", "D"], &settings).unwrap();
        assert!(tours.iter().all(|tour| tour.idle.is_none()));
    }

    #[test]
    fn test_schedule_is_deterministic_for_a_given_order() {
        let teams = team_names(5);
        let first = generate_schedule(&teams, &ScheduleSettings::default()).unwrap();
        let second = generate_schedule(&teams, &ScheduleSettings::default()).unwrap();
        assert_eq!(first, second);

        let mut reversed = teams.clone();
        reversed.reverse();
        let third = generate_schedule(&reversed, &ScheduleSettings::default()).unwrap();
        assert_ne!(first, third);
    }

    proptest! {
        #[test]
        fn prop_schedules_are_valid_for_any_field(
            names in proptest::collection::hash_set("[a-z]{3,8}", 2..12)
        ) {
            let teams: Vec<String> = names.into_iter().collect();
            let tours = generate_schedule(&teams, &ScheduleSettings::default()).unwrap();
            assert_schedule_is_valid(&teams, &tours);
        }
    }
}
