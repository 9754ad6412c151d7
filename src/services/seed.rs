use anyhow::{bail, Result};
use colored::Colorize;
use log::info;

use crate::auth;
use crate::config::settings::AppConfig;
use crate::database::{self, DbConn};
use crate::schedule;
use crate::standings::{self, MatchResult};

const DEMO_USERNAME: &str = "demo";
const DEMO_PASSWORD: &str = "demo-password";

const DEMO_TEAMS: [(&str, &str, &str); 6] = [
    ("Northbridge United", "NBU", "Northbridge"),
    ("Harbour Rovers", "HRV", "Port Ellen"),
    ("Saltmarsh Athletic", "SMA", "Saltmarsh"),
    ("Ironfield Wanderers", "IFW", "Ironfield"),
    ("Kingsmead City", "KMC", "Kingsmead"),
    ("Westcliff Albion", "WCA", "Westcliff"),
];

// Results applied to the opening tours, cycled in order.
const DEMO_SCORES: [(i64, i64); 7] = [(2, 1), (0, 0), (3, 1), (1, 2), (1, 1), (4, 0), (0, 1)];
const SCORED_TOURS: i64 = 4;

/// Loads a complete demo league into the database: one account, six
/// teams, a materialized schedule and results for the opening tours.
pub struct SeedService {
    config: AppConfig,
}

impl SeedService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<()> {
        let db_path = database::default_database_path();
        let pool = database::create_pool(&db_path)?;
        let mut conn = database::get_connection(&pool)?;
        database::setup::initialize_schema(&mut conn)?;

        if database::users::find_by_username(&mut conn, DEMO_USERNAME)?.is_some() {
            bail!("Database already contains the demo account, run `setup` first to reset it");
        }

        info!("Seeding demo league into {}", db_path);

        let manager_id = self.seed_account(&mut conn)?;
        let team_ids = self.seed_teams(&mut conn, manager_id)?;
        let tournament_id = self.seed_tournament(&mut conn, manager_id, &team_ids)?;
        let matches_created = self.materialize_schedule(&mut conn, tournament_id, &team_ids)?;
        let results_recorded = self.record_opening_results(&mut conn, tournament_id)?;

        info!(
            "Seeded {} teams, {} matches, {} results",
            team_ids.len(),
            matches_created,
            results_recorded
        );

        self.print_standings(&mut conn, tournament_id)?;

        println!();
        println!("{}", "Demo league ready.".green().bold());
        println!(
            "Log in with {} / {}",
            DEMO_USERNAME.bold(),
            DEMO_PASSWORD.bold()
        );
        Ok(())
    }

    fn seed_account(&self, conn: &mut DbConn) -> Result<i64> {
        let password_hash = auth::hash_password(DEMO_PASSWORD, self.config.auth.bcrypt_cost)?;
        let user = database::users::insert_user(conn, DEMO_USERNAME, &password_hash)?;
        let manager = database::managers::insert_manager(
            conn,
            user.id,
            "Alex",
            "Ferguson",
            None,
            Some("demo@example.com"),
            None,
        )?;
        Ok(manager.id)
    }

    fn seed_teams(&self, conn: &mut DbConn, manager_id: i64) -> Result<Vec<i64>> {
        let mut team_ids = Vec::with_capacity(DEMO_TEAMS.len());
        for (name, code, city) in DEMO_TEAMS {
            let team = database::teams::insert_team(
                conn,
                manager_id,
                name,
                code,
                Some("England"),
                Some(city),
                None,
            )?;
            team_ids.push(team.id);
        }
        Ok(team_ids)
    }

    fn seed_tournament(
        &self,
        conn: &mut DbConn,
        manager_id: i64,
        team_ids: &[i64],
    ) -> Result<i64> {
        let kind = match database::tournament_types::find_by_name(conn, "League")? {
            Some(existing) => existing,
            None => database::tournament_types::insert_tournament_type(
                conn,
                "League",
                Some("Double round-robin league"),
            )?,
        };

        let tournament = database::tournaments::insert_tournament(
            conn,
            manager_id,
            kind.id,
            "Demo League",
            Some("2026/27"),
            None,
        )?;

        for team_id in team_ids {
            database::tournament_teams::enroll_team(conn, tournament.id, *team_id)?;
        }

        Ok(tournament.id)
    }

    fn materialize_schedule(
        &self,
        conn: &mut DbConn,
        tournament_id: i64,
        team_ids: &[i64],
    ) -> Result<usize> {
        let tours = schedule::generate_schedule(team_ids, &self.config.schedule)?;

        let mut matches_created = 0;
        for tour in &tours {
            for fixture in &tour.fixtures {
                database::matches::insert_match(
                    conn,
                    tournament_id,
                    i64::from(tour.number),
                    None,
                    fixture.home,
                    fixture.guest,
                    None,
                    None,
                )?;
                matches_created += 1;
            }
        }

        Ok(matches_created)
    }

    fn record_opening_results(&self, conn: &mut DbConn, tournament_id: i64) -> Result<usize> {
        let rows = database::matches::list_by_tournament(conn, tournament_id)?;
        let mut scores = DEMO_SCORES.iter().cycle();

        let mut results_recorded = 0;
        for row in rows.iter().filter(|row| row.tour_number <= SCORED_TOURS) {
            let (home_score, guest_score) = scores.next().copied().unwrap_or((1, 1));
            database::matches::update_result(
                conn,
                row.id,
                Some(home_score),
                Some(guest_score),
                None,
            )?;
            results_recorded += 1;
        }

        Ok(results_recorded)
    }

    fn print_standings(&self, conn: &mut DbConn, tournament_id: i64) -> Result<()> {
        let rows = database::matches::list_by_tournament(conn, tournament_id)?;
        let results: Vec<MatchResult<i64>> = rows
            .iter()
            .map(|row| MatchResult {
                home: row.home_team_id,
                guest: row.guest_team_id,
                home_score: row.home_score,
                guest_score: row.guest_score,
            })
            .collect();
        let table = standings::build_standings(&results);

        println!();
        println!(
            "{}",
            format!(
                "{:>3}  {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
                "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
            )
            .bold()
        );

        for (position, row) in table.iter().enumerate() {
            let name = database::teams::find_by_id(conn, row.team)?
                .map(|team| team.name)
                .unwrap_or_else(|| format!("Team {}", row.team));

            println!(
                "{:>3}  {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
                position + 1,
                name,
                row.played,
                row.wins,
                row.draws,
                row.losses,
                row.goals_scored,
                row.goals_conceded,
                row.goal_difference,
                row.points
            );
        }

        Ok(())
    }
}
