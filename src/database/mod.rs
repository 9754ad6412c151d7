pub mod connection;
pub mod managers;
pub mod matches;
pub mod models;
pub mod setup;
pub mod teams;
pub mod tournament_teams;
pub mod tournament_types;
pub mod tournaments;
pub mod users;

pub use connection::{
    create_memory_pool, create_pool, default_database_path, get_connection, DbConn, DbPool,
};
pub use models::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn test_conn() -> (DbPool, DbConn) {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();
        setup::initialize_schema(&mut conn).unwrap();
        (pool, conn)
    }

    fn seed_manager(conn: &mut DbConn) -> Manager {
        let user = users::insert_user(conn, "boss", "not-a-real-hash").unwrap();
        managers::insert_manager(conn, user.id, "Pat", "Morgan", None, None, None).unwrap()
    }

    #[test]
    fn test_initialize_schema_is_idempotent() {
        let (_pool, mut conn) = test_conn();
        setup::initialize_schema(&mut conn).unwrap();
        setup::initialize_schema(&mut conn).unwrap();
    }

    #[test]
    fn test_reset_database_clears_rows() {
        let (_pool, mut conn) = test_conn();
        users::insert_user(&mut conn, "gone", "hash").unwrap();

        setup::reset_database(&mut conn).unwrap();

        assert!(users::find_by_username(&mut conn, "gone").unwrap().is_none());
    }

    #[test]
    fn test_user_roundtrip_and_active_flag() {
        let (_pool, mut conn) = test_conn();

        let user = users::insert_user(&mut conn, "alice", "hash").unwrap();
        assert!(user.is_active);

        let found = users::find_by_username(&mut conn, "alice").unwrap().unwrap();
        assert_eq!(found.id, user.id);

        let updated = users::set_active(&mut conn, user.id, false).unwrap().unwrap();
        assert!(!updated.is_active);
        assert!(!users::find_by_id(&mut conn, user.id).unwrap().unwrap().is_active);
    }

    #[test]
    fn test_duplicate_username_is_rejected() {
        let (_pool, mut conn) = test_conn();

        users::insert_user(&mut conn, "taken", "hash").unwrap();
        assert!(users::insert_user(&mut conn, "taken", "hash").is_err());
    }

    #[test]
    fn test_manager_lookup_by_user() {
        let (_pool, mut conn) = test_conn();

        let manager = seed_manager(&mut conn);
        let found = managers::find_by_user_id(&mut conn, manager.user_id)
            .unwrap()
            .unwrap();
        assert_eq!(found.id, manager.id);
        assert_eq!(found.first_name, "Pat");
    }

    #[test]
    fn test_team_crud() {
        let (_pool, mut conn) = test_conn();
        let manager = seed_manager(&mut conn);

        let team = teams::insert_team(
            &mut conn,
            manager.id,
            "Harbour Rovers",
            "HRV",
            Some("Scotland"),
            Some("Port Ellen"),
            None,
        )
        .unwrap();

        let changes = TeamChanges {
            city: Some("Glasgow".to_string()),
            ..TeamChanges::default()
        };
        let updated = teams::update_team(&mut conn, team.id, &changes)
            .unwrap()
            .unwrap();
        assert_eq!(updated.city.as_deref(), Some("Glasgow"));
        assert_eq!(updated.name, "Harbour Rovers");

        assert!(teams::delete_team(&mut conn, team.id).unwrap());
        assert!(teams::find_by_id(&mut conn, team.id).unwrap().is_none());
        assert!(!teams::delete_team(&mut conn, team.id).unwrap());
    }

    #[test]
    fn test_enrollment_order_is_preserved() {
        let (_pool, mut conn) = test_conn();
        let manager = seed_manager(&mut conn);

        let kind = tournament_types::insert_tournament_type(&mut conn, "League", None).unwrap();
        let tournament =
            tournaments::insert_tournament(&mut conn, manager.id, kind.id, "Cup", None, None)
                .unwrap();

        let mut ids = Vec::new();
        for name in ["Crows", "Arrows", "Bears"] {
            let team =
                teams::insert_team(&mut conn, manager.id, name, "XXX", None, None, None).unwrap();
            tournament_teams::enroll_team(&mut conn, tournament.id, team.id).unwrap();
            ids.push(team.id);
        }

        let enrolled = teams::list_by_tournament(&mut conn, tournament.id).unwrap();
        let enrolled_ids: Vec<i64> = enrolled.iter().map(|team| team.id).collect();
        assert_eq!(enrolled_ids, ids);
    }

    #[test]
    fn test_duplicate_enrollment_is_rejected() {
        let (_pool, mut conn) = test_conn();
        let manager = seed_manager(&mut conn);

        let kind = tournament_types::insert_tournament_type(&mut conn, "League", None).unwrap();
        let tournament =
            tournaments::insert_tournament(&mut conn, manager.id, kind.id, "Cup", None, None)
                .unwrap();
        let team = teams::insert_team(&mut conn, manager.id, "Crows", "CRW", None, None, None)
            .unwrap();

        tournament_teams::enroll_team(&mut conn, tournament.id, team.id).unwrap();
        assert!(tournament_teams::enroll_team(&mut conn, tournament.id, team.id).is_err());
        assert!(tournament_teams::find_enrollment(&mut conn, tournament.id, team.id)
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_match_result_update() {
        let (_pool, mut conn) = test_conn();
        let manager = seed_manager(&mut conn);

        let kind = tournament_types::insert_tournament_type(&mut conn, "League", None).unwrap();
        let tournament =
            tournaments::insert_tournament(&mut conn, manager.id, kind.id, "Cup", None, None)
                .unwrap();
        let home = teams::insert_team(&mut conn, manager.id, "Crows", "CRW", None, None, None)
            .unwrap();
        let guest = teams::insert_team(&mut conn, manager.id, "Bears", "BRS", None, None, None)
            .unwrap();

        let inserted = matches::insert_match(
            &mut conn,
            tournament.id,
            1,
            None,
            home.id,
            guest.id,
            None,
            None,
        )
        .unwrap();
        assert!(inserted.home_score.is_none());

        let updated = matches::update_result(&mut conn, inserted.id, Some(2), Some(1), None)
            .unwrap()
            .unwrap();
        assert_eq!(updated.home_score, Some(2));
        assert_eq!(updated.guest_score, Some(1));

        assert_eq!(matches::count_by_tournament(&mut conn, tournament.id).unwrap(), 1);

        let listed = matches::list_by_tournament_with_teams(&mut conn, tournament.id).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].home_team_name, "Crows");
        assert_eq!(listed[0].guest_team_name, "Bears");
    }

    #[test]
    fn test_deleting_tournament_cascades_to_matches_and_enrollments() {
        let (_pool, mut conn) = test_conn();
        let manager = seed_manager(&mut conn);

        let kind = tournament_types::insert_tournament_type(&mut conn, "League", None).unwrap();
        let tournament =
            tournaments::insert_tournament(&mut conn, manager.id, kind.id, "Cup", None, None)
                .unwrap();
        let home = teams::insert_team(&mut conn, manager.id, "Crows", "CRW", None, None, None)
            .unwrap();
        let guest = teams::insert_team(&mut conn, manager.id, "Bears", "BRS", None, None, None)
            .unwrap();
        tournament_teams::enroll_team(&mut conn, tournament.id, home.id).unwrap();
        tournament_teams::enroll_team(&mut conn, tournament.id, guest.id).unwrap();
        matches::insert_match(
            &mut conn,
            tournament.id,
            1,
            None,
            home.id,
            guest.id,
            None,
            None,
        )
        .unwrap();

        assert!(tournaments::delete_tournament(&mut conn, tournament.id).unwrap());

        assert!(matches::list_by_tournament(&mut conn, tournament.id)
            .unwrap()
            .is_empty());
        assert!(tournament_teams::list_by_tournament(&mut conn, tournament.id)
            .unwrap()
            .is_empty());
        assert!(teams::find_by_id(&mut conn, home.id).unwrap().is_some());
    }
}
