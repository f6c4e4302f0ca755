use rusqlite::Connection;
use userlookup_core::db::open_sqlite_in_memory;
use userlookup_core::{RepoError, SqliteUserRepository, UserRepository, UserService};

fn seeded_conn(rows: &[(i64, &str)]) -> Connection {
    let conn = open_sqlite_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE users (id INTEGER PRIMARY KEY, username TEXT NOT NULL);")
        .unwrap();
    for (id, username) in rows {
        conn.execute(
            "INSERT INTO users (id, username) VALUES (?1, ?2);",
            rusqlite::params![id, username],
        )
        .unwrap();
    }
    conn
}

#[test]
fn get_user_returns_alice_for_id_one() {
    let conn = seeded_conn(&[(1, "alice")]);
    let mut service = UserService::new(SqliteUserRepository::new(&conn));

    assert_eq!(service.get_user(1).unwrap(), "alice");
}

#[test]
fn get_user_for_absent_id_is_not_found() {
    let conn = seeded_conn(&[(1, "alice")]);
    let mut service = UserService::new(SqliteUserRepository::new(&conn));

    let err = service.get_user(42).unwrap_err();
    match err {
        RepoError::NotFound(id) => assert_eq!(id, 42),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn stored_username_is_returned_byte_for_byte() {
    let names = [
        (10, "Alice"),
        (11, "  padded\t"),
        (12, "Zoë 👩‍💻 Ünïcode"),
        (13, "line\nbreak"),
        (14, ""),
    ];
    let conn = seeded_conn(&names);
    let mut repo = SqliteUserRepository::new(&conn);

    for (id, expected) in names {
        assert_eq!(repo.get_user_by_id(id).unwrap().as_bytes(), expected.as_bytes());
    }
}

#[test]
fn out_of_range_ids_are_passed_through() {
    let conn = seeded_conn(&[(-3, "negative"), (i64::MAX, "max")]);
    let mut repo = SqliteUserRepository::new(&conn);

    assert_eq!(repo.get_user_by_id(-3).unwrap(), "negative");
    assert_eq!(repo.get_user_by_id(i64::MAX).unwrap(), "max");
    assert!(repo.get_user_by_id(i64::MIN).unwrap_err().is_not_found());
}

#[test]
fn service_and_repository_agree_for_every_input() {
    let conn = seeded_conn(&[(1, "alice"), (2, "bob")]);
    let mut repo = SqliteUserRepository::new(&conn);
    let mut service = UserService::new(SqliteUserRepository::new(&conn));

    for id in [1, 2, 0, -1, 42, i64::MIN, i64::MAX] {
        let direct = repo.get_user_by_id(id);
        let delegated = service.get_user(id);
        match (direct, delegated) {
            (Ok(left), Ok(right)) => assert_eq!(left, right),
            (Err(left), Err(right)) => {
                assert_eq!(left.is_not_found(), right.is_not_found());
                assert_eq!(left.to_string(), right.to_string());
            }
            (left, right) => panic!("diverged for id {id}: {left:?} vs {right:?}"),
        }
    }
}

#[test]
fn service_and_repository_agree_on_query_errors() {
    let conn = open_sqlite_in_memory().unwrap();
    let mut repo = SqliteUserRepository::new(&conn);
    let mut service = UserService::new(SqliteUserRepository::new(&conn));

    let direct = repo.get_user_by_id(1).unwrap_err();
    let delegated = service.get_user(1).unwrap_err();
    assert!(matches!(direct, RepoError::Query(_)));
    assert!(matches!(delegated, RepoError::Query(_)));
    assert_eq!(direct.to_string(), delegated.to_string());
}
