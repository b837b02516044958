use inkblog_core::db::open_session_db_in_memory;
use inkblog_core::{
    Credentials, FixedCredentialVerifier, LoginOutcome, SessionGate, SessionRepository,
    SessionState, SqliteSessionRepository,
};

#[test]
fn accepted_login_persists_the_pair_and_authenticates() {
    let mut conn = open_session_db_in_memory().unwrap();
    let store = SqliteSessionRepository::new(&mut conn);
    let mut gate = SessionGate::new(FixedCredentialVerifier::default(), store).unwrap();
    assert_eq!(gate.state(), &SessionState::Anonymous);

    let outcome = gate.login("admin", "admin").unwrap();
    assert_eq!(
        outcome,
        LoginOutcome::Accepted {
            redirect_to: "/blog-list"
        }
    );
    assert_eq!(gate.state(), &SessionState::Authenticated);
    assert_eq!(gate.error_message(), None);

    let (username, password): (String, String) = conn
        .query_row(
            "SELECT
                (SELECT value FROM session_entries WHERE key = 'username'),
                (SELECT value FROM session_entries WHERE key = 'password');",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(username, "admin");
    assert_eq!(password, "admin");
}

#[test]
fn rejected_login_sets_the_inline_message_and_writes_nothing() {
    let mut conn = open_session_db_in_memory().unwrap();
    let store = SqliteSessionRepository::new(&mut conn);
    let mut gate = SessionGate::new(FixedCredentialVerifier::default(), store).unwrap();

    let outcome = gate.login("admin", "wrong").unwrap();
    let LoginOutcome::Rejected { message } = outcome else {
        panic!("mismatched credentials must be rejected");
    };
    assert!(!message.is_empty());
    assert_eq!(gate.error_message(), Some(message.as_str()));
    assert!(matches!(gate.state(), SessionState::LoginRejected { .. }));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM session_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 0);
}

#[test]
fn rejection_then_acceptance_recovers() {
    let mut conn = open_session_db_in_memory().unwrap();
    let store = SqliteSessionRepository::new(&mut conn);
    let mut gate = SessionGate::new(FixedCredentialVerifier::default(), store).unwrap();

    gate.login("guest", "guest").unwrap();
    assert!(matches!(gate.state(), SessionState::LoginRejected { .. }));

    gate.login("admin", "admin").unwrap();
    assert_eq!(gate.state(), &SessionState::Authenticated);
    assert_eq!(gate.error_message(), None);
}

#[test]
fn save_marker_overwrites_the_previous_pair_wholesale() {
    let mut conn = open_session_db_in_memory().unwrap();
    let mut store = SqliteSessionRepository::new(&mut conn);

    store
        .save_marker(&Credentials::new("older", "marker"))
        .unwrap();
    store
        .save_marker(&Credentials::new("admin", "admin"))
        .unwrap();

    let marker = store.load_marker().unwrap().unwrap();
    assert_eq!(marker, Credentials::new("admin", "admin"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM session_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 2);
}

#[test]
fn existing_marker_restores_the_authenticated_state() {
    let mut conn = open_session_db_in_memory().unwrap();
    {
        let mut store = SqliteSessionRepository::new(&mut conn);
        store
            .save_marker(&Credentials::new("admin", "admin"))
            .unwrap();
    }

    let store = SqliteSessionRepository::new(&mut conn);
    let gate = SessionGate::new(FixedCredentialVerifier::default(), store).unwrap();
    assert_eq!(gate.state(), &SessionState::Authenticated);
}

#[test]
fn missing_half_of_the_marker_counts_as_no_marker() {
    let mut conn = open_session_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO session_entries (key, value) VALUES ('username', 'admin');",
        [],
    )
    .unwrap();

    let store = SqliteSessionRepository::new(&mut conn);
    assert_eq!(store.load_marker().unwrap(), None);
}
