use rolodex_core::db::migrations::latest_version;
use rolodex_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn documents_table_is_keyed_by_collection_then_id() {
    let conn = open_db_in_memory().unwrap();
    assert_eq!(schema_version(&conn), latest_version());

    let mut stmt = conn
        .prepare("SELECT name, pk, \"notnull\" FROM pragma_table_info('documents') ORDER BY cid;")
        .unwrap();
    let columns: Vec<(String, i64, bool)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    let key: Vec<(&str, i64)> = columns
        .iter()
        .filter(|(_, pk, _)| *pk > 0)
        .map(|(name, pk, _)| (name.as_str(), *pk))
        .collect();
    assert_eq!(key, vec![("collection", 1), ("id", 2)]);

    let owner = columns.iter().find(|(name, _, _)| name == "owner").unwrap();
    assert!(!owner.2, "owner must be nullable for unowned user records");
}

#[test]
fn owner_listing_index_covers_collection_owner_created_at() {
    let conn = open_db_in_memory().unwrap();

    let mut stmt = conn
        .prepare("SELECT name FROM pragma_index_info('idx_documents_owner') ORDER BY seqno;")
        .unwrap();
    let indexed: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(indexed, vec!["collection", "owner", "created_at"]);
}

#[test]
fn reopening_a_migrated_file_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rolodex.sqlite3");

    let conn = open_db(&path).unwrap();
    conn.execute(
        "INSERT INTO documents (collection, id, owner, body)
         VALUES ('users', 'u1', NULL, '{\"_id\":\"u1\"}');",
        [],
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM documents;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn file_from_newer_build_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    assert!(matches!(
        err,
        DbError::SchemaTooNew {
            db_version: 999,
            latest_supported,
        } if latest_supported == latest_version()
    ));
}

#[test]
fn failed_step_is_reported_and_rolled_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clobbered.sqlite3");

    // A view named `documents` survives `CREATE TABLE IF NOT EXISTS` but
    // cannot carry the owner index.
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("CREATE VIEW documents AS SELECT 1 AS collection;")
        .unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    assert!(matches!(
        err,
        DbError::MigrationFailed {
            version: 1,
            name: "documents",
            ..
        }
    ));

    let conn = Connection::open(&path).unwrap();
    assert_eq!(schema_version(&conn), 0);
}

#[test]
fn write_failures_are_classified() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO documents (collection, id, owner, body) VALUES ('users', 'u1', NULL, '{}');",
        [],
    )
    .unwrap();

    let not_json = conn
        .execute(
            "INSERT INTO documents (collection, id, owner, body)
             VALUES ('users', 'u2', NULL, 'not json');",
            [],
        )
        .unwrap_err();
    assert!(matches!(DbError::from(not_json), DbError::BodyRejected));

    let duplicate = conn
        .execute(
            "INSERT INTO documents (collection, id, owner, body) VALUES ('users', 'u1', NULL, '{}');",
            [],
        )
        .unwrap_err();
    assert!(matches!(DbError::from(duplicate), DbError::DuplicateKey));

    let same_id_other_collection = conn.execute(
        "INSERT INTO documents (collection, id, owner, body) VALUES ('people', 'u1', 'u1', '{}');",
        [],
    );
    assert_eq!(same_id_other_collection.unwrap(), 1);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .unwrap()
}
