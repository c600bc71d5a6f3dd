use chrono::{TimeZone, Utc};
use rusqlite::params;
use uuid::Uuid;
use voxnote_core::db::open_db_in_memory;
use voxnote_core::{
    Note, NoteArchive, NoteService, SqliteNoteArchive, NOTES_ARCHIVE_KEY,
};

#[test]
fn load_from_empty_archive_yields_empty_collection() {
    let conn = open_db_in_memory().unwrap();
    let archive = SqliteNoteArchive::new(&conn);

    assert!(archive.load().unwrap().is_empty());
}

#[test]
fn store_then_load_roundtrips_ids_contents_and_dates() {
    let conn = open_db_in_memory().unwrap();
    let archive = SqliteNoteArchive::new(&conn);

    let created_at = Utc.with_ymd_and_hms(2024, 2, 5, 9, 15, 0).unwrap();
    let notes = vec![
        Note::with_parts(Uuid::new_v4(), created_at, "passear com o cachorro"),
        Note::with_parts(Uuid::new_v4(), created_at, "comprar leite"),
    ];

    archive.store(&notes).unwrap();
    let loaded = archive.load().unwrap();

    assert_eq!(loaded.len(), notes.len());
    for (loaded, original) in loaded.iter().zip(notes.iter()) {
        assert_eq!(loaded.id, original.id);
        assert_eq!(loaded.content, original.content);
        assert_eq!(loaded.created_at, original.created_at);
    }
}

#[test]
fn store_replaces_the_blob_wholesale() {
    let conn = open_db_in_memory().unwrap();
    let archive = SqliteNoteArchive::new(&conn);

    archive
        .store(&[Note::new("first"), Note::new("second")])
        .unwrap();
    archive.store(&[Note::new("only survivor")]).unwrap();

    let loaded = archive.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].content, "only survivor");

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM archive;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn persisted_blob_uses_the_external_record_layout() {
    let conn = open_db_in_memory().unwrap();
    let archive = SqliteNoteArchive::new(&conn);
    archive.store(&[Note::new("buy milk")]).unwrap();

    let blob: String = conn
        .query_row(
            "SELECT value FROM archive WHERE key = ?1;",
            [NOTES_ARCHIVE_KEY],
            |row| row.get(0),
        )
        .unwrap();

    let records: serde_json::Value = serde_json::from_str(&blob).unwrap();
    let record = &records.as_array().unwrap()[0];
    assert!(record.get("id").is_some());
    assert!(record.get("date").is_some());
    assert_eq!(record["content"], "buy milk");
}

#[test]
fn corrupt_blob_surfaces_a_load_error() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO archive (key, value) VALUES (?1, ?2);",
        params![NOTES_ARCHIVE_KEY, "not json at all"],
    )
    .unwrap();

    let archive = SqliteNoteArchive::new(&conn);
    assert!(archive.load().is_err());
}

#[test]
fn hydration_falls_back_to_empty_on_corrupt_blob() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO archive (key, value) VALUES (?1, ?2);",
        params![NOTES_ARCHIVE_KEY, r#"{"unexpected":"shape"}"#],
    )
    .unwrap();

    let notes = NoteService::hydrate(SqliteNoteArchive::new(&conn));
    assert!(notes.notes().is_empty());
}

#[test]
fn hydration_after_fallback_can_write_again() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO archive (key, value) VALUES (?1, ?2);",
        params![NOTES_ARCHIVE_KEY, "]["],
    )
    .unwrap();

    {
        let mut notes = NoteService::hydrate(SqliteNoteArchive::new(&conn));
        notes.create_note("fresh start").unwrap();
    }

    let rehydrated = NoteService::hydrate(SqliteNoteArchive::new(&conn));
    assert_eq!(rehydrated.notes().len(), 1);
    assert_eq!(rehydrated.notes()[0].content, "fresh start");
}
