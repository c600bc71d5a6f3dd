//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `voxnote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use voxnote_core::db::open_db_in_memory;
use voxnote_core::{filter_notes, NoteService, SqliteNoteArchive};

fn main() {
    println!("voxnote_core version={}", voxnote_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("voxnote_core db_open failed: {err}");
            std::process::exit(1);
        }
    };

    let archive = SqliteNoteArchive::new(&conn);
    let mut notes = NoteService::hydrate(archive);

    for content in ["comprar leite", "passear com o cachorro"] {
        if let Err(err) = notes.create_note(content) {
            eprintln!("voxnote_core create_note failed: {err}");
            std::process::exit(1);
        }
    }

    println!("voxnote_core notes={}", notes.notes().len());
    println!(
        "voxnote_core filter_leite={}",
        filter_notes(notes.notes(), "leite").len()
    );
}
