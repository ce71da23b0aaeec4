//! In-memory library database with the subset of the DJ software's schema
//! this crate reads and writes.

use rusqlite::{Connection, params};

use super::SqliteStore;

pub(crate) const SCHEMA: &str = "
CREATE TABLE track_locations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    location varchar(512) UNIQUE,
    filename varchar(512),
    directory varchar(512),
    filesize INTEGER,
    fs_deleted INTEGER DEFAULT 0,
    needs_verification INTEGER DEFAULT 0
);
CREATE TABLE library (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    artist varchar(64),
    title varchar(64),
    album varchar(64),
    genre varchar(64),
    comment varchar(256),
    location INTEGER REFERENCES track_locations(id),
    samplerate INTEGER DEFAULT 0,
    bitrate INTEGER,
    bpm float,
    rating INTEGER DEFAULT 0,
    mixxx_deleted INTEGER DEFAULT 0
);
CREATE TABLE Playlists (
    id INTEGER PRIMARY KEY,
    name varchar(48),
    position INTEGER,
    hidden INTEGER DEFAULT 0 NOT NULL,
    date_created datetime,
    date_modified datetime,
    locked INTEGER DEFAULT 0
);
CREATE TABLE PlaylistTracks (
    id INTEGER PRIMARY KEY,
    playlist_id INTEGER REFERENCES Playlists(id),
    track_id INTEGER REFERENCES library(id),
    position INTEGER,
    pl_datetime_added TEXT
);
";

pub(crate) fn memory_store() -> SqliteStore {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(SCHEMA).unwrap();
    SqliteStore::from_connection(conn)
}

/// Insert a track living at `path` (e.g. `/music/a.mp3`) and return its id.
pub(crate) fn insert_track(store: &SqliteStore, artist: &str, title: &str, path: &str) -> i64 {
    let path = std::path::Path::new(path);
    let conn = store.connection();
    conn.execute(
        "INSERT INTO track_locations (location, filename, directory) VALUES (?1, ?2, ?3)",
        params![
            path.to_str().unwrap(),
            path.file_name().unwrap().to_str().unwrap(),
            path.parent().unwrap().to_str().unwrap()
        ],
    )
    .unwrap();
    let location = conn.last_insert_rowid();
    conn.execute(
        "INSERT INTO library (artist, title, genre, location, samplerate, bitrate, bpm, rating)
         VALUES (?1, ?2, 'House', ?3, 44100, 320, 124.0, 3)",
        params![artist, title, location],
    )
    .unwrap();
    conn.last_insert_rowid()
}

pub(crate) fn insert_playlist(
    store: &SqliteStore,
    name: &str,
    position: i64,
    hidden: bool,
    date_created: &str,
) -> i64 {
    let conn = store.connection();
    conn.execute(
        "INSERT INTO Playlists (name, position, hidden, date_created, date_modified)
         VALUES (?1, ?2, ?3, ?4, ?4)",
        params![name, position, if hidden { 2 } else { 0 }, date_created],
    )
    .unwrap();
    conn.last_insert_rowid()
}

pub(crate) fn add_member(store: &SqliteStore, playlist_id: i64, track_id: i64, position: i64) {
    store
        .connection()
        .execute(
            "INSERT INTO PlaylistTracks (playlist_id, track_id, position, pl_datetime_added)
             VALUES (?1, ?2, ?3, '2024-01-01 00:00:00')",
            params![playlist_id, track_id, position],
        )
        .unwrap();
}

pub(crate) fn member_rows(store: &SqliteStore, playlist_id: i64) -> Vec<(i64, i64)> {
    let mut stmt = store
        .connection()
        .prepare("SELECT track_id, position FROM PlaylistTracks WHERE playlist_id = ?1 ORDER BY position")
        .unwrap();
    stmt.query_map([playlist_id], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}
