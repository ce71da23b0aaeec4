use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, OpenFlags, OptionalExtension, Row, params};
use tracing::{debug, info};

use super::PlaylistStore;
use super::model::Playlist;
use crate::error::{Error, Result};
use crate::track::{LibraryTrack, TrackRef};

const TRACK_COLUMNS: &str = "l.id, l.artist, l.title, tl.directory, tl.filename, \
     l.samplerate, l.bitrate, l.bpm, l.rating, l.genre, l.comment";

const PLAYLIST_COLUMNS: &str = "p.id, p.name, p.position, p.date_created, p.date_modified";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Ratings the DJ software understands (stars).
pub const RATING_RANGE: std::ops::RangeInclusive<i64> = 0..=5;

/// Escape SQL LIKE wildcard characters so they are matched literally.
fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' | '%' | '_' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

fn now_timestamp() -> String {
    chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

fn track_from_row(row: &Row<'_>) -> rusqlite::Result<LibraryTrack> {
    Ok(LibraryTrack {
        id: row.get(0)?,
        artist: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        title: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        directory: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        filename: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        samplerate: row.get::<_, Option<i64>>(5)?.unwrap_or_default(),
        bitrate: row.get::<_, Option<i64>>(6)?.unwrap_or_default(),
        bpm: row.get::<_, Option<f64>>(7)?.unwrap_or_default(),
        rating: row.get::<_, Option<i64>>(8)?.unwrap_or_default(),
        genre: row.get::<_, Option<String>>(9)?.unwrap_or_default(),
        comment: row.get::<_, Option<String>>(10)?.unwrap_or_default(),
        position: None,
    })
}

fn playlist_from_row(row: &Row<'_>) -> rusqlite::Result<Playlist> {
    Ok(Playlist {
        id: row.get(0)?,
        name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        position: row.get::<_, Option<i64>>(2)?.unwrap_or_default(),
        date_created: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        date_modified: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}

/// The DJ library database, over a single connection owned for the
/// lifetime of one invocation.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open an existing database. A missing file is a connection error; the
    /// database is never created here.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Connection(format!(
                "database not found: {}",
                path.display()
            )));
        }
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE)
            .map_err(|e| Error::Connection(format!("{}: {e}", path.display())))?;
        // The DJ software may hold the database open while we write.
        conn.busy_timeout(Duration::from_secs(5))?;
        debug!(path = %path.display(), "opened library database");
        Ok(Self::from_connection(conn))
    }

    /// Wrap an already open connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }

    fn query_playlist(&self, clause: &str, param: &dyn rusqlite::ToSql) -> Result<Option<Playlist>> {
        let sql = format!("SELECT {PLAYLIST_COLUMNS} FROM Playlists p WHERE p.hidden = 0 AND {clause}");
        Ok(self
            .conn
            .query_row(&sql, [param], playlist_from_row)
            .optional()?)
    }

    fn query_playlists(&self, sql: &str, param: Option<i64>) -> Result<Vec<Playlist>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = match param {
            Some(p) => stmt.query_map([p], playlist_from_row)?,
            None => stmt.query_map([], playlist_from_row)?,
        };
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn playlist_by_name(&self, name: &str) -> Result<Playlist> {
        self.query_playlist("p.name = ?1", &name)?
            .ok_or_else(|| Error::NotFound(format!("playlist {name:?}")))
    }

    pub fn playlist_by_id(&self, id: i64) -> Result<Playlist> {
        self.query_playlist("p.id = ?1", &id)?
            .ok_or_else(|| Error::NotFound(format!("playlist #{id}")))
    }

    /// Create a visible playlist placed after every existing one.
    pub fn create_playlist(&self, name: &str) -> Result<Playlist> {
        if self.query_playlist("p.name = ?1", &name)?.is_some() {
            return Err(Error::Validation(format!("playlist {name:?} already exists")));
        }

        let max_position: i64 = self.conn.query_row(
            "SELECT COALESCE(MAX(position), 0) FROM Playlists",
            [],
            |row| row.get(0),
        )?;
        let now = now_timestamp();
        self.conn.execute(
            "INSERT INTO Playlists (name, position, hidden, date_created, date_modified)
             VALUES (?1, ?2, 0, ?3, ?3)",
            params![name, max_position + 1, now],
        )?;
        let id = self.conn.last_insert_rowid();
        info!(id, name, "created playlist");
        self.playlist_by_id(id)
    }

    /// All visible playlists ordered by position.
    pub fn playlists(&self) -> Result<Vec<Playlist>> {
        self.query_playlists(
            &format!(
                "SELECT {PLAYLIST_COLUMNS} FROM Playlists p WHERE p.hidden = 0 ORDER BY p.position, p.id"
            ),
            None,
        )
    }

    /// Visible playlists that have `track_id` as a member.
    pub fn playlists_containing(&self, track_id: i64) -> Result<Vec<Playlist>> {
        self.query_playlists(
            &format!(
                "SELECT DISTINCT {PLAYLIST_COLUMNS} FROM Playlists p
                 JOIN PlaylistTracks pt ON pt.playlist_id = p.id
                 WHERE p.hidden = 0 AND pt.track_id = ?1
                 ORDER BY p.position, p.id"
            ),
            Some(track_id),
        )
    }

    /// The most recently created visible playlist.
    pub fn current_playlist(&self) -> Result<Playlist> {
        self.nth_newest_playlist(0)
            .and_then(|p| p.ok_or_else(|| Error::NotFound("no playlists".to_string())))
    }

    /// The second most recently created visible playlist.
    pub fn previous_playlist(&self) -> Result<Playlist> {
        self.nth_newest_playlist(1)
            .and_then(|p| p.ok_or_else(|| Error::NotFound("no previous playlist".to_string())))
    }

    fn nth_newest_playlist(&self, offset: i64) -> Result<Option<Playlist>> {
        let sql = format!(
            "SELECT {PLAYLIST_COLUMNS} FROM Playlists p WHERE p.hidden = 0
             ORDER BY p.date_created DESC, p.id DESC LIMIT 1 OFFSET ?1"
        );
        Ok(self
            .conn
            .query_row(&sql, [offset], playlist_from_row)
            .optional()?)
    }

    pub fn track_by_id(&self, id: i64) -> Result<LibraryTrack> {
        let sql = format!(
            "SELECT {TRACK_COLUMNS} FROM library l
             JOIN track_locations tl ON tl.id = l.location
             WHERE l.id = ?1"
        );
        self.conn
            .query_row(&sql, [id], track_from_row)
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("track #{id}")))
    }

    /// Look a track up by the directory and file name of `path`.
    pub fn track_by_path(&self, path: &Path) -> Result<LibraryTrack> {
        let not_found = || Error::NotFound(format!("track at {}", path.display()));
        let directory = path.parent().ok_or_else(not_found)?.to_string_lossy().into_owned();
        let filename = path.file_name().ok_or_else(not_found)?.to_string_lossy().into_owned();

        let sql = format!(
            "SELECT {TRACK_COLUMNS} FROM library l
             JOIN track_locations tl ON tl.id = l.location
             WHERE tl.directory = ?1 AND tl.filename = ?2"
        );
        self.conn
            .query_row(&sql, params![directory, filename], track_from_row)
            .optional()?
            .ok_or_else(not_found)
    }

    /// Case-insensitive substring search over artist or title.
    pub fn search(&self, query: &str) -> Result<Vec<LibraryTrack>> {
        let pattern = format!("%{}%", escape_like(query));
        let sql = format!(
            "SELECT {TRACK_COLUMNS} FROM library l
             JOIN track_locations tl ON tl.id = l.location
             WHERE COALESCE(l.mixxx_deleted, 0) = 0
               AND (l.artist LIKE ?1 ESCAPE '\\' OR l.title LIKE ?1 ESCAPE '\\')
             ORDER BY l.artist, l.title, l.id"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let tracks = stmt
            .query_map([pattern], track_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(query, matches = tracks.len(), "searched library");
        Ok(tracks)
    }

    pub fn set_rating(&self, track_id: i64, rating: i64) -> Result<()> {
        if !RATING_RANGE.contains(&rating) {
            return Err(Error::Validation(format!(
                "rating must be between {} and {}, got {rating}",
                RATING_RANGE.start(),
                RATING_RANGE.end()
            )));
        }
        let changed = self.conn.execute(
            "UPDATE library SET rating = ?1 WHERE id = ?2",
            params![rating, track_id],
        )?;
        if changed == 0 {
            return Err(Error::NotFound(format!("track #{track_id}")));
        }
        info!(track_id, rating, "set rating");
        Ok(())
    }

    pub fn set_genre(&self, track_id: i64, genre: &str) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE library SET genre = ?1 WHERE id = ?2",
            params![genre, track_id],
        )?;
        if changed == 0 {
            return Err(Error::NotFound(format!("track #{track_id}")));
        }
        info!(track_id, genre, "set genre");
        Ok(())
    }
}

impl PlaylistStore for SqliteStore {
    fn playlist_tracks(&self, playlist_id: i64) -> Result<Vec<LibraryTrack>> {
        let sql = format!(
            "SELECT {TRACK_COLUMNS}, pt.position FROM PlaylistTracks pt
             JOIN library l ON l.id = pt.track_id
             JOIN track_locations tl ON tl.id = l.location
             WHERE pt.playlist_id = ?1
             ORDER BY pt.position, pt.id"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let tracks = stmt
            .query_map([playlist_id], |row| {
                let mut track = track_from_row(row)?;
                track.position = row.get(11)?;
                Ok(track)
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(playlist_id, tracks = tracks.len(), "loaded playlist tracks");
        Ok(tracks)
    }

    fn add_to_playlist(&mut self, tracks: &[TrackRef], playlist_id: i64) -> Result<usize> {
        self.playlist_by_id(playlist_id)?;
        if tracks.is_empty() {
            return Ok(0);
        }

        // Dropping the transaction on any early return rolls it back.
        let tx = self.conn.transaction()?;
        let max_position: i64 = tx.query_row(
            "SELECT COALESCE(MAX(position), 0) FROM PlaylistTracks WHERE playlist_id = ?1",
            [playlist_id],
            |row| row.get(0),
        )?;
        {
            let mut exists = tx.prepare("SELECT 1 FROM library WHERE id = ?1")?;
            let mut insert = tx.prepare(
                "INSERT INTO PlaylistTracks (playlist_id, track_id, position, pl_datetime_added)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (offset, track) in tracks.iter().enumerate() {
                let track_id = track.id();
                if !exists.exists([track_id])? {
                    return Err(Error::NotFound(format!("track #{track_id}")));
                }
                let position = max_position + 1 + offset as i64;
                insert.execute(params![playlist_id, track_id, position, now_timestamp()])?;
            }
        }
        tx.execute(
            "UPDATE Playlists SET date_modified = ?1 WHERE id = ?2",
            params![now_timestamp(), playlist_id],
        )?;
        tx.commit()?;

        info!(playlist_id, added = tracks.len(), "appended tracks to playlist");
        Ok(tracks.len())
    }
}
