//! Library store gateway.
//!
//! Read/write access to the DJ software's SQLite database: tracks, playlists
//! and playlist membership. The schema belongs to the DJ software; nothing
//! here creates or migrates tables.

mod model;
mod sqlite;

pub use model::*;
pub use sqlite::*;

use crate::error::Result;
use crate::track::{LibraryTrack, TrackRef};

/// The slice of the store the reconciliation engine needs.
pub trait PlaylistStore {
    /// Members of a playlist, ordered by position.
    fn playlist_tracks(&self, playlist_id: i64) -> Result<Vec<LibraryTrack>>;

    /// Append `tracks` to a playlist, all or nothing. Returns the number of
    /// rows inserted.
    fn add_to_playlist(&mut self, tracks: &[TrackRef], playlist_id: i64) -> Result<usize>;
}

#[cfg(test)]
pub(crate) mod fixture;
