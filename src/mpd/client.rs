use std::io::{Read, Write};
use std::net::TcpStream;

use tracing::debug;

use crate::error::{Error, Result};
use crate::track::Track;

use super::conf::MpdEndpoint;

/// The daemon's now-playing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentSong {
    /// Path relative to the daemon's music directory.
    pub file: String,
    pub artist: Option<String>,
    pub title: Option<String>,
}

impl CurrentSong {
    /// The song's identity, when the daemon knows both tags.
    pub fn as_track(&self) -> Option<Track> {
        match (&self.artist, &self.title) {
            (Some(artist), Some(title)) => Some(Track::new(artist.clone(), title.clone())),
            _ => None,
        }
    }
}

impl From<mpd::Song> for CurrentSong {
    fn from(song: mpd::Song) -> Self {
        Self {
            file: song.file,
            artist: song.artist,
            title: song.title,
        }
    }
}

/// A single daemon session. `close` is sent when the client is dropped.
pub struct MpdClient<S: Read + Write = TcpStream> {
    inner: mpd::Client<S>,
}

impl MpdClient<TcpStream> {
    /// One connection attempt; failures are not retried.
    pub fn connect(endpoint: &MpdEndpoint) -> Result<Self> {
        debug!(host = %endpoint.host, port = endpoint.port, "connecting to mpd");
        let stream = TcpStream::connect((endpoint.host.as_str(), endpoint.port)).map_err(|e| {
            Error::Connection(format!(
                "mpd at {}:{}: {e}",
                endpoint.host, endpoint.port
            ))
        })?;
        Self::new(stream, endpoint.password.as_deref())
    }
}

impl<S: Read + Write> MpdClient<S> {
    /// Wrap an open stream: read the greeting and log in if a password is set.
    pub fn new(stream: S, password: Option<&str>) -> Result<Self> {
        let mut inner = mpd::Client::new(stream)?;
        if let Some(password) = password {
            inner.login(password)?;
        }
        Ok(Self { inner })
    }

    /// What the daemon is playing, or `None` when it is idle.
    pub fn current_song(&mut self) -> Result<Option<CurrentSong>> {
        let song = self.inner.currentsong()?.map(CurrentSong::from);
        debug!(?song, "mpd current song");
        Ok(song)
    }
}

impl<S: Read + Write> Drop for MpdClient<S> {
    fn drop(&mut self) {
        // The daemon hangs up on `close` instead of answering it.
        if let Err(e) = self.inner.close() {
            debug!("mpd close: {e}");
        }
    }
}
