//! Per-invocation resources.
//!
//! A `Context` owns the settings, the library connection and, once asked
//! for, the daemon session. Everything is released when it is dropped.

use std::path::PathBuf;

use tracing::debug;

use crate::config::Settings;
use crate::display::Renderer;
use crate::error::{Error, Result};
use crate::mpd::{CurrentSong, MpdClient, MpdEndpoint};
use crate::store::{Playlist, SqliteStore};
use crate::tags::{LoftyTagEditor, TagEditor};
use crate::track::{LibraryTrack, Track};

struct Session {
    endpoint: MpdEndpoint,
    client: MpdClient,
}

impl Session {
    fn open(settings: &Settings) -> Result<Self> {
        let endpoint = MpdEndpoint::resolve(&settings.mpd)?;
        let client = MpdClient::connect(&endpoint)?;
        Ok(Self { endpoint, client })
    }
}

enum Daemon {
    Unopened,
    Open(Session),
    Failed(String),
}

pub struct Context {
    pub settings: Settings,
    pub store: SqliteStore,
    pub tags: Box<dyn TagEditor>,
    daemon: Daemon,
}

impl Context {
    /// Open the library database named by the settings.
    pub fn open(settings: Settings) -> Result<Self> {
        let store = SqliteStore::open(&settings.database.path)?;
        Ok(Self::new(settings, store))
    }

    pub fn new(settings: Settings, store: SqliteStore) -> Self {
        Self {
            settings,
            store,
            tags: Box::new(LoftyTagEditor),
            daemon: Daemon::Unopened,
        }
    }

    pub fn renderer(&self) -> Renderer {
        Renderer {
            gap: self.settings.ui.column_gap,
            color: self.settings.ui.color,
        }
    }

    /// The daemon session, connecting on first use. A failed attempt is
    /// remembered and not retried.
    fn session(&mut self) -> Result<&mut Session> {
        if matches!(self.daemon, Daemon::Unopened) {
            match Session::open(&self.settings) {
                Ok(session) => self.daemon = Daemon::Open(session),
                Err(e) => {
                    self.daemon = Daemon::Failed(e.to_string());
                    return Err(e);
                }
            }
        }
        match &mut self.daemon {
            Daemon::Open(session) => Ok(session),
            Daemon::Failed(message) => Err(Error::Connection(message.clone())),
            Daemon::Unopened => Err(Error::Connection("mpd session not opened".to_string())),
        }
    }

    /// The daemon's current song and where its file lives locally.
    fn playing(&mut self) -> Result<Option<(CurrentSong, PathBuf)>> {
        let session = self.session()?;
        let song = session.client.current_song()?;
        Ok(song.map(|song| {
            let path = session.endpoint.local_path(&song.file);
            (song, path)
        }))
    }

    /// The library row of the file the daemon is playing.
    pub fn now_playing(&mut self) -> Result<LibraryTrack> {
        let (_, path) = self
            .playing()?
            .ok_or_else(|| Error::NotFound("nothing is playing".to_string()))?;
        debug!(path = %path.display(), "resolving now playing track");
        self.store.track_by_path(&path)
    }

    /// Who and what the daemon is playing: its own tags when it has both,
    /// else the library row of its file. `None` when idle or unknown.
    pub fn playing_identity(&mut self) -> Result<Option<Track>> {
        let Some((song, path)) = self.playing()? else {
            return Ok(None);
        };
        if let Some(track) = song.as_track() {
            return Ok(Some(track));
        }
        match self.store.track_by_path(&path) {
            Ok(track) => Ok(Some(track.identity())),
            Err(Error::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// A playlist named on the command line: by name, then by numeric id.
    /// No argument means the current playlist.
    pub fn playlist(&self, arg: Option<&str>) -> Result<Playlist> {
        let Some(arg) = arg else {
            return self.store.current_playlist();
        };
        match self.store.playlist_by_name(arg) {
            Err(Error::NotFound(message)) => match arg.parse::<i64>() {
                Ok(id) => self.store.playlist_by_id(id),
                Err(_) => Err(Error::NotFound(message)),
            },
            other => other,
        }
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        let daemon = match self.daemon {
            Daemon::Unopened => "unused",
            Daemon::Open(_) => "open",
            Daemon::Failed(_) => "failed",
        };
        debug!(daemon, "releasing context");
    }
}
