use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Anything that can be identified as a song by artist and title.
pub trait TrackIdentity {
    fn artist(&self) -> &str;
    fn title(&self) -> &str;

    /// Exact, case-sensitive `(artist, title)` comparison. Ids are ignored.
    fn same_song<T: TrackIdentity + ?Sized>(&self, other: &T) -> bool {
        self.artist() == other.artist() && self.title() == other.title()
    }
}

/// A bare `(artist, title)` identity, as found in cue sheets and daemon tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Track {
    pub artist: String,
    pub title: String,
}

impl Track {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
        }
    }
}

impl TrackIdentity for Track {
    fn artist(&self) -> &str {
        &self.artist
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist, self.title)
    }
}

/// A row of the DJ library joined with its file location.
#[derive(Debug, Clone, Default)]
pub struct LibraryTrack {
    pub id: i64,
    pub artist: String,
    pub title: String,
    pub directory: String,
    pub filename: String,
    pub samplerate: i64,
    pub bitrate: i64,
    pub bpm: f64,
    pub rating: i64,
    pub genre: String,
    pub comment: String,
    /// Position inside the playlist this row was loaded from, if any.
    pub position: Option<i64>,
}

impl LibraryTrack {
    /// Full path of the audio file.
    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.filename)
    }

    /// The bare identity of this row.
    pub fn identity(&self) -> Track {
        Track::new(self.artist.clone(), self.title.clone())
    }
}

impl TrackIdentity for LibraryTrack {
    fn artist(&self) -> &str {
        &self.artist
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl PartialEq for LibraryTrack {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.same_song(other)
    }
}

impl Eq for LibraryTrack {}

impl Hash for LibraryTrack {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.artist.hash(state);
        self.title.hash(state);
    }
}

impl PartialEq<Track> for LibraryTrack {
    fn eq(&self, other: &Track) -> bool {
        self.same_song(other)
    }
}

impl PartialEq<LibraryTrack> for Track {
    fn eq(&self, other: &LibraryTrack) -> bool {
        self.same_song(other)
    }
}

impl From<&LibraryTrack> for Track {
    fn from(t: &LibraryTrack) -> Self {
        t.identity()
    }
}

impl fmt::Display for LibraryTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist, self.title)
    }
}

/// Input to a bulk playlist insert: a full library row or a bare id.
#[derive(Debug, Clone)]
pub enum TrackRef {
    Id(i64),
    Track(LibraryTrack),
}

impl TrackRef {
    /// The library id this reference resolves to.
    pub fn id(&self) -> i64 {
        match self {
            TrackRef::Id(id) => *id,
            TrackRef::Track(t) => t.id,
        }
    }
}

impl From<i64> for TrackRef {
    fn from(id: i64) -> Self {
        TrackRef::Id(id)
    }
}

impl From<LibraryTrack> for TrackRef {
    fn from(t: LibraryTrack) -> Self {
        TrackRef::Track(t)
    }
}

impl From<&LibraryTrack> for TrackRef {
    fn from(t: &LibraryTrack) -> Self {
        TrackRef::Track(t.clone())
    }
}

impl FromStr for TrackRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map(TrackRef::Id)
            .map_err(|_| Error::Type(format!("expected a numeric track id, got {s:?}")))
    }
}
