use crate::config::TrackField;
use crate::reconcile::Row;
use crate::store::Playlist;
use crate::track::{LibraryTrack, Track, TrackIdentity};

use super::render::{Columns, Decorator};

/// Track cells in the configured field order.
pub struct TrackColumns<'a> {
    pub fields: &'a [TrackField],
}

fn track_cell(track: &LibraryTrack, field: TrackField) -> String {
    match field {
        TrackField::Id => track.id.to_string(),
        TrackField::Position => track.position.map(|p| p.to_string()).unwrap_or_default(),
        TrackField::Artist => track.artist.trim().to_string(),
        TrackField::Title => track.title.trim().to_string(),
        TrackField::Genre => track.genre.trim().to_string(),
        TrackField::Bpm if track.bpm > 0.0 => format!("{:.1}", track.bpm),
        TrackField::Bpm => String::new(),
        TrackField::Rating => "*".repeat(track.rating.clamp(0, 5) as usize),
        TrackField::Bitrate if track.bitrate > 0 => format!("{} kbps", track.bitrate),
        TrackField::Samplerate if track.samplerate > 0 => format!("{} Hz", track.samplerate),
        TrackField::Bitrate | TrackField::Samplerate => String::new(),
        TrackField::Comment => track.comment.trim().to_string(),
        TrackField::Filename => track.filename.clone(),
        TrackField::Path => track.path().display().to_string(),
    }
}

/// Labelled cells for a single track, in display order.
pub fn track_details(track: &LibraryTrack) -> Vec<(&'static str, String)> {
    [
        ("id", TrackField::Id),
        ("artist", TrackField::Artist),
        ("title", TrackField::Title),
        ("genre", TrackField::Genre),
        ("bpm", TrackField::Bpm),
        ("rating", TrackField::Rating),
        ("bitrate", TrackField::Bitrate),
        ("samplerate", TrackField::Samplerate),
        ("comment", TrackField::Comment),
        ("path", TrackField::Path),
    ]
    .into_iter()
    .map(|(label, field)| (label, track_cell(track, field)))
    .collect()
}

impl Columns<LibraryTrack> for TrackColumns<'_> {
    fn columns(&self, item: &LibraryTrack) -> Vec<String> {
        self.fields.iter().map(|f| track_cell(item, *f)).collect()
    }
}

impl Columns<Row> for TrackColumns<'_> {
    fn columns(&self, item: &Row) -> Vec<String> {
        <Self as Columns<LibraryTrack>>::columns(self, &item.track)
    }
}

pub struct PlaylistColumns;

impl Columns<Playlist> for PlaylistColumns {
    fn columns(&self, item: &Playlist) -> Vec<String> {
        vec![
            item.id.to_string(),
            item.name.clone(),
            item.date_created.clone(),
        ]
    }
}

/// Tags reconciliation rows with their status.
pub struct StatusDecorator;

impl Decorator<Row> for StatusDecorator {
    fn decorate(&self, item: &Row) -> Option<&'static str> {
        item.status.map(|s| s.tag())
    }
}

/// Marks the current and previous playlists.
pub struct PlaylistMarks {
    pub current: Option<i64>,
    pub previous: Option<i64>,
}

impl Decorator<Playlist> for PlaylistMarks {
    fn decorate(&self, item: &Playlist) -> Option<&'static str> {
        if Some(item.id) == self.current {
            Some("CURRENT")
        } else if Some(item.id) == self.previous {
            Some("PREVIOUS")
        } else {
            None
        }
    }
}

/// Marks the track the daemon is playing.
pub struct NowPlayingMark {
    pub track: Option<Track>,
}

impl Decorator<LibraryTrack> for NowPlayingMark {
    fn decorate(&self, item: &LibraryTrack) -> Option<&'static str> {
        match &self.track {
            Some(playing) if playing.same_song(item) => Some("now playing"),
            _ => None,
        }
    }
}
