use std::collections::HashSet;

use tracing::{debug, info};

use crate::cue::CueSheet;
use crate::error::{Error, Result};
use crate::store::PlaylistStore;
use crate::track::{LibraryTrack, TrackIdentity, TrackRef};

/// Per-row annotation produced by a reconciliation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    /// Not found in the cue sheet.
    Unplayed,
    /// Unplayed and absent from the destination playlist.
    Missing,
    /// Copied into the destination playlist by this run.
    Added,
}

impl Status {
    pub fn tag(self) -> &'static str {
        match self {
            Status::Unplayed => "UNPLAYED",
            Status::Missing => "MISSING",
            Status::Added => "ADDED",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub track: LibraryTrack,
    pub status: Option<Status>,
}

impl Row {
    fn new(track: LibraryTrack, status: Option<Status>) -> Self {
        Self { track, status }
    }
}

/// Counts reported after copying unplayed tracks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CopyReport {
    pub added: usize,
    pub unplayed: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub rows: Vec<Row>,
    pub report: Option<CopyReport>,
}

/// What to reconcile and how to present it.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    pub source: i64,
    pub cue: &'a CueSheet,
    pub destination: Option<i64>,
    /// Append the missing tracks to `destination`.
    pub copy: bool,
    /// Keep the whole working set and flag matches instead of narrowing it.
    pub filter: bool,
}

type SongKey<'a> = (&'a str, &'a str);

fn song_key<T: TrackIdentity + ?Sized>(track: &T) -> SongKey<'_> {
    (track.artist(), track.title())
}

fn song_keys<'a, T: TrackIdentity + 'a>(tracks: impl IntoIterator<Item = &'a T>) -> HashSet<SongKey<'a>> {
    tracks.into_iter().map(song_key).collect()
}

fn without(tracks: &[LibraryTrack], seen: impl Fn(&LibraryTrack) -> bool) -> Vec<LibraryTrack> {
    tracks.iter().filter(|&t| !seen(t)).cloned().collect()
}

/// Keep every track, tagging the ones `seen` rejects with `status`.
fn flag(tracks: Vec<LibraryTrack>, seen: impl Fn(&LibraryTrack) -> bool, status: Status) -> Vec<Row> {
    tracks
        .into_iter()
        .map(|t| {
            let hit = !seen(&t);
            Row::new(t, hit.then_some(status))
        })
        .collect()
}

fn tagged(tracks: Vec<LibraryTrack>, status: Option<Status>) -> Vec<Row> {
    tracks.into_iter().map(|t| Row::new(t, status)).collect()
}

/// Run a reconciliation. The only mutation is the bulk insert performed
/// when `copy` is set; its rows and the report come from the same
/// `missing` set computed before the insert.
pub fn reconcile<S: PlaylistStore>(store: &mut S, request: &Request<'_>) -> Result<Outcome> {
    if request.copy && request.destination.is_none() {
        return Err(Error::Validation(
            "copying unplayed tracks needs a destination playlist".to_string(),
        ));
    }

    let tracks = store.playlist_tracks(request.source)?;
    let played = |t: &LibraryTrack| request.cue.contains(t);
    let unplayed = without(&tracks, played);
    debug!(
        source = request.source,
        total = tracks.len(),
        unplayed = unplayed.len(),
        "computed unplayed tracks"
    );

    let Some(destination) = request.destination else {
        let rows = if request.filter {
            flag(tracks, played, Status::Unplayed)
        } else {
            tagged(unplayed, None)
        };
        return Ok(Outcome { rows, report: None });
    };

    let dest_tracks = store.playlist_tracks(destination)?;
    let keys = song_keys(&dest_tracks);
    let present = |t: &LibraryTrack| keys.contains(&song_key(t));

    if request.copy {
        let missing = without(&unplayed, present);
        let refs: Vec<TrackRef> = missing.iter().map(TrackRef::from).collect();
        let added = store.add_to_playlist(&refs, destination)?;
        let report = CopyReport {
            added,
            unplayed: unplayed.len(),
            total: tracks.len(),
        };
        info!(
            source = request.source,
            destination,
            added = report.added,
            "copied unplayed tracks"
        );
        return Ok(Outcome {
            rows: tagged(missing, Some(Status::Added)),
            report: Some(report),
        });
    }

    let rows = if request.filter {
        flag(unplayed, present, Status::Missing)
    } else {
        tagged(without(&unplayed, present), None)
    };
    Ok(Outcome { rows, report: None })
}
