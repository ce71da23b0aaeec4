use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::track::{Track, TrackIdentity};

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(TITLE|PERFORMER)\s+(.*?)\s*$").expect("directive pattern compiles")
});

/// The tracks of a played set, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CueSheet {
    tracks: Vec<Track>,
}

impl CueSheet {
    /// Read and parse the cue sheet at `path`.
    ///
    /// Invalid UTF-8 is replaced rather than rejected; cue sheets written by
    /// older tools are frequently Latin-1.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let sheet = Self::parse(&String::from_utf8_lossy(&bytes))?;
        debug!(path = %path.display(), tracks = sheet.len(), "parsed cue sheet");
        if sheet.is_empty() {
            warn!(path = %path.display(), "cue sheet lists no tracks");
        }
        Ok(sheet)
    }

    /// Parse cue sheet text.
    ///
    /// A `TITLE` sets the pending title and a `PERFORMER` turns it into a
    /// track. Two `TITLE`s without a `PERFORMER` in between are an error. A
    /// trailing `TITLE`, or a `PERFORMER` with no pending title, is dropped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tracks = Vec::new();
        let mut pending: Option<(usize, String)> = None;

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.trim_start_matches('\u{feff}');
            let Some(caps) = DIRECTIVE.captures(line) else {
                continue;
            };
            let value = unquote(&caps[2]).to_string();

            match &caps[1] {
                "TITLE" => {
                    if let Some((prev_line, prev)) = &pending {
                        return Err(Error::Parse {
                            line: line_no,
                            message: format!(
                                "TITLE {value:?} follows TITLE {prev:?} (line {prev_line}) without a PERFORMER"
                            ),
                        });
                    }
                    pending = Some((line_no, value));
                }
                _ => {
                    if let Some((_, title)) = pending.take() {
                        tracks.push(Track::new(value, title));
                    }
                }
            }
        }

        Ok(Self { tracks })
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Whether any played track is the same song as `track`.
    pub fn contains<T: TrackIdentity + ?Sized>(&self, track: &T) -> bool {
        self.tracks.iter().any(|t| t.same_song(track))
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
