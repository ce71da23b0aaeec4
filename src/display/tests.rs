use super::*;
use crate::config::TrackField;
use crate::reconcile::{Row, Status};
use crate::store::Playlist;
use crate::track::{LibraryTrack, Track};
use regex::Regex;

fn plain() -> Renderer {
    Renderer {
        gap: 2,
        color: false,
    }
}

fn playlist(id: i64, name: &str, created: &str) -> Playlist {
    Playlist {
        id,
        name: name.into(),
        position: id,
        date_created: created.into(),
        date_modified: created.into(),
    }
}

fn lt(id: i64, artist: &str, title: &str) -> LibraryTrack {
    LibraryTrack {
        id,
        artist: artist.into(),
        title: title.into(),
        ..LibraryTrack::default()
    }
}

fn strip_ansi(s: &str) -> String {
    Regex::new(r"\x1b\[[0-9;]*m").unwrap().replace_all(s, "").into_owned()
}

fn two_playlists() -> Vec<Playlist> {
    vec![
        playlist(1, "Friday", "2024-01-01 10:00:00"),
        playlist(12, "Sat", "2024-01-02 10:00:00"),
    ]
}

#[test]
fn columns_align_to_widest_cell() {
    let lines = plain().render(&two_playlists(), &PlaylistColumns, &NoDecoration, &NoHighlight);
    assert_eq!(
        lines,
        vec![
            "1   Friday  2024-01-01 10:00:00".to_string(),
            "12  Sat     2024-01-02 10:00:00".to_string(),
        ]
    );
}

#[test]
fn tag_follows_padded_last_column() {
    let marks = PlaylistMarks {
        current: Some(12),
        previous: None,
    };
    let lines = plain().render(&two_playlists(), &PlaylistColumns, &marks, &NoHighlight);
    assert_eq!(lines[0], "1   Friday  2024-01-01 10:00:00");
    assert_eq!(lines[1], "12  Sat     2024-01-02 10:00:00  CURRENT");
}

#[test]
fn gap_is_configurable() {
    let renderer = Renderer {
        gap: 1,
        color: false,
    };
    let lines = renderer.render(&two_playlists(), &PlaylistColumns, &NoDecoration, &NoHighlight);
    assert_eq!(lines[1], "12 Sat    2024-01-02 10:00:00");
}

#[test]
fn empty_input_renders_nothing() {
    let lines = plain().render(&[] as &[Playlist], &PlaylistColumns, &NoDecoration, &NoHighlight);
    assert!(lines.is_empty());
}

#[test]
fn playlist_marks_distinguish_current_and_previous() {
    let marks = PlaylistMarks {
        current: Some(1),
        previous: Some(12),
    };
    let p = two_playlists();
    assert_eq!(marks.decorate(&p[0]), Some("CURRENT"));
    assert_eq!(marks.decorate(&p[1]), Some("PREVIOUS"));
    assert_eq!(marks.decorate(&playlist(3, "x", "")), None);
}

#[test]
fn status_decorator_uses_row_status() {
    let flagged = Row {
        track: lt(1, "A", "a"),
        status: Some(Status::Missing),
    };
    let plain_row = Row {
        track: lt(2, "B", "b"),
        status: None,
    };
    assert_eq!(StatusDecorator.decorate(&flagged), Some("MISSING"));
    assert_eq!(StatusDecorator.decorate(&plain_row), None);
}

#[test]
fn now_playing_mark_matches_by_artist_and_title() {
    let mark = NowPlayingMark {
        track: Some(Track::new("A", "a")),
    };
    assert_eq!(mark.decorate(&lt(99, "A", "a")), Some("now playing"));
    assert_eq!(mark.decorate(&lt(99, "A", "A")), None);

    let idle = NowPlayingMark { track: None };
    assert_eq!(idle.decorate(&lt(99, "A", "a")), None);
}

#[test]
fn track_columns_format_each_field() {
    let fields = [
        TrackField::Position,
        TrackField::Artist,
        TrackField::Bpm,
        TrackField::Rating,
        TrackField::Bitrate,
        TrackField::Samplerate,
        TrackField::Path,
    ];
    let track = LibraryTrack {
        artist: " A ".into(),
        bpm: 124.0,
        rating: 7,
        bitrate: 320,
        samplerate: 0,
        directory: "/music".into(),
        filename: "x.mp3".into(),
        position: Some(3),
        ..LibraryTrack::default()
    };
    let cols = TrackColumns { fields: &fields };
    assert_eq!(
        Columns::<LibraryTrack>::columns(&cols, &track),
        vec!["3", "A", "124.0", "*****", "320 kbps", "", "/music/x.mp3"]
    );
}

#[test]
fn track_columns_render_rows_with_status_tags() {
    let fields = [TrackField::Artist, TrackField::Title];
    let rows = vec![
        Row {
            track: lt(1, "Aphex Twin", "Xtal"),
            status: None,
        },
        Row {
            track: lt(2, "Boards", "Roygbiv"),
            status: Some(Status::Unplayed),
        },
    ];
    let lines = plain().render(
        &rows,
        &TrackColumns { fields: &fields },
        &StatusDecorator,
        &NoHighlight,
    );
    assert_eq!(lines[0], "Aphex Twin  Xtal");
    assert_eq!(lines[1], "Boards      Roygbiv  UNPLAYED");
}

#[test]
fn substring_matches_ignore_ascii_case() {
    let h = SubstringHighlighter::new("CAT");
    assert_eq!(h.matches("Cat Power catalog"), vec![(0, 3), (10, 13)]);
    assert!(h.matches("Dog").is_empty());
    assert!(SubstringHighlighter::new("").matches("anything").is_empty());
}

#[test]
fn highlighting_keeps_text_and_alignment() {
    let h = SubstringHighlighter::new("sat");
    assert_eq!(h.highlight("Friday"), "Friday");
    assert_eq!(strip_ansi(&h.highlight("Saturday")), "Saturday");

    let lines = plain().render(&two_playlists(), &PlaylistColumns, &NoDecoration, &h);
    let visible: Vec<String> = lines.iter().map(|l| strip_ansi(l)).collect();
    assert_eq!(visible[1], "12  Sat     2024-01-02 10:00:00");
}

#[test]
fn details_align_labels() {
    let lines = plain().render_details(&[("id", "7".to_string()), ("artist", "A".to_string())]);
    assert_eq!(lines, vec!["id:      7".to_string(), "artist:  A".to_string()]);
}

#[test]
fn colored_tags_still_carry_the_text() {
    let renderer = Renderer::default();
    let marks = PlaylistMarks {
        current: Some(1),
        previous: None,
    };
    let lines = renderer.render(&two_playlists(), &PlaylistColumns, &marks, &NoHighlight);
    assert!(lines[0].contains("CURRENT"));
    assert_eq!(strip_ansi(&lines[0]), "1   Friday  2024-01-01 10:00:00  CURRENT");
}
