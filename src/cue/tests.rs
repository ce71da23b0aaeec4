use super::*;
use crate::error::Error;
use crate::track::{LibraryTrack, Track};

const SET: &str = r#"REM DATE 2024-05-04
REM COMMENT "recorded live"
FILE "set.wav" WAVE
  TRACK 01 AUDIO
    TITLE "Porcelain"
    PERFORMER "Moby"
    INDEX 01 00:00:00
  TRACK 02 AUDIO
    TITLE "Windowlicker"
    PERFORMER "Aphex Twin"
    INDEX 01 05:12:40
"#;

#[test]
fn parses_title_performer_pairs_in_order() {
    let sheet = CueSheet::parse(r#"TITLE "A"
PERFORMER "X"
TITLE "B"
PERFORMER "Y"
"#)
    .unwrap();
    assert_eq!(sheet.tracks(), &[Track::new("X", "A"), Track::new("Y", "B")]);
    assert_eq!(sheet.len(), 2);
}

#[test]
fn ignores_unrelated_directives_and_indentation() {
    let sheet = CueSheet::parse(SET).unwrap();
    assert_eq!(
        sheet.tracks(),
        &[
            Track::new("Moby", "Porcelain"),
            Track::new("Aphex Twin", "Windowlicker")
        ]
    );
}

#[test]
fn consecutive_titles_are_a_parse_error() {
    let err = CueSheet::parse("TITLE \"A\"\nTITLE \"B\"\nPERFORMER \"X\"\n").unwrap_err();
    match err {
        Error::Parse { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn titles_separated_by_other_lines_are_still_consecutive() {
    let err = CueSheet::parse("TITLE \"A\"\nINDEX 01 00:00:00\nTITLE \"B\"\n").unwrap_err();
    assert!(matches!(err, Error::Parse { line: 3, .. }));
}

#[test]
fn trailing_title_is_dropped_silently() {
    let sheet = CueSheet::parse("TITLE \"A\"\nPERFORMER \"X\"\nTITLE \"B\"\n").unwrap();
    assert_eq!(sheet.tracks(), &[Track::new("X", "A")]);
}

#[test]
fn performer_without_pending_title_emits_nothing() {
    let sheet = CueSheet::parse("PERFORMER \"DJ Someone\"\nTITLE \"A\"\nPERFORMER \"X\"\n").unwrap();
    assert_eq!(sheet.tracks(), &[Track::new("X", "A")]);
}

#[test]
fn keywords_are_case_sensitive_and_values_may_be_unquoted() {
    let sheet =
        CueSheet::parse("title \"nope\"\nTITLE  Bare Title  \r\nPERFORMER\tBare Artist\n").unwrap();
    assert_eq!(sheet.tracks(), &[Track::new("Bare Artist", "Bare Title")]);
}

#[test]
fn empty_input_yields_empty_sheet() {
    let sheet = CueSheet::parse("").unwrap();
    assert!(sheet.is_empty());
    assert_eq!(sheet.len(), 0);
}

#[test]
fn loading_the_same_file_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("set.cue");
    std::fs::write(&path, SET).unwrap();

    let first = CueSheet::load(&path).unwrap();
    let second = CueSheet::load(&path).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn load_tolerates_latin1_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.cue");
    let mut bytes = b"TITLE \"Caf".to_vec();
    bytes.push(0xe9);
    bytes.extend_from_slice(b"\"\nPERFORMER \"X\"\n");
    std::fs::write(&path, bytes).unwrap();

    let sheet = CueSheet::load(&path).unwrap();
    assert_eq!(sheet.len(), 1);
    assert_eq!(sheet.tracks()[0].artist, "X");
}

#[test]
fn load_reports_missing_files_as_io_errors() {
    let err = CueSheet::load(std::path::Path::new("/nonexistent/set.cue")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn contains_matches_any_track_kind_by_exact_artist_and_title() {
    let sheet = CueSheet::parse(SET).unwrap();

    assert!(sheet.contains(&Track::new("Aphex Twin", "Windowlicker")));
    let row = LibraryTrack {
        id: 40,
        artist: "Aphex Twin".into(),
        title: "Windowlicker".into(),
        ..LibraryTrack::default()
    };
    assert!(sheet.contains(&row));

    assert!(!sheet.contains(&Track::new("Aphex Twin", "windowlicker")));
    assert!(!sheet.contains(&Track::new("Moby", "Windowlicker")));
    assert!(!CueSheet::default().contains(&row));
}
