//! Error taxonomy shared by every command.
//!
//! Nothing is recovered locally: errors bubble up to `main`, which prints
//! them and exits non-zero.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Requested playlist, track or row does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Out-of-range input, always raised before anything is mutated.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Malformed cue sheet.
    #[error("cue sheet line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A value of the wrong kind was handed to an insert or comparison.
    #[error("type error: {0}")]
    Type(String),

    /// Store or playback daemon unreachable, or the daemon refused a command.
    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// An audio file that could not be read, tagged or saved.
    #[error("tag error: {0}")]
    Tag(String),
}

impl From<lofty::error::LoftyError> for Error {
    fn from(e: lofty::error::LoftyError) -> Self {
        Error::Tag(e.to_string())
    }
}

impl From<mpd::error::Error> for Error {
    fn from(e: mpd::error::Error) -> Self {
        Error::Connection(format!("mpd: {e}"))
    }
}
