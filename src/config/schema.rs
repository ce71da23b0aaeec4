use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/cueball/config.toml` or `~/.config/cueball/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CUEBALL__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub mpd: MpdSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Path of the DJ software's library database.
    pub path: PathBuf,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        let home = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
        Self {
            path: home.join(".mixxx").join("mixxxdb.sqlite"),
        }
    }
}

/// Playback daemon endpoint. Unset values are taken from `config_file`
/// (an `mpd.conf`) when one is given, then from built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MpdSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub password: Option<String>,
    /// Root the daemon's relative file paths are resolved against.
    pub music_directory: Option<PathBuf>,
    /// The daemon's own configuration file.
    pub config_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Colored tags and highlights.
    pub color: bool,

    /// Which track fields to show, and in what order.
    ///
    /// Example: ["position", "artist", "title", "bpm"]
    pub track_fields: Vec<TrackField>,

    /// Spaces between columns.
    pub column_gap: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            color: true,
            track_fields: vec![
                TrackField::Position,
                TrackField::Artist,
                TrackField::Title,
                TrackField::Genre,
                TrackField::Bpm,
                TrackField::Rating,
            ],
            column_gap: 2,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackField {
    Id,
    /// Position inside the listed playlist; empty elsewhere.
    #[serde(alias = "pos")]
    Position,
    Artist,
    Title,
    Genre,
    #[serde(alias = "tempo")]
    Bpm,
    #[serde(alias = "stars")]
    Rating,
    Bitrate,
    #[serde(alias = "sample-rate", alias = "sample_rate")]
    Samplerate,
    Comment,
    Filename,
    Path,
}
