use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then lets environment
/// variables (prefix `CUEBALL__`) override it, and falls back to struct
/// defaults.
impl Settings {
    /// Load settings from an optional config file and the environment.
    ///
    /// See `ConfigFile::locate` for which file is read.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(source) = ConfigFile::locate(explicit) {
            debug!(path = %source.path.display(), required = source.required, "reading config file");
            builder = builder.add_source(
                ::config::File::from(source.path.as_path()).required(source.required),
            );
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("CUEBALL")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.mpd.port == Some(0) {
            return Err("mpd.port must be between 1 and 65535".to_string());
        }
        if self.ui.track_fields.is_empty() {
            return Err("ui.track_fields must name at least one field".to_string());
        }
        if self.ui.column_gap == 0 {
            return Err("ui.column_gap must be >= 1".to_string());
        }
        Ok(())
    }
}

/// Where settings are read from, and whether the file has to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ConfigFile {
    pub(super) path: PathBuf,
    pub(super) required: bool,
}

impl ConfigFile {
    /// A path named on the command line must exist. Otherwise
    /// `CUEBALL_CONFIG_PATH`, then `$XDG_CONFIG_HOME/cueball/config.toml`, then
    /// `~/.config/cueball/config.toml` are tried and may be absent. Empty
    /// variables count as unset.
    pub(super) fn locate(explicit: Option<&Path>) -> Option<Self> {
        if let Some(path) = explicit {
            return Some(Self {
                path: path.to_path_buf(),
                required: true,
            });
        }

        let path = non_empty_var("CUEBALL_CONFIG_PATH").map(PathBuf::from).or_else(|| {
            let config_home = non_empty_var("XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .or_else(|| non_empty_var("HOME").map(|home| PathBuf::from(home).join(".config")))?;
            Some(config_home.join("cueball").join("config.toml"))
        })?;
        Some(Self {
            path,
            required: false,
        })
    }
}

fn non_empty_var(key: &str) -> Option<OsString> {
    env::var_os(key).filter(|v| !v.is_empty())
}
