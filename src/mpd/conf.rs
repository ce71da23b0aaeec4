use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::MpdSettings;
use crate::error::Result;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 6600;

/// The few `mpd.conf` settings needed to reach the daemon and resolve its
/// file paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MpdConf {
    pub bind_to_address: Option<String>,
    pub port: Option<u16>,
    pub password: Option<String>,
    pub music_directory: Option<PathBuf>,
}

impl MpdConf {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        debug!(path = %path.display(), "read mpd.conf");
        Ok(Self::parse(&text))
    }

    /// Top-level `key value` lines only; blocks such as `audio_output { }`
    /// are skipped, as is anything after `#`.
    pub fn parse(text: &str) -> Self {
        let mut conf = MpdConf::default();
        let mut depth = 0usize;

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.starts_with('}') {
                depth = depth.saturating_sub(1);
                continue;
            }
            if line.ends_with('{') {
                depth += 1;
                continue;
            }
            if depth > 0 {
                continue;
            }

            let Some((key, rest)) = line.split_once(char::is_whitespace) else {
                continue;
            };
            let Some(value) = value(rest) else {
                continue;
            };

            match key {
                // The daemon may listen on several addresses; the first wins.
                "bind_to_address" if conf.bind_to_address.is_none() => {
                    conf.bind_to_address = Some(value.to_string());
                }
                "port" => match value.parse() {
                    Ok(port) => conf.port = Some(port),
                    Err(_) => warn!(value, "ignoring invalid mpd.conf port"),
                },
                // `password "secret@read,add,control"`
                "password" if conf.password.is_none() => {
                    let secret = value.split('@').next().unwrap_or(value);
                    conf.password = Some(secret.to_string());
                }
                "music_directory" => conf.music_directory = Some(expand_home(value)),
                _ => {}
            }
        }

        conf
    }
}

/// A quoted value up to its closing quote, or a bare word.
fn value(rest: &str) -> Option<&str> {
    let rest = rest.trim_start();
    if let Some(quoted) = rest.strip_prefix('"') {
        return quoted.split_once('"').map(|(v, _)| v);
    }
    rest.split(|c: char| c.is_whitespace() || c == '#')
        .next()
        .filter(|v| !v.is_empty())
}

fn expand_home(value: &str) -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    match (value, home) {
        ("~", Some(home)) => home,
        (v, Some(home)) if v.starts_with("~/") => home.join(&v[2..]),
        (v, _) => PathBuf::from(v),
    }
}

/// Unix sockets (plain or abstract) and the wildcard address cannot be
/// dialled over TCP.
fn dialable(address: &str) -> bool {
    address != "any" && !address.starts_with('/') && !address.starts_with('~') && !address.starts_with('@')
}

/// Where and how to reach the daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MpdEndpoint {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
    /// Root of the daemon's relative file paths.
    pub music_directory: Option<PathBuf>,
}

impl MpdEndpoint {
    /// Settings first, then the configured `mpd.conf`, then defaults.
    pub fn resolve(settings: &MpdSettings) -> Result<Self> {
        let conf = match &settings.config_file {
            Some(path) => MpdConf::load(path)?,
            None => MpdConf::default(),
        };
        Ok(Self::merge(settings, &conf))
    }

    pub fn merge(settings: &MpdSettings, conf: &MpdConf) -> Self {
        let host = settings
            .host
            .clone()
            .or_else(|| {
                conf.bind_to_address
                    .as_deref()
                    .filter(|a| dialable(a))
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        Self {
            host,
            port: settings.port.or(conf.port).unwrap_or(DEFAULT_PORT),
            password: settings.password.clone().or_else(|| conf.password.clone()),
            music_directory: settings
                .music_directory
                .clone()
                .or_else(|| conf.music_directory.clone()),
        }
    }

    /// Absolute path of a file the daemon reports relative to its root.
    pub fn local_path(&self, file: &str) -> PathBuf {
        match &self.music_directory {
            Some(root) => root.join(file),
            None => PathBuf::from(file),
        }
    }
}
