use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Reconcile DJ library playlists with cue sheets and the playback daemon.
#[derive(Parser, Debug)]
#[command(name = "cueball")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $CUEBALL_CONFIG_PATH or the XDG location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Library database, overriding the configured one
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List playlists, marking the current and previous ones
    Playlists,

    /// Create an empty playlist
    Create { name: String },

    /// Show a playlist's tracks (default: the current playlist)
    Show {
        playlist: Option<String>,

        /// Mark the track the daemon is playing
        #[arg(long)]
        mark_playing: bool,
    },

    /// Playlists containing the playing track, or the given file
    Find {
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Details of the playing track
    Now,

    /// Tracks of a playlist the cue sheet does not list
    Unplayed {
        cue: PathBuf,

        /// Source playlist (default: the current playlist)
        #[arg(long)]
        playlist: Option<String>,

        /// Only those also missing from this playlist
        #[arg(long)]
        against: Option<String>,

        /// Keep every track and flag the matches instead
        #[arg(long)]
        filter: bool,
    },

    /// Append unplayed tracks to another playlist
    CopyUnplayed {
        cue: PathBuf,

        /// Destination playlist
        #[arg(long)]
        to: String,

        /// Source playlist (default: the current playlist)
        #[arg(long)]
        playlist: Option<String>,
    },

    /// Show or set the playing track's rating (0-5)
    Rating {
        #[arg(allow_negative_numbers = true)]
        value: Option<i64>,
    },

    /// Show or set the playing track's genre
    Genre {
        value: Option<String>,

        /// Leave the audio file's own tags alone
        #[arg(long)]
        no_tags: bool,
    },

    /// Search the library by artist or title
    Search { query: String },

    /// Append tracks to a playlist by id
    Add {
        playlist: String,

        #[arg(required = true)]
        tracks: Vec<String>,
    },
}
