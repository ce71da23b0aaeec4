//! Command handlers.
//!
//! Each handler does its work through the `Context` and returns the lines
//! to print; `main` owns stdout.

mod library;
mod playlists;
mod unplayed;

use crate::cli::Command;
use crate::context::Context;
use crate::error::{Error, Result};

pub fn run(ctx: &mut Context, command: &Command) -> Result<Vec<String>> {
    match command {
        Command::Playlists => playlists::list(ctx),
        Command::Create { name } => playlists::create(ctx, name),
        Command::Show {
            playlist,
            mark_playing,
        } => playlists::show(ctx, playlist.as_deref(), *mark_playing),
        Command::Find { path } => playlists::find(ctx, path.as_deref()),
        Command::Add { playlist, tracks } => playlists::add(ctx, playlist, tracks),
        Command::Now => library::now(ctx),
        Command::Rating { value } => library::rating(ctx, *value),
        Command::Genre { value, no_tags } => library::genre(ctx, value.as_deref(), !no_tags),
        Command::Search { query } => library::search(ctx, query),
        Command::Unplayed {
            cue,
            playlist,
            against,
            filter,
        } => unplayed::unplayed(ctx, cue, playlist.as_deref(), against.as_deref(), *filter),
        Command::CopyUnplayed { cue, to, playlist } => {
            unplayed::copy_unplayed(ctx, cue, to, playlist.as_deref())
        }
    }
}

/// Turns "does not exist" into `None`, keeping every other failure.
fn optional<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(Error::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
