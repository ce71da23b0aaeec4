use std::path::Path;

use crate::context::Context;
use crate::display::{NoDecoration, NoHighlight, NowPlayingMark, PlaylistColumns, PlaylistMarks, TrackColumns};
use crate::error::Result;
use crate::store::PlaylistStore;
use crate::track::TrackRef;

use super::optional;

pub(super) fn list(ctx: &mut Context) -> Result<Vec<String>> {
    let playlists = ctx.store.playlists()?;
    let marks = PlaylistMarks {
        current: optional(ctx.store.current_playlist())?.map(|p| p.id),
        previous: optional(ctx.store.previous_playlist())?.map(|p| p.id),
    };
    Ok(ctx
        .renderer()
        .render(&playlists, &PlaylistColumns, &marks, &NoHighlight))
}

pub(super) fn create(ctx: &mut Context, name: &str) -> Result<Vec<String>> {
    let playlist = ctx.store.create_playlist(name)?;
    Ok(ctx.renderer().render_details(&[
        ("id", playlist.id.to_string()),
        ("name", playlist.name),
        ("position", playlist.position.to_string()),
        ("created", playlist.date_created),
        ("modified", playlist.date_modified),
    ]))
}

pub(super) fn show(ctx: &mut Context, playlist: Option<&str>, mark_playing: bool) -> Result<Vec<String>> {
    let playlist = ctx.playlist(playlist)?;
    let tracks = ctx.store.playlist_tracks(playlist.id)?;
    let mark = NowPlayingMark {
        track: if mark_playing {
            ctx.playing_identity()?
        } else {
            None
        },
    };

    let columns = TrackColumns {
        fields: &ctx.settings.ui.track_fields,
    };
    let mut lines = vec![format!("{} (#{})", playlist.name, playlist.id)];
    lines.extend(ctx.renderer().render(&tracks, &columns, &mark, &NoHighlight));
    Ok(lines)
}

pub(super) fn find(ctx: &mut Context, path: Option<&Path>) -> Result<Vec<String>> {
    let track = match path {
        Some(path) => ctx.store.track_by_path(path)?,
        None => ctx.now_playing()?,
    };
    let playlists = ctx.store.playlists_containing(track.id)?;

    let mut lines = vec![track.to_string()];
    lines.extend(
        ctx.renderer()
            .render(&playlists, &PlaylistColumns, &NoDecoration, &NoHighlight),
    );
    Ok(lines)
}

pub(super) fn add(ctx: &mut Context, playlist: &str, tracks: &[String]) -> Result<Vec<String>> {
    let refs = tracks
        .iter()
        .map(|t| t.parse::<TrackRef>())
        .collect::<Result<Vec<_>>>()?;
    let playlist = ctx.playlist(Some(playlist))?;
    let added = ctx.store.add_to_playlist(&refs, playlist.id)?;
    Ok(vec![format!("added {added} tracks to {}", playlist.name)])
}
