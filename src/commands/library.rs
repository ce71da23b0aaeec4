use crate::context::Context;
use crate::display::{NoDecoration, NoHighlight, SubstringHighlighter, TrackColumns, track_details};
use crate::error::Result;

pub(super) fn now(ctx: &mut Context) -> Result<Vec<String>> {
    let track = ctx.now_playing()?;
    Ok(ctx.renderer().render_details(&track_details(&track)))
}

pub(super) fn rating(ctx: &mut Context, value: Option<i64>) -> Result<Vec<String>> {
    let mut track = ctx.now_playing()?;
    if let Some(rating) = value {
        ctx.store.set_rating(track.id, rating)?;
        track = ctx.store.track_by_id(track.id)?;
    }
    Ok(vec![format!("{track}: {}/5", track.rating)])
}

/// Changing the genre rewrites the file's tag first, so a file that cannot
/// be written leaves the library untouched.
pub(super) fn genre(ctx: &mut Context, value: Option<&str>, write_tags: bool) -> Result<Vec<String>> {
    let track = ctx.now_playing()?;
    let Some(genre) = value else {
        return Ok(vec![format!("{track}: {}", track.genre)]);
    };

    if write_tags {
        ctx.tags.set_genre(&track.path(), genre)?;
    }
    ctx.store.set_genre(track.id, genre)?;
    let track = ctx.store.track_by_id(track.id)?;
    Ok(vec![format!("{track}: {}", track.genre)])
}

pub(super) fn search(ctx: &mut Context, query: &str) -> Result<Vec<String>> {
    let tracks = ctx.store.search(query)?;
    let columns = TrackColumns {
        fields: &ctx.settings.ui.track_fields,
    };
    let renderer = ctx.renderer();
    let lines = if renderer.color {
        renderer.render(&tracks, &columns, &NoDecoration, &SubstringHighlighter::new(query))
    } else {
        renderer.render(&tracks, &columns, &NoDecoration, &NoHighlight)
    };
    Ok(lines)
}
