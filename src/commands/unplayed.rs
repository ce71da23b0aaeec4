use std::path::Path;

use crate::context::Context;
use crate::cue::CueSheet;
use crate::display::{NoHighlight, StatusDecorator, TrackColumns};
use crate::error::Result;
use crate::reconcile::{Outcome, Request, reconcile};
use crate::store::Playlist;

struct Plan {
    sheet: CueSheet,
    source: Playlist,
    destination: Option<Playlist>,
}

/// Everything is read and looked up before the store is touched.
fn plan(ctx: &Context, cue: &Path, source: Option<&str>, destination: Option<&str>) -> Result<Plan> {
    Ok(Plan {
        sheet: CueSheet::load(cue)?,
        source: ctx.playlist(source)?,
        destination: destination.map(|d| ctx.playlist(Some(d))).transpose()?,
    })
}

fn run(ctx: &mut Context, plan: &Plan, copy: bool, filter: bool) -> Result<Outcome> {
    reconcile(
        &mut ctx.store,
        &Request {
            source: plan.source.id,
            cue: &plan.sheet,
            destination: plan.destination.as_ref().map(|p| p.id),
            copy,
            filter,
        },
    )
}

fn render(ctx: &Context, outcome: &Outcome) -> Vec<String> {
    let columns = TrackColumns {
        fields: &ctx.settings.ui.track_fields,
    };
    ctx.renderer()
        .render(&outcome.rows, &columns, &StatusDecorator, &NoHighlight)
}

pub(super) fn unplayed(
    ctx: &mut Context,
    cue: &Path,
    source: Option<&str>,
    against: Option<&str>,
    filter: bool,
) -> Result<Vec<String>> {
    let plan = plan(ctx, cue, source, against)?;
    let outcome = run(ctx, &plan, false, filter)?;
    Ok(render(ctx, &outcome))
}

pub(super) fn copy_unplayed(
    ctx: &mut Context,
    cue: &Path,
    to: &str,
    source: Option<&str>,
) -> Result<Vec<String>> {
    let plan = plan(ctx, cue, source, Some(to))?;
    let outcome = run(ctx, &plan, true, false)?;

    let mut lines = render(ctx, &outcome);
    if let (Some(report), Some(destination)) = (outcome.report, &plan.destination) {
        lines.push(format!(
            "added {} of {} unplayed tracks ({} in {}) to {}",
            report.added, report.unplayed, report.total, plan.source.name, destination.name
        ));
    }
    Ok(lines)
}
