//! Column-aligned text rendering.
//!
//! Rendering knows nothing about reconciliation or playback: what goes into
//! a row (`Columns`), which tag it carries (`Decorator`) and which parts are
//! emphasised (`Highlighter`) are all supplied by the caller.

mod columns;
mod render;

pub use columns::*;
pub use render::*;

#[cfg(test)]
mod tests;
