//! Cue sheet parsing.
//!
//! Only `TITLE` / `PERFORMER` pairs matter here; every other directive a cue
//! sheet carries (`FILE`, `INDEX`, `REM`, ...) is skipped.

mod parse;

pub use parse::*;

#[cfg(test)]
mod tests;
