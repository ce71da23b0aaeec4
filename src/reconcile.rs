//! Reconciliation of playlists against a played set.
//!
//! Works out which tracks of a playlist the cue sheet says were never
//! played, and optionally which of those a second playlist still lacks.
//! Every comparison here is by artist and title; database ids are ignored.

mod engine;

pub use engine::*;
