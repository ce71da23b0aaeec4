//! Playback daemon access.
//!
//! Only one question is ever asked of the daemon: which file is playing.
//! The endpoint comes from settings, then from the daemon's own `mpd.conf`,
//! then from built-in defaults.

mod client;
mod conf;

pub use client::*;
pub use conf::*;

#[cfg(test)]
pub(crate) mod fake;
