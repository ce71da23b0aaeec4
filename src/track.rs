//! Track identity types.
//!
//! Two records describe the same song when their artist and title match
//! exactly. `LibraryTrack` additionally carries its database id, which takes
//! part in equality only when two library rows are compared.

mod model;

pub use model::*;
