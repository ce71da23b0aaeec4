//! Audio file tag writing.
//!
//! The library database and the file's own tags are separate copies of the
//! same metadata; commands that change one may need to change the other.

use std::path::Path;

use lofty::config::WriteOptions;
use lofty::prelude::*;
use lofty::tag::Tag;
use tracing::info;

use crate::error::{Error, Result};

/// Writes metadata into audio files.
pub trait TagEditor {
    fn set_genre(&self, path: &Path, genre: &str) -> Result<()>;
}

/// Edits tags in place with `lofty`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyTagEditor;

impl TagEditor for LoftyTagEditor {
    fn set_genre(&self, path: &Path, genre: &str) -> Result<()> {
        let mut tagged = lofty::read_from_path(path)?;

        if tagged.primary_tag().is_none() {
            let tag_type = tagged.primary_tag_type();
            tagged.insert_tag(Tag::new(tag_type));
        }
        let tag = tagged
            .primary_tag_mut()
            .ok_or_else(|| Error::Tag(format!("{} cannot carry tags", path.display())))?;

        tag.set_genre(genre.to_string());
        tag.save_to_path(path, WriteOptions::default())?;
        info!(path = %path.display(), genre, "wrote genre tag");
        Ok(())
    }
}
