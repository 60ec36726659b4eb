//! Free-text operator notes.
//!
//! One file, last write wins.  Saves write a temporary file in the same
//! directory and rename it over the old notes; the file on disk always holds
//! either the old or the new text.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

/// The notes file.
#[derive(Debug, Clone)]
pub struct NotesStore {
    path: PathBuf,
}

impl NotesStore {
    /// Notes kept at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the notes file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current notes; empty when nothing has been saved yet.
    pub fn load(&self) -> io::Result<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no notes saved yet");
                Ok(String::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Replace the notes with `text`.
    pub fn save(&self, text: &str) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;
        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;
        info!(path = %self.path.display(), bytes = text.len(), "notes saved");
        Ok(())
    }
}
