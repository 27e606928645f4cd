//! Editor documents
//!
//! Commands act on an [`Editor`]: a text buffer with a selection. `Document`
//! is the in-memory implementation, optionally backed by a file on disk.

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::constants as C;
use crate::Result;

/// Text buffer the commands operate on
pub trait Editor {
    /// Display name of the document
    fn name(&self) -> &str;

    /// Whether the document is rendered as markdown
    fn is_markdown(&self) -> bool;

    /// Full document text
    fn value(&self) -> &str;

    /// Replace the full document text
    fn set_value(&mut self, text: String);

    /// Currently selected text (empty when nothing is selected)
    fn selection(&self) -> &str;
}

/// In-memory document, optionally loaded from and saved to a file
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    path: Option<PathBuf>,
    text: String,
    selection: Range<usize>,
    dirty: bool,
}

impl Document {
    /// Create an unsaved document
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            text: text.into(),
            selection: 0..0,
            dirty: false,
        }
    }

    /// Load a document from disk
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let text = fs::read_to_string(&path)?;
        let name = crate::util::display_path(&path);
        Ok(Self {
            name,
            path: Some(path),
            text,
            selection: 0..0,
            dirty: false,
        })
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether the text changed since it was loaded or last saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Select a byte range. Returns false (selection unchanged) if the range
    /// is out of bounds or splits a character.
    pub fn select(&mut self, range: Range<usize>) -> bool {
        if self.text.get(range.clone()).is_none() {
            return false;
        }
        self.selection = range;
        true
    }

    /// Select the whole document
    pub fn select_all(&mut self) {
        self.selection = 0..self.text.len();
    }

    /// Write the text back to the backing file if it changed.
    /// Returns whether anything was written.
    pub fn save(&mut self) -> Result<bool> {
        match &self.path {
            Some(path) if self.dirty => {
                fs::write(path, &self.text)?;
                self.dirty = false;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

impl Editor for Document {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_markdown(&self) -> bool {
        self.name.to_lowercase().ends_with(C::MARKDOWN_EXTENSION)
    }

    fn value(&self) -> &str {
        &self.text
    }

    fn set_value(&mut self, text: String) {
        if text != self.text {
            self.text = text;
            self.dirty = true;
        }
        self.selection = 0..0;
    }

    fn selection(&self) -> &str {
        &self.text[self.selection.clone()]
    }
}
