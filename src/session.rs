//! Plugin session
//!
//! A `Session` is one running plugin instance: it owns the embedding flag,
//! the loaded settings and the note store, and dispatches the two editor
//! commands.

use tracing::{debug, info};

use crate::constants as C;
use crate::document::Editor;
use crate::embed;
use crate::flow::NoteCreationFlow;
use crate::settings::Settings;
use crate::store::NoteStore;
use crate::{Error, Result};

/// Commands the session exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandId {
    /// Add or remove the embed marker on checklist links
    ToggleEmbeddingNotes,
    /// Create a research note from the selection
    CreateFile,
}

impl CommandId {
    /// Every command, in registration order
    pub const ALL: [CommandId; 2] = [CommandId::ToggleEmbeddingNotes, CommandId::CreateFile];

    /// Stable command id
    pub fn id(self) -> &'static str {
        match self {
            CommandId::ToggleEmbeddingNotes => C::CMD_TOGGLE_EMBEDDING,
            CommandId::CreateFile => C::CMD_CREATE_FILE,
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            CommandId::ToggleEmbeddingNotes => C::CMD_TOGGLE_EMBEDDING_NAME,
            CommandId::CreateFile => C::CMD_CREATE_FILE_NAME,
        }
    }

    /// Look a command up by id
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.id() == id)
    }

    /// Whether the command can run against `editor`
    pub fn is_available(self, editor: &dyn Editor) -> bool {
        match self {
            CommandId::ToggleEmbeddingNotes => editor.is_markdown(),
            CommandId::CreateFile => !editor.selection().is_empty(),
        }
    }
}

/// One running plugin instance
#[derive(Debug)]
pub struct Session<S> {
    store: S,
    settings: Settings,
    embed_enabled: bool,
}

impl<S: NoteStore> Session<S> {
    /// Start a session; the first toggle embeds
    pub fn new(store: S, settings: Settings) -> Self {
        Self {
            store,
            settings,
            embed_enabled: true,
        }
    }

    /// Direction of the next toggle: `true` adds the embed marker
    pub fn embed_enabled(&self) -> bool {
        self.embed_enabled
    }

    /// Override the direction of the next toggle
    pub fn set_embed_enabled(&mut self, enabled: bool) {
        self.embed_enabled = enabled;
    }

    /// Loaded settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable settings; persist with [`Settings::save`]
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Note store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable note store, for driving a creation flow
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Run `toggle-embedding-notes` on `editor`.
    ///
    /// Rewrites the checklist links of the whole document and flips the
    /// session flag. Returns the number of lines that changed.
    pub fn toggle_embedding_notes<E: Editor>(&mut self, editor: &mut E) -> Result<usize> {
        if !CommandId::ToggleEmbeddingNotes.is_available(&*editor) {
            return Err(Error::NotMarkdown(editor.name().to_string()));
        }

        let changed = embed::count_changes(editor.value(), self.embed_enabled);
        let (text, next) = embed::toggle_embeds(editor.value(), self.embed_enabled);
        info!(
            document = editor.name(),
            embed = self.embed_enabled,
            changed,
            "toggled embedding notes"
        );

        editor.set_value(text);
        self.embed_enabled = next;
        Ok(changed)
    }

    /// Run `create-file`: open a creation flow for the editor's selection.
    /// Drive the returned flow with [`Session::store_mut`].
    pub fn create_file<E: Editor>(&self, editor: &E) -> Result<NoteCreationFlow> {
        let selection = editor.selection();
        if selection.is_empty() {
            debug!(document = editor.name(), "create-file without selection");
            return Err(Error::EmptySelection);
        }
        NoteCreationFlow::open(selection)
    }
}
