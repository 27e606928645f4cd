//! Note creation flow
//!
//! Turning a selection into a research note is modelled as a small state
//! machine. Events (input edits, key presses, submit, cancel) go through the
//! pure [`transition`] function; [`NoteCreationFlow`] drives it against a
//! [`NoteStore`] and performs the single file creation it may ask for.
//!
//! ```text
//! Editing ──edit/key──▶ Invalid | Collision | Ready
//!    ▲                      │         │         │
//!    └──────── edit/key ────┴─────────┴─────────┘
//! Ready ──submit──▶ Created        any ──cancel──▶ Abandoned
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::constants as C;
use crate::filename::{candidate_path, is_valid_file_name, title_from_selection};
use crate::store::NoteStore;
use crate::{Error, Result};

/// State of a note creation flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Opened with a valid title; nothing checked against storage yet
    Editing,
    /// Title contains a forbidden character
    Invalid,
    /// A note already exists at the candidate path
    Collision,
    /// Title is valid and the candidate path is free
    Ready,
    /// The note was written (terminal)
    Created,
    /// Closed without creating (terminal)
    Abandoned,
}

impl FlowState {
    /// Whether the flow has ended
    pub fn is_terminal(self) -> bool {
        matches!(self, FlowState::Created | FlowState::Abandoned)
    }

    /// Inline message shown for this state, if any
    pub fn banner(self) -> Option<&'static str> {
        match self {
            FlowState::Invalid => Some(C::MSG_INVALID_FILE_NAME),
            FlowState::Collision => Some(C::MSG_FILE_EXISTS),
            _ => None,
        }
    }
}

/// Input to the flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// The title field now holds this value
    InputChanged(String),
    /// A key was pressed in the title field
    KeyPressed,
    /// The user confirmed
    Submit,
    /// The dialog was closed
    Cancel,
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Create the note at this vault-relative path
    Create { path: String },
}

/// Classify a title: `Invalid`, `Collision` or `Ready`
pub fn evaluate<F>(title: &str, exists: F) -> FlowState
where
    F: FnOnce(&str) -> bool,
{
    let title = title.trim();
    if !is_valid_file_name(title) {
        FlowState::Invalid
    } else if exists(&candidate_path(title)) {
        FlowState::Collision
    } else {
        FlowState::Ready
    }
}

/// Compute the next state for `event`.
///
/// `input` is the title field after the event has been applied. Terminal
/// states absorb every event. A submit that evaluates to `Ready` stays in
/// `Ready` and asks for [`Effect::Create`]; the driver moves to `Created`
/// once the write succeeded.
pub fn transition<F>(state: FlowState, input: &str, event: &FlowEvent, exists: F) -> (FlowState, Option<Effect>)
where
    F: FnOnce(&str) -> bool,
{
    if state.is_terminal() {
        return (state, None);
    }

    match event {
        FlowEvent::Cancel => (FlowState::Abandoned, None),
        FlowEvent::InputChanged(_) | FlowEvent::KeyPressed => (evaluate(input, exists), None),
        FlowEvent::Submit => match evaluate(input, exists) {
            FlowState::Ready => (
                FlowState::Ready,
                Some(Effect::Create {
                    path: candidate_path(input),
                }),
            ),
            other => (other, None),
        },
    }
}

/// A running note creation flow for one selection
#[derive(Debug, Clone)]
pub struct NoteCreationFlow {
    selection: String,
    input: String,
    state: FlowState,
    created: Option<PathBuf>,
}

impl NoteCreationFlow {
    /// Open the flow for `selection`.
    ///
    /// The title field starts with the first line of the selection. An empty
    /// selection never opens a flow.
    pub fn open(selection: impl Into<String>) -> Result<Self> {
        let selection = selection.into();
        if selection.is_empty() {
            return Err(Error::EmptySelection);
        }

        let input = title_from_selection(&selection).to_string();
        let state = if is_valid_file_name(&input) {
            FlowState::Editing
        } else {
            FlowState::Invalid
        };
        debug!(title = %input, ?state, "creation flow opened");

        Ok(Self {
            selection,
            input,
            state,
            created: None,
        })
    }

    /// Current state
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Current content of the title field
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Full selected text the note will contain
    pub fn selection(&self) -> &str {
        &self.selection
    }

    /// Message to render next to the title field
    pub fn banner(&self) -> Option<&'static str> {
        self.state.banner()
    }

    /// Vault-relative path the current title maps to
    pub fn candidate_path(&self) -> String {
        candidate_path(&self.input)
    }

    /// Where the note was written, once `Created`
    pub fn created_path(&self) -> Option<&Path> {
        self.created.as_deref()
    }

    /// Feed one event into the flow.
    ///
    /// Returns the new state. Storage failures while writing the note are
    /// returned as errors; a file that appeared after the existence probe
    /// moves the flow to `Collision`.
    pub fn handle<S: NoteStore>(&mut self, event: FlowEvent, store: &mut S) -> Result<FlowState> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        if let FlowEvent::InputChanged(value) = &event {
            self.input = value.clone();
        }

        let (next, effect) = transition(self.state, &self.input, &event, |path| store.exists(path));
        if next != self.state {
            debug!(from = ?self.state, to = ?next, "creation flow transition");
        }
        self.state = next;

        if event == FlowEvent::Submit && effect.is_none() {
            warn!(path = %self.candidate_path(), state = ?self.state, "note creation refused");
        }

        if let Some(Effect::Create { path }) = effect {
            match store.create(&path, &self.selection) {
                Ok(full_path) => {
                    info!(path = %path, "research note created");
                    self.created = Some(full_path);
                    self.state = FlowState::Created;
                }
                Err(e) if e.is_already_exists() => {
                    warn!(path = %path, "note appeared before it could be created");
                    self.state = FlowState::Collision;
                    return Err(e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(self.state)
    }

    /// Submit the flow, failing with the current banner if nothing was created
    pub fn confirm<S: NoteStore>(&mut self, store: &mut S) -> Result<PathBuf> {
        self.handle(FlowEvent::Submit, store)?;
        match (&self.created, self.state.banner()) {
            (Some(path), _) => Ok(path.clone()),
            (None, Some(banner)) => Err(Error::Refused(banner)),
            (None, None) => Err(Error::Refused("Flow closed without creating a note.")),
        }
    }
}
