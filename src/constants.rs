//! Constants for wikinote
//!
//! Folder names, command identifiers and user-facing messages shared by the
//! library and the CLI.

// === File and Directory Names ===

/// Folder (vault-relative) that receives notes created from a selection
pub const RESEARCH_DIR: &str = "Research";

/// Default file extension for notes
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Hidden directory holding plugin data inside the vault
pub const DATA_DIR: &str = ".wikinote";

/// Settings file inside `DATA_DIR`
pub const DATA_FILENAME: &str = "data.json";

/// Default vault directory name under the user's home
pub const DEFAULT_VAULT_DIR: &str = ".wikinote";

/// Environment variable overriding the vault root
pub const ENV_VAULT: &str = "WIKINOTE_VAULT";

// === File Names ===

/// Characters a note file name may not contain
pub const FORBIDDEN_FILENAME_CHARS: [char; 10] = ['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

// === Commands ===

/// Command id of the embed toggle
pub const CMD_TOGGLE_EMBEDDING: &str = "toggle-embedding-notes";

/// Display name of the embed toggle
pub const CMD_TOGGLE_EMBEDDING_NAME: &str = "Toggle embedding of linked notes";

/// Command id of note creation from the selection
pub const CMD_CREATE_FILE: &str = "create-file";

/// Display name of note creation from the selection
pub const CMD_CREATE_FILE_NAME: &str = "Create research note from selection";

// === Settings ===

/// Default value of `mySetting`
pub const DEFAULT_SETTING: &str = "default";

// === Messages ===

/// Banner shown while the candidate name contains a forbidden character
pub const MSG_INVALID_FILE_NAME: &str = "Invalid file name.";

/// Banner shown while a note already exists at the candidate path
pub const MSG_FILE_EXISTS: &str = "File already exists.";

/// Notice issued when `create-file` runs without a selection
pub const MSG_NO_SELECTION: &str = "No text selected.";
