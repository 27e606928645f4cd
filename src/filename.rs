//! Note file name validation and candidate path construction

use crate::constants as C;

/// Whether `name` is free of characters that cannot appear in a note file name.
///
/// The empty string passes: it contains no forbidden character.
pub fn is_valid_file_name(name: &str) -> bool {
    !name.contains(&C::FORBIDDEN_FILENAME_CHARS[..])
}

/// Vault-relative path of the note a title would create: `Research/<title>.md`.
/// Surrounding whitespace of the title is dropped.
pub fn candidate_path(title: &str) -> String {
    format!("{}/{}{}", C::RESEARCH_DIR, title.trim(), C::MARKDOWN_EXTENSION)
}

/// First line of a selection, used as the initial title
pub fn title_from_selection(selection: &str) -> &str {
    selection.lines().next().unwrap_or("")
}
