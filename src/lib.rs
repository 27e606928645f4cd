pub mod cli;
pub mod constants;
pub mod document;
pub mod embed;
pub mod error;
pub mod filename;
pub mod flow;
pub mod session;
pub mod settings;
pub mod store;
pub mod util;

pub use cli::{Cli, Command};
pub use document::{Document, Editor};
pub use embed::{parse_checklist_link, toggle_embeds, ChecklistLink};
pub use error::{Error, Result};
pub use filename::{candidate_path, is_valid_file_name};
pub use flow::{FlowEvent, FlowState, NoteCreationFlow};
pub use session::{CommandId, Session};
pub use settings::Settings;
pub use store::{NoteStore, VaultStore};

use std::path::PathBuf;

/// Get the default vault path in user's home directory
pub fn default_vault_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(constants::DEFAULT_VAULT_DIR))
}

/// Resolve the vault root: explicit argument, then `WIKINOTE_VAULT`, then
/// the default under the home directory, then the current directory.
pub fn vault_path(explicit: Option<&str>) -> PathBuf {
    if let Some(path) = explicit.filter(|s| !s.is_empty()) {
        return PathBuf::from(path);
    }

    // Treat empty strings as unset
    if let Some(path) = std::env::var(constants::ENV_VAULT).ok().filter(|s| !s.is_empty()) {
        return PathBuf::from(path);
    }

    default_vault_path().unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vault_path_priority() {
        std::env::set_var(constants::ENV_VAULT, "/from/env");
        assert_eq!(vault_path(Some("/explicit")), PathBuf::from("/explicit"));
        assert_eq!(vault_path(None), PathBuf::from("/from/env"));

        std::env::set_var(constants::ENV_VAULT, "");
        assert_eq!(vault_path(Some("")), default_vault_path().unwrap_or_else(|| PathBuf::from(".")));

        std::env::remove_var(constants::ENV_VAULT);
        assert_eq!(vault_path(None), default_vault_path().unwrap_or_else(|| PathBuf::from(".")));
    }
}
