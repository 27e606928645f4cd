//! Utility functions for secure path handling

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Resolve a vault-relative path, ensuring it stays within the vault directory.
/// Returns an error if the path attempts to escape the base directory.
pub fn secure_path(base: &Path, relative: &str) -> Result<PathBuf> {
    let mut result = base.to_path_buf();

    for component in relative.split(|c| c == '/' || c == '\\') {
        match component {
            "" | "." => continue,
            ".." => {
                // Popping past the base would leave the vault
                if result == base {
                    return Err(Error::PathEscape(relative.to_string()));
                }
                result.pop();
            }
            _ => {
                // Windows drive prefix (C:)
                if component.len() >= 2 && component.as_bytes()[1] == b':' {
                    return Err(Error::PathEscape(relative.to_string()));
                }
                result.push(component);
            }
        }
    }

    if relative.starts_with('/') || relative.starts_with('\\') {
        return Err(Error::PathEscape(relative.to_string()));
    }

    // Use dunce::canonicalize to avoid UNC prefix on Windows
    if base.exists() && result.exists() {
        let canonical_base = dunce::canonicalize(base).unwrap_or_else(|_| base.to_path_buf());
        let canonical_result = dunce::canonicalize(&result).unwrap_or_else(|_| result.clone());
        if !canonical_result.starts_with(&canonical_base) {
            return Err(Error::PathEscape(relative.to_string()));
        }
    } else if !result.starts_with(base) {
        return Err(Error::PathEscape(relative.to_string()));
    }

    Ok(result)
}

/// Display a path with forward slashes (cross-platform standard)
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
