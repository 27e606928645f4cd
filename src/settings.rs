//! Persisted plugin settings
//!
//! Settings live in `<vault>/.wikinote/data.json`. Loading merges whatever is
//! stored over the defaults; keys this version does not know are kept and
//! written back on save.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants as C;
use crate::Result;

/// Plugin settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Free-form setting exposed on the settings page
    #[serde(default = "default_setting")]
    pub my_setting: String,

    /// Stored keys not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_setting() -> String {
    C::DEFAULT_SETTING.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            my_setting: default_setting(),
            extra: Map::new(),
        }
    }
}

impl Settings {
    /// Location of the settings file for a vault
    pub fn path_for(vault: &Path) -> PathBuf {
        vault.join(C::DATA_DIR).join(C::DATA_FILENAME)
    }

    /// Load settings for a vault, falling back to defaults when nothing is stored
    pub fn load(vault: &Path) -> Result<Self> {
        let path = Self::path_for(vault);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Write settings for a vault
    pub fn save(&self, vault: &Path) -> Result<()> {
        let path = Self::path_for(vault);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        tracing::debug!(path = %crate::util::display_path(&path), "settings saved");
        Ok(())
    }
}
