//! Manual model preference
//!
//! The last model picked by hand is kept in a small JSON file so that manual
//! mode can reuse it on the next run. The library never reads this file.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use routewise_llm::Catalog;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const FILE_NAME: &str = "preferences.json";

/// Stored preference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    pub selected_model_id: String,
    pub updated_at: DateTime<Utc>,
}

/// JSON file holding the preference
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/routewise/preferences.json`
    pub fn default_location() -> Result<Self> {
        let dir = dirs::config_dir().ok_or_else(|| anyhow!("No config directory on this platform"))?;
        Ok(Self::new(dir.join("routewise").join(FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored preference, or `None` when nothing was saved
    pub fn load(&self) -> Result<Option<Preference>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let preference = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(Some(preference))
    }

    /// Save `model_id` after checking it exists in `catalog`
    pub fn set(&self, model_id: &str, catalog: &Catalog) -> Result<Preference> {
        catalog.require(model_id)?;

        let preference = Preference {
            selected_model_id: model_id.to_string(),
            updated_at: Utc::now(),
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content =
            serde_json::to_string_pretty(&preference).context("Failed to serialize preference")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        debug!(model = model_id, path = %self.path.display(), "Saved model preference");
        Ok(preference)
    }

    /// Remove the file; returns whether there was one
    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)
            .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        Ok(true)
    }
}
