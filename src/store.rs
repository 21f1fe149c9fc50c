use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::settings::WizardSettings;

pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<WizardSettings> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No settings file, using defaults");
            return Ok(WizardSettings::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed reading settings file {}", self.path.display()))?;
        let settings: WizardSettings =
            serde_json::from_str(&raw).context("failed parsing settings json")?;
        settings
            .validate()
            .with_context(|| format!("invalid settings in {}", self.path.display()))?;
        debug!(path = %self.path.display(), "Settings loaded");
        Ok(settings)
    }

    /// Writes the settings as pretty JSON, refusing values `load` would reject.
    pub fn save(&self, settings: &WizardSettings) -> Result<()> {
        settings.validate()?;
        let Some(parent) = self.path.parent() else {
            anyhow::bail!("settings path has no parent")
        };
        fs::create_dir_all(parent)?;
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
