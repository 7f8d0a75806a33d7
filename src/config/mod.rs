use crate::models::{FixerConfig, Standard};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::fs;

/// Filename of the project-local override file, searched in each open
/// project folder.
const PROJECT_CONFIG_FILE: &str = ".phpfix.yaml";

/// Partial configuration as it appears on disk.
///
/// Every key is optional so a project file can override exactly the keys it
/// sets and inherit the rest from the global file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigOverlay {
    interpreter_path: Option<String>,
    fixer_path: Option<String>,
    standard: Option<Standard>,
    additional_args: Option<Vec<String>>,
    fix_on_save: Option<bool>,
}

impl ConfigOverlay {
    fn apply(self, config: &mut FixerConfig) {
        if let Some(interpreter_path) = self.interpreter_path {
            config.interpreter_path = Some(interpreter_path);
        }
        if let Some(fixer_path) = self.fixer_path {
            config.fixer_path = fixer_path;
        }
        if let Some(standard) = self.standard {
            config.standard = Some(standard);
        }
        if let Some(additional_args) = self.additional_args {
            config.additional_args = additional_args;
        }
        if let Some(fix_on_save) = self.fix_on_save {
            config.fix_on_save = fix_on_save;
        }
    }
}

/// Loads immutable [`FixerConfig`] snapshots from YAML.
///
/// One global file plus an optional `.phpfix.yaml` per project folder;
/// project keys take precedence over global ones. Every load builds a fresh
/// snapshot, so a reload never mutates configuration an in-flight run holds.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a ConfigManager reading the given global config file.
    pub fn new<P: AsRef<Utf8Path>>(config_path: P) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }

    /// Load the global configuration.
    ///
    /// # Returns
    /// The loaded snapshot, or defaults if the file doesn't exist
    pub fn load(&self) -> Result<FixerConfig> {
        let mut config = FixerConfig::default();

        if !self.config_path.exists() {
            tracing::warn!(
                "Config file not found at {}, using defaults",
                self.config_path
            );
            return Ok(config);
        }

        let file_contents = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config: {}", self.config_path))?;

        let overlay: ConfigOverlay = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse config: {}", self.config_path))?;
        overlay.apply(&mut config);

        tracing::info!("Loaded config from {}", self.config_path);
        Ok(config)
    }

    /// Load the global configuration and apply project-local overrides.
    ///
    /// Folders are searched in order; the first `.phpfix.yaml` found wins.
    /// Keys absent from the project file keep their global values.
    pub fn load_for_project(&self, working_folders: &[Utf8PathBuf]) -> Result<FixerConfig> {
        let mut config = self.load()?;

        for folder in working_folders {
            let project_path = folder.join(PROJECT_CONFIG_FILE);
            if !project_path.exists() {
                continue;
            }

            let file_contents = fs::read_to_string(&project_path)
                .with_context(|| format!("Failed to read project config: {project_path}"))?;

            let overlay: ConfigOverlay = serde_yaml_ng::from_str(&file_contents)
                .with_context(|| format!("Failed to parse project config: {project_path}"))?;
            overlay.apply(&mut config);

            tracing::info!("Applied project config from {}", project_path);
            break;
        }

        Ok(config)
    }

    /// Path of the global config file this manager reads.
    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }
}
