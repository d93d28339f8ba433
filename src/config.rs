use crate::format::CaseFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Target case format identifiers are rendered into.
    #[serde(default = "default_target")]
    pub to: CaseFormat,

    /// Explicit source format. When unset, the source is detected per
    /// identifier by trying `source_formats` in order.
    #[serde(default)]
    pub from: Option<CaseFormat>,

    /// Detection order for identifiers with no explicit source format.
    #[serde(default = "default_source_formats")]
    pub source_formats: Vec<CaseFormat>,

    /// Identifiers matching any of these regexes pass through unchanged.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

fn default_target() -> CaseFormat {
    CaseFormat::Underscore
}

fn default_source_formats() -> Vec<CaseFormat> {
    vec![CaseFormat::Underscore, CaseFormat::Hyphen, CaseFormat::Camel]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            to: default_target(),
            from: None,
            source_formats: default_source_formats(),
            ignore_patterns: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        to: Option<CaseFormat>,
        from: Option<CaseFormat>,
        cli_formats: Vec<CaseFormat>,
        cli_patterns: Vec<String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".recase.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(to) = to {
            config.to = to;
        }
        if from.is_some() {
            config.from = from;
        }
        if !cli_formats.is_empty() {
            config.source_formats = cli_formats;
        }
        if !cli_patterns.is_empty() {
            config.ignore_patterns.extend(cli_patterns);
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Fold a loaded file over the current values. A field only overrides
    /// when it differs from the built-in default: a file explicitly setting
    /// `to = "snake"` is indistinguishable from one leaving `to` unset, so
    /// a local config cannot reset the target back to the default over a
    /// global override. Use a CLI flag for that.
    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.to != default_target() {
            self.to = other.to;
        }
        if other.from.is_some() {
            self.from = other.from;
        }
        if other.source_formats != default_source_formats() {
            self.source_formats = other.source_formats;
        }
        if !other.ignore_patterns.is_empty() {
            self.ignore_patterns = other.ignore_patterns;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
