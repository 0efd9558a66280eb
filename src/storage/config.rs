//! Configuration handling for Metrica
//!
//! Configuration is stored in `.metrica/config.toml` (project) and
//! `~/.config/metrica/config.toml` (global).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{RuleSet, Tables, MAJOR_ART_THRESHOLD};

/// Name of the per-project directory
pub const PROJECT_DIR: &str = ".metrica";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Project-level scansion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Form classification rules
    pub rules: RuleSet,

    /// Verses above this syllable count are arte mayor
    pub major_art_threshold: usize,

    /// Lexicon file, relative to the project root
    pub lexicon: Option<PathBuf>,

    /// Characters stripped in addition to the standard punctuation
    pub extra_punctuation: Vec<char>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            rules: RuleSet::Canonical,
            major_art_threshold: MAJOR_ART_THRESHOLD,
            lexicon: None,
            extra_punctuation: vec![],
        }
    }
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,

    /// Worker threads for batch analysis (defaults to one per core)
    pub jobs: Option<usize>,
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Combined configuration (global + project)
#[derive(Debug, Clone)]
pub struct Config {
    pub project: ProjectConfig,
    pub global: GlobalConfig,
    pub project_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from default locations
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let (project, project_root) = Self::load_project()?;

        Ok(Self {
            project,
            global,
            project_root,
        })
    }

    /// Loads configuration for a specific project
    pub fn for_project(project_root: &Path) -> Result<Self> {
        let global = Self::load_global()?;
        let project = Self::load_project_config(project_root)?;

        Ok(Self {
            project,
            global,
            project_root: Some(project_root.to_path_buf()),
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "metrica", "metrica").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads global configuration
    pub fn load_global() -> Result<GlobalConfig> {
        let config_dir = match Self::global_config_dir() {
            Some(dir) => dir,
            None => return Ok(GlobalConfig::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }

    /// Finds and loads project configuration
    fn load_project() -> Result<(ProjectConfig, Option<PathBuf>)> {
        let project_root = Self::find_project_root();

        match project_root {
            Some(root) => {
                let config = Self::load_project_config(&root)?;
                Ok((config, Some(root)))
            }
            None => Ok((ProjectConfig::default(), None)),
        }
    }

    /// Loads project configuration from a specific root
    fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
        let config_path = project_root.join(PROJECT_DIR).join("config.toml");

        if !config_path.exists() {
            return Ok(ProjectConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read project config: {}", config_path.display()))?;

        Self::parse_project(&content).context("Failed to parse project config")
    }

    /// Parses and validates project configuration
    pub fn parse_project(content: &str) -> Result<ProjectConfig, ConfigError> {
        let config: ProjectConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        if config.major_art_threshold == 0 {
            return Err(ConfigError::Invalid(
                "major_art_threshold must be at least 1".to_string(),
            ));
        }

        if let Some(c) = config.extra_punctuation.iter().find(|c| c.is_whitespace()) {
            return Err(ConfigError::Invalid(format!(
                "extra_punctuation cannot contain whitespace ({:?})",
                c
            )));
        }

        Ok(config)
    }

    /// Finds the project root by looking for `.metrica/` directory
    pub fn find_project_root() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let metrica_dir = current.join(PROJECT_DIR);
            if metrica_dir.is_dir() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Resolves the lexicon file, if one is configured or present
    ///
    /// An explicit `lexicon` setting is resolved against the project root;
    /// otherwise `.metrica/lexicon.toml` is used when it exists.
    pub fn lexicon_path(&self) -> Option<PathBuf> {
        let root = self.project_root.as_deref()?;

        match &self.project.lexicon {
            Some(path) if path.is_absolute() => Some(path.clone()),
            Some(path) => Some(root.join(path)),
            None => {
                let default = root.join(PROJECT_DIR).join("lexicon.toml");
                default.is_file().then_some(default)
            }
        }
    }

    /// Builds the scansion tables for this configuration
    pub fn tables(&self, rules: Option<RuleSet>) -> Tables {
        Tables::new(rules.unwrap_or(self.project.rules))
            .with_major_art_threshold(self.project.major_art_threshold)
            .with_extra_punctuation(&self.project.extra_punctuation)
    }
}
