//! Project management
//!
//! Handles project initialization and provides access to the lexicon.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::config::PROJECT_DIR;
use super::{Config, LexiconStore};

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Not in a metrica project. Run 'metrica init' first.")]
    NotInProject,
}

const DEFAULT_CONFIG: &str = r#"# Metrica configuration

# Form rules: "canonical" or "draft"
rules = "canonical"

# Verses with more syllables than this are arte mayor
major_art_threshold = 8

# Characters stripped in addition to . ; , ! ¡ ? ¿ :
extra_punctuation = []

# Lexicon of words with fixed syllabification (defaults to .metrica/lexicon.toml)
# lexicon = "lexicon.toml"
"#;

const DEFAULT_LEXICON: &str = r#"# Words whose syllables the rules get wrong for your corpus
#
# [[entry]]
# word = "guion"
# syllables = ["guion"]
# stressed = 0
"#;

/// A Metrica project
pub struct Project {
    root: PathBuf,
    config: Config,
}

impl Project {
    /// Opens an existing project at the given path
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.join(PROJECT_DIR).is_dir() {
            return Err(ProjectError::NotInProject.into());
        }

        let config = Config::for_project(&root)?;

        Ok(Self { root, config })
    }

    /// Opens the project at the current directory or a parent
    pub fn open_current() -> Result<Self> {
        let root = Config::find_project_root().ok_or(ProjectError::NotInProject)?;

        Self::open(root)
    }

    /// Initializes a new project at the given path, keeping existing files
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let metrica_dir = root.join(PROJECT_DIR);

        fs::create_dir_all(&metrica_dir).with_context(|| {
            format!("Failed to create .metrica directory: {}", metrica_dir.display())
        })?;

        let config_path = metrica_dir.join("config.toml");
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        }

        let lexicon_path = metrica_dir.join("lexicon.toml");
        if !lexicon_path.exists() {
            fs::write(&lexicon_path, DEFAULT_LEXICON)
                .with_context(|| format!("Failed to write lexicon: {}", lexicon_path.display()))?;
        }

        Self::open(root)
    }

    /// Returns the project root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the .metrica directory path
    pub fn metrica_dir(&self) -> PathBuf {
        self.root.join(PROJECT_DIR)
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the lexicon store, if a lexicon is configured or present
    pub fn lexicon_store(&self) -> Option<LexiconStore> {
        self.config.lexicon_path().map(LexiconStore::new)
    }
}
