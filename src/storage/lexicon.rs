//! Lexicon files
//!
//! A lexicon lists words whose syllabification should not be left to the
//! rules, stored as TOML `[[entry]]` tables in `.metrica/lexicon.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{LexiconEntry, LexiconSyllabifier, RuleSyllabifier};

#[derive(Debug, Default, Serialize, Deserialize)]
struct LexiconDocument {
    #[serde(default, rename = "entry")]
    entries: Vec<LexiconEntry>,
}

/// Store for the project lexicon
pub struct LexiconStore {
    path: PathBuf,
}

impl LexiconStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all entries; a missing file is an empty lexicon
    pub fn read_all(&self) -> Result<Vec<LexiconEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read lexicon: {}", self.path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse lexicon: {}", self.path.display()))
    }

    /// Parses lexicon TOML
    pub fn parse(content: &str) -> Result<Vec<LexiconEntry>> {
        let document: LexiconDocument = toml::from_str(content)?;
        Ok(document.entries)
    }

    /// Builds a syllabifier that consults the lexicon before the rules
    pub fn syllabifier(&self) -> Result<LexiconSyllabifier<RuleSyllabifier>> {
        let entries = self.read_all()?;

        LexiconSyllabifier::new(entries, RuleSyllabifier)
            .with_context(|| format!("Invalid lexicon entry in {}", self.path.display()))
    }
}
