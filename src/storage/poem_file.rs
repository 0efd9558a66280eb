//! Poem files
//!
//! A poem is either plain text or markdown with YAML frontmatter:
//!
//! ```text
//! ---
//! title: Rima XXI
//! author: Bécquer
//! ---
//! ¿Qué es poesía?, dices mientras clavas
//! ...
//! ```

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const DELIMITER: &str = "---";

/// Optional metadata carried in the frontmatter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoemMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// A poem read from disk or stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemFile {
    /// Where it came from; `None` for stdin
    pub source: Option<PathBuf>,
    pub meta: PoemMeta,
    pub body: String,
}

impl PoemFile {
    /// Reads and parses a poem file
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read poem: {}", path.display()))?;

        let mut poem = Self::parse(&content)
            .with_context(|| format!("Invalid poem file: {}", path.display()))?;
        poem.source = Some(path.to_path_buf());
        Ok(poem)
    }

    /// Reads a poem from any reader (stdin)
    pub fn read_from(mut reader: impl Read) -> Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read poem from stdin")?;

        Self::parse(&content)
    }

    /// Splits off the frontmatter, if present
    pub fn parse(content: &str) -> Result<Self> {
        let (first, rest) = content
            .trim_start()
            .split_once('\n')
            .unwrap_or((content.trim(), ""));

        // Only a bare `---` line opens frontmatter; longer rules are verse text
        if first.trim_end() != DELIMITER {
            return Ok(Self {
                source: None,
                meta: PoemMeta::default(),
                body: content.to_string(),
            });
        }

        let (yaml_end, body_start) = closing_delimiter(rest)
            .ok_or_else(|| anyhow::anyhow!("Missing frontmatter end delimiter (---)"))?;

        let yaml_content = rest[..yaml_end].trim();
        let body = rest[body_start..].trim_start();

        let meta = if yaml_content.is_empty() {
            PoemMeta::default()
        } else {
            serde_yaml::from_str(yaml_content).context("Failed to parse frontmatter")?
        };

        Ok(Self {
            source: None,
            meta,
            body: body.to_string(),
        })
    }

    /// Label used in output: title, file name, or `<stdin>`
    pub fn label(&self) -> String {
        if let Some(title) = &self.meta.title {
            return title.clone();
        }

        self.source
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<stdin>".to_string())
    }
}

/// Byte range of the first line that is exactly `---`
fn closing_delimiter(rest: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            return Some((offset, offset + line.len()));
        }
        offset += line.len();
    }
    None
}
