//! # Storage Layer
//!
//! File-backed inputs for Metrica.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Poems | Plain text, or markdown + YAML frontmatter | anywhere |
//! | Config | TOML | `.metrica/config.toml` |
//! | Lexicon | TOML `[[entry]]` tables | `.metrica/lexicon.toml` |
//!
//! ## Project Structure
//!
//! ```text
//! .metrica/
//! ├── config.toml           # Project configuration
//! └── lexicon.toml          # Fixed syllabifications
//! ```
//!
//! ## Key Types
//!
//! - [`Project`] - Entry point for accessing a Metrica project
//! - [`PoemFile`] - A poem with optional metadata
//! - [`LexiconStore`] - Reads the lexicon into a syllabifier
//! - [`Config`] - Project and global configuration

mod config;
mod lexicon;
mod poem_file;
mod project;

pub use config::{Config, ConfigError, GlobalConfig, OutputFormat, ProjectConfig, PROJECT_DIR};
pub use lexicon::LexiconStore;
pub use poem_file::{PoemFile, PoemMeta};
pub use project::{Project, ProjectError};
