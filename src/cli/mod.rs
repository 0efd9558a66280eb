//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `init` | Create `.metrica/` with config and lexicon |
//! | `scan` | Analyze poems from files or stdin |
//! | `word` | Syllables and stress of single words |
//! | `forms` | List the classification catalog |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output:
//! ```bash
//! metrica --verbose scan rima.txt
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod session;
mod scan;
mod word;
mod forms;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
