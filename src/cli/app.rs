//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{forms, scan, word};
use crate::domain::RuleSet;
use crate::storage::{Config, Project};

#[derive(Parser)]
#[command(name = "metrica")]
#[command(author, version, about = "Metrical and rhyme analysis of Spanish poems")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new metrica project
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Analyze poems: syllables, rhyme scheme and form
    Scan {
        /// Poem files (reads stdin when empty or `-`)
        files: Vec<PathBuf>,

        /// Form rule set (canonical, draft)
        #[arg(long)]
        rules: Option<RuleSet>,

        /// Show a per-verse breakdown
        #[arg(long)]
        verses: bool,
    },

    /// Show syllables and stress of single words
    Word {
        /// Words to analyze
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List the known poem forms
    Forms {
        /// Form rule set (canonical, draft)
        #[arg(long)]
        rules: Option<RuleSet>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let format = match cli.format {
        Some(format) => format,
        None => Config::load_global()?.default_format.into(),
    };
    let output = Output::new(format, cli.verbose);

    output.verbose("Metrica starting");

    match cli.command {
        Commands::Init { path } => {
            output.verbose_ctx("init", &format!("Initializing project at: {}", path));
            let project = Project::init(&path)?;
            output.verbose_ctx(
                "init",
                &format!("Created .metrica directory at: {}", project.metrica_dir().display()),
            );
            output.success(&format!(
                "Initialized metrica project at {}",
                project.root().display()
            ));
        }

        Commands::Scan {
            files,
            rules,
            verses,
        } => scan::run(&output, &files, rules, verses)?,

        Commands::Word { words } => word::run(&output, &words)?,

        Commands::Forms { rules } => forms::run(&output, rules)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
