//! Analysis setup shared by the scansion commands

use anyhow::Result;

use super::output::Output;
use crate::domain::{RuleSet, RuleSyllabifier, Syllabifier, Tables};
use crate::storage::{Config, LexiconStore, Project, ProjectError};

/// Loaded configuration, tables and syllabifier for one invocation
pub struct Session {
    pub config: Config,
    pub tables: Tables,
    pub rules: RuleSet,
    syllabifier: Box<dyn Syllabifier>,
}

impl Session {
    /// Loads the current project, or the defaults outside of one
    pub fn load(output: &Output, rules: Option<RuleSet>) -> Result<Self> {
        let (config, lexicon) = match Project::open_current() {
            Ok(project) => {
                output.verbose_ctx(
                    "config",
                    &format!("Using project at: {}", project.root().display()),
                );
                (project.config().clone(), project.lexicon_store())
            }
            Err(e) if e.downcast_ref::<ProjectError>().is_some() => {
                output.verbose_ctx("config", "No project found, using defaults");
                (Config::load()?, None)
            }
            Err(e) => return Err(e),
        };

        let rules = rules.unwrap_or(config.project.rules);
        let tables = config.tables(Some(rules));
        output.verbose_ctx(
            "config",
            &format!(
                "Rule set: {}, arte mayor above {} syllables",
                rules,
                tables.major_art_threshold()
            ),
        );

        let syllabifier: Box<dyn Syllabifier> = match lexicon {
            Some(store) => Self::lexicon_syllabifier(output, &store)?,
            None => Box::new(RuleSyllabifier),
        };

        Ok(Self {
            config,
            tables,
            rules,
            syllabifier,
        })
    }

    fn lexicon_syllabifier(output: &Output, store: &LexiconStore) -> Result<Box<dyn Syllabifier>> {
        let lexicon = store.syllabifier()?;
        output.verbose_ctx(
            "lexicon",
            &format!(
                "Loaded {} entries from {}",
                lexicon.len(),
                store.path().display()
            ),
        );
        Ok(Box::new(lexicon))
    }

    pub fn syllabifier(&self) -> &dyn Syllabifier {
        self.syllabifier.as_ref()
    }

    /// Worker threads requested by the global config
    pub fn jobs(&self) -> Option<usize> {
        self.config.global.jobs
    }
}
