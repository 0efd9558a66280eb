//! Scansion domain for Metrica
//!
//! Contains the analysis pipeline without any I/O concerns:
//! syllabification, word and verse profiling, rhyme clustering, scheme
//! encoding and form classification.

mod tables;
mod syllabifier;
mod word;
mod verse;
mod rhyme;
mod scheme;
mod form;
mod poem;

pub use tables::{Tables, MAJOR_ART_THRESHOLD, PUNCTUATION, UNRHYMED, WILDCARD};
pub use syllabifier::{
    rule_stress_index, LexiconEntry, LexiconError, LexiconSyllabifier, RuleSyllabifier,
    StressDetails, SyllableDetail, Syllabifier, SyllabifierError,
};
pub use word::{StressPosition, Word, WordError};
pub use verse::{LineEnding, Verse, VerseError};
pub use rhyme::{longest_common_suffix, RhymeClusters, RhymeKind};
pub use scheme::{Scheme, SchemeError, SchemeSymbol};
pub use form::{FormCatalog, FormRule, Pattern, PoemForm, RuleSet};
pub use poem::{analyze_batch, Poem, PoemError, PoemReport, StressWarning, VerseReport, WordReport};
