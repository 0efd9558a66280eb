//! Word-level analysis: syllables, stress class and synalepha flags

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::syllabifier::{Syllabifier, SyllabifierError};
use super::tables::Tables;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WordError {
    #[error("No stressed syllable found in '{0}'")]
    StressNotFound(String),

    #[error("Empty word")]
    Empty,

    #[error("Failed to syllabify '{word}': {source}")]
    Syllabifier {
        word: String,
        #[source]
        source: SyllabifierError,
    },
}

/// Position of the tonic syllable, counted from the end of the word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressPosition {
    /// Final syllable
    Aguda,

    /// Penultimate syllable
    Llana,

    /// Antepenultimate syllable
    Esdrujula,

    /// Any syllable before the antepenultimate
    Sobresdrujula,
}

impl StressPosition {
    /// Classifies a distance from the end (1 = last syllable)
    pub fn from_distance(distance: usize) -> Option<Self> {
        match distance {
            0 => None,
            1 => Some(StressPosition::Aguda),
            2 => Some(StressPosition::Llana),
            3 => Some(StressPosition::Esdrujula),
            _ => Some(StressPosition::Sobresdrujula),
        }
    }
}

impl std::fmt::Display for StressPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StressPosition::Aguda => write!(f, "aguda"),
            StressPosition::Llana => write!(f, "llana"),
            StressPosition::Esdrujula => write!(f, "esdrújula"),
            StressPosition::Sobresdrujula => write!(f, "sobresdrújula"),
        }
    }
}

/// One analyzed word of a verse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    text: String,
    syllables: Vec<String>,
    stress: Option<StressPosition>,
    starts_with_vowel_like: bool,
    ends_with_vowel_like: bool,
}

impl Word {
    /// Analyzes a lowercased, punctuation-free token
    ///
    /// A word whose stress cannot be located is still returned; its
    /// [`stress`](Self::stress) reports [`WordError::StressNotFound`].
    pub fn analyze(
        text: &str,
        syllabifier: &dyn Syllabifier,
        tables: &Tables,
    ) -> Result<Self, WordError> {
        let (first, last) = match (text.chars().next(), text.chars().last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(WordError::Empty),
        };

        let wrap = |source| WordError::Syllabifier {
            word: text.to_string(),
            source,
        };

        let syllables = syllabifier.syllabify(text).map_err(wrap)?;
        if syllables.is_empty() {
            return Err(wrap(SyllabifierError::NoSyllables(text.to_string())));
        }

        let details = syllabifier.stress_details(text).map_err(wrap)?;
        let stress = details
            .stressed_index()
            .and_then(|index| syllables.len().checked_sub(index))
            .and_then(StressPosition::from_distance);

        Ok(Self {
            text: text.to_string(),
            syllables,
            stress,
            starts_with_vowel_like: tables.opens_synalepha(first),
            ends_with_vowel_like: tables.closes_synalepha(last),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn syllables(&self) -> &[String] {
        &self.syllables
    }

    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }

    /// Stress class, or `StressNotFound` when no syllable was marked
    pub fn stress(&self) -> Result<StressPosition, WordError> {
        self.stress
            .ok_or_else(|| WordError::StressNotFound(self.text.clone()))
    }

    pub fn has_stress(&self) -> bool {
        self.stress.is_some()
    }

    pub fn starts_with_vowel_like(&self) -> bool {
        self.starts_with_vowel_like
    }

    pub fn ends_with_vowel_like(&self) -> bool {
        self.ends_with_vowel_like
    }
}
