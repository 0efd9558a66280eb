//! Scheme symbols: rhyme letter, art case and syllable prefix

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::tables::{Tables, UNRHYMED};
use super::verse::Verse;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchemeError {
    #[error("Rhyme group {group} of verse {verse} exceeds the {capacity} available letters")]
    AlphabetExhausted {
        verse: usize,
        group: usize,
        capacity: usize,
    },

    #[error("Got {groups} rhyme groups for {verses} verses")]
    LengthMismatch { verses: usize, groups: usize },
}

/// The scheme symbol of one verse, e.g. `11A`, `7b` or `8-`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemeSymbol {
    syllable_count: usize,
    mark: char,
    group: usize,
}

impl SchemeSymbol {
    /// Encodes a verse's rhyme group (0 = unrhymed) and syllable count
    pub fn encode(
        verse: usize,
        group: usize,
        syllable_count: usize,
        tables: &Tables,
    ) -> Result<Self, SchemeError> {
        let alphabet = tables.alphabet(tables.is_major_art(syllable_count));
        let mark = *alphabet.get(group).ok_or(SchemeError::AlphabetExhausted {
            verse,
            group,
            capacity: alphabet.len() - 1,
        })?;

        Ok(Self {
            syllable_count,
            mark,
            group,
        })
    }

    /// Bare letter, or `-` for an unrhymed verse
    pub fn mark(&self) -> char {
        self.mark
    }

    pub fn syllable_count(&self) -> usize {
        self.syllable_count
    }

    pub fn group(&self) -> usize {
        self.group
    }

    pub fn is_unrhymed(&self) -> bool {
        self.mark == UNRHYMED
    }

    /// Syllable-prefixed token, e.g. `11A`
    pub fn token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SchemeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.syllable_count, self.mark)
    }
}

/// The scheme of a whole poem, one symbol per verse
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Scheme {
    symbols: Vec<SchemeSymbol>,
}

impl Scheme {
    /// Encodes every verse with its rhyme group
    ///
    /// Verse numbers in errors are 1-based, as the user reads them.
    pub fn encode(
        verses: &[Verse],
        groups: &[usize],
        tables: &Tables,
    ) -> Result<Self, SchemeError> {
        if verses.len() != groups.len() {
            return Err(SchemeError::LengthMismatch {
                verses: verses.len(),
                groups: groups.len(),
            });
        }

        let symbols = verses
            .iter()
            .zip(groups)
            .enumerate()
            .map(|(i, (verse, &group))| {
                SchemeSymbol::encode(i + 1, group, verse.syllable_count(), tables)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { symbols })
    }

    /// Builds a scheme from already encoded symbols
    pub fn from_symbols(symbols: Vec<SchemeSymbol>) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &[SchemeSymbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Concatenated bare letters, e.g. `ABBA`
    pub fn pattern(&self) -> String {
        self.symbols.iter().map(SchemeSymbol::mark).collect()
    }

    /// Syllable-prefixed tokens, e.g. `["11A", "11B"]`
    pub fn tokens(&self) -> Vec<String> {
        self.symbols.iter().map(SchemeSymbol::token).collect()
    }

    pub fn syllable_counts(&self) -> Vec<usize> {
        self.symbols.iter().map(SchemeSymbol::syllable_count).collect()
    }

    /// Returns true if every verse is unrhymed
    pub fn is_unrhymed(&self) -> bool {
        self.symbols.iter().all(SchemeSymbol::is_unrhymed)
    }
}
