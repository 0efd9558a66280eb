//! Syllabification and stress detection
//!
//! The scansion pipeline consumes syllable boundaries and the stressed
//! syllable through the [`Syllabifier`] trait. Two implementations ship
//! with the crate:
//!
//! - [`RuleSyllabifier`] applies the orthographic rules of Spanish
//!   (diphthongs, hiatus, inseparable onsets, written accents)
//! - [`LexiconSyllabifier`] answers from a word list first and defers to
//!   another syllabifier for everything else

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tables::{is_accented, is_vowel};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SyllabifierError {
    #[error("Syllabifier timed out on '{0}'")]
    Timeout(String),

    #[error("Syllabifier returned no syllables for '{0}'")]
    NoSyllables(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LexiconError {
    #[error("Lexicon entry '{word}' does not match its syllables {syllables:?}")]
    Mismatch { word: String, syllables: Vec<String> },

    #[error("Lexicon entry '{word}' marks syllable {index} stressed but has {count} syllables")]
    StressOutOfRange {
        word: String,
        index: usize,
        count: usize,
    },
}

/// A syllable with its lexical stress flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableDetail {
    pub text: String,
    pub stressed: bool,
}

/// Per-syllable stress report for one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressDetails {
    pub syllables: Vec<SyllableDetail>,
}

impl StressDetails {
    /// Builds the report from syllables and the stressed index, if any
    pub fn from_syllables(syllables: Vec<String>, stressed: Option<usize>) -> Self {
        Self {
            syllables: syllables
                .into_iter()
                .enumerate()
                .map(|(i, text)| SyllableDetail {
                    text,
                    stressed: Some(i) == stressed,
                })
                .collect(),
        }
    }

    /// Index of the first stressed syllable, counted from the start
    pub fn stressed_index(&self) -> Option<usize> {
        self.syllables.iter().position(|s| s.stressed)
    }
}

/// Source of syllable boundaries and lexical stress for single words
///
/// Words arrive lowercased with punctuation stripped. Implementations must
/// be shareable across threads: batches of poems are analyzed in parallel.
pub trait Syllabifier: Send + Sync {
    /// Splits a word into syllables in reading order
    fn syllabify(&self, word: &str) -> Result<Vec<String>, SyllabifierError>;

    /// Reports which syllable of the word carries the stress
    fn stress_details(&self, word: &str) -> Result<StressDetails, SyllabifierError>;
}

/// Locates the stressed syllable by the Spanish accentuation rules
///
/// A written accent wins. Otherwise words ending in a vowel, `n` or `s`
/// stress the penultimate syllable and every other word the last one.
/// Returns `None` for words with no vowel at all (abbreviations, stray
/// consonants).
pub fn rule_stress_index(syllables: &[String]) -> Option<usize> {
    if let Some(i) = syllables.iter().position(|s| s.chars().any(is_accented)) {
        return Some(i);
    }

    let word: String = syllables.concat();
    if !word.chars().any(|c| is_vowel(c) || c == 'ü' || c == 'y') {
        return None;
    }

    let count = syllables.len();
    if count < 2 {
        return Some(0);
    }

    match word.chars().last() {
        Some(c) if is_vowel(c) || c == 'n' || c == 's' => Some(count - 2),
        _ => Some(count - 1),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnitKind {
    Consonant,
    Strong,
    Weak,
}

/// A letter or digraph treated as one phonological unit
#[derive(Debug, Clone, Copy)]
struct Unit {
    start: usize,
    len: usize,
    kind: UnitKind,
}

fn is_strong(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'o') || is_accented(c)
}

fn is_weak(c: char) -> bool {
    matches!(c, 'i' | 'u' | 'ü')
}

/// Rule-based Spanish syllabifier
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSyllabifier;

impl RuleSyllabifier {
    pub fn new() -> Self {
        Self
    }

    fn units(chars: &[char]) -> Vec<Unit> {
        let mut units = Vec::with_capacity(chars.len());
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();
            let after = chars.get(i + 2).copied();

            let (kind, len) = match (c, next) {
                ('c', Some('h')) | ('l', Some('l')) | ('r', Some('r')) => (UnitKind::Consonant, 2),
                // Silent u in que/qui/gue/gui
                ('q' | 'g', Some('u')) if matches!(after, Some('e' | 'i' | 'é' | 'í')) => {
                    (UnitKind::Consonant, 2)
                }
                ('y', _) => {
                    let vocalic = next.map_or(true, |n| !(is_vowel(n) || n == 'ü'));
                    if vocalic {
                        (UnitKind::Weak, 1)
                    } else {
                        (UnitKind::Consonant, 1)
                    }
                }
                (c, _) if is_strong(c) => (UnitKind::Strong, 1),
                (c, _) if is_weak(c) => (UnitKind::Weak, 1),
                _ => (UnitKind::Consonant, 1),
            };

            units.push(Unit { start: i, len, kind });
            i += len;
        }

        units
    }

    /// Two adjacent vowels belong to different syllables
    fn is_hiatus(chars: &[char], a: &Unit, b: &Unit) -> bool {
        match (a.kind, b.kind) {
            (UnitKind::Strong, UnitKind::Strong) => true,
            (UnitKind::Weak, UnitKind::Weak) => chars[a.start] == chars[b.start],
            _ => false,
        }
    }

    /// Consonant pairs that always open a syllable together
    fn is_onset_cluster(chars: &[char], a: &Unit, b: &Unit) -> bool {
        if a.len != 1 || b.len != 1 {
            return false;
        }
        let (first, second) = (chars[a.start], chars[b.start]);
        match second {
            'r' => matches!(first, 'p' | 'b' | 't' | 'd' | 'c' | 'k' | 'g' | 'f'),
            'l' => matches!(first, 'p' | 'b' | 'c' | 'k' | 'g' | 'f'),
            _ => false,
        }
    }

    /// Groups vowel units into syllable nuclei as (first, last) unit indices
    fn nuclei(chars: &[char], units: &[Unit]) -> Vec<(usize, usize)> {
        let mut nuclei = Vec::new();
        let mut i = 0;

        while i < units.len() {
            if units[i].kind == UnitKind::Consonant {
                i += 1;
                continue;
            }

            let mut start = i;
            while i + 1 < units.len() && units[i + 1].kind != UnitKind::Consonant {
                if Self::is_hiatus(chars, &units[i], &units[i + 1]) {
                    nuclei.push((start, i));
                    start = i + 1;
                }
                i += 1;
            }
            nuclei.push((start, i));
            i += 1;
        }

        nuclei
    }

    fn split(word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let units = Self::units(&chars);
        let nuclei = Self::nuclei(&chars, &units);

        if nuclei.len() < 2 {
            return vec![word.to_string()];
        }

        // Unit index at which each syllable after the first begins
        let mut boundaries = Vec::with_capacity(nuclei.len() - 1);
        for pair in nuclei.windows(2) {
            let (prev_end, next_start) = (pair[0].1, pair[1].0);
            let consonants = next_start - prev_end - 1;

            let boundary = match consonants {
                0 => next_start,
                1 => next_start - 1,
                _ => {
                    let a = &units[next_start - 2];
                    let b = &units[next_start - 1];
                    if Self::is_onset_cluster(&chars, a, b) {
                        next_start - 2
                    } else {
                        next_start - 1
                    }
                }
            };
            boundaries.push(boundary);
        }

        let mut syllables = Vec::with_capacity(nuclei.len());
        let mut from = 0;
        for boundary in boundaries {
            let to = units[boundary].start;
            syllables.push(chars[from..to].iter().collect());
            from = to;
        }
        syllables.push(chars[from..].iter().collect());

        syllables
    }
}

impl Syllabifier for RuleSyllabifier {
    fn syllabify(&self, word: &str) -> Result<Vec<String>, SyllabifierError> {
        if word.is_empty() {
            return Err(SyllabifierError::NoSyllables(word.to_string()));
        }
        Ok(Self::split(word))
    }

    fn stress_details(&self, word: &str) -> Result<StressDetails, SyllabifierError> {
        let syllables = self.syllabify(word)?;
        let stressed = rule_stress_index(&syllables);
        Ok(StressDetails::from_syllables(syllables, stressed))
    }
}

/// One word with known syllabification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub word: String,
    pub syllables: Vec<String>,

    /// Stressed syllable counted from the start; the accent rules decide
    /// when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stressed: Option<usize>,
}

/// Dictionary-first syllabifier with a fallback for unlisted words
pub struct LexiconSyllabifier<S> {
    entries: HashMap<String, (Vec<String>, Option<usize>)>,
    fallback: S,
}

impl<S: Syllabifier> LexiconSyllabifier<S> {
    /// Creates a lexicon syllabifier, validating every entry
    pub fn new(entries: Vec<LexiconEntry>, fallback: S) -> Result<Self, LexiconError> {
        let mut map = HashMap::with_capacity(entries.len());

        for entry in entries {
            let word = entry.word.to_lowercase();
            let syllables: Vec<String> = entry.syllables.iter().map(|s| s.to_lowercase()).collect();

            if syllables.concat() != word {
                return Err(LexiconError::Mismatch { word, syllables });
            }

            let stressed = match entry.stressed {
                Some(index) if index >= syllables.len() => {
                    return Err(LexiconError::StressOutOfRange {
                        word,
                        index,
                        count: syllables.len(),
                    });
                }
                Some(index) => Some(index),
                None => rule_stress_index(&syllables),
            };

            map.insert(word, (syllables, stressed));
        }

        Ok(Self {
            entries: map,
            fallback,
        })
    }

    /// Number of listed words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the word is answered from the lexicon
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }
}

impl<S: Syllabifier> Syllabifier for LexiconSyllabifier<S> {
    fn syllabify(&self, word: &str) -> Result<Vec<String>, SyllabifierError> {
        match self.entries.get(word) {
            Some((syllables, _)) => Ok(syllables.clone()),
            None => self.fallback.syllabify(word),
        }
    }

    fn stress_details(&self, word: &str) -> Result<StressDetails, SyllabifierError> {
        match self.entries.get(word) {
            Some((syllables, stressed)) => {
                Ok(StressDetails::from_syllables(syllables.clone(), *stressed))
            }
            None => self.fallback.stress_details(word),
        }
    }
}
