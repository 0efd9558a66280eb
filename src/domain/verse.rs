//! Verse profiling: tokenizing, elided syllable count and rhyme ending

use serde::Serialize;
use thiserror::Error;

use super::syllabifier::Syllabifier;
use super::tables::{is_vowel, Tables};
use super::word::{Word, WordError};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum VerseError {
    #[error("Verse is empty after removing punctuation: '{0}'")]
    Empty(String),

    #[error("Verse contains an empty word (repeated spaces?): '{0}'")]
    EmptyToken(String),

    #[error(transparent)]
    Word(#[from] WordError),
}

/// The phonetically significant tail of a verse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineEnding {
    consonant_form: String,
    vowel_skeleton: String,
    vowels: String,
}

impl LineEnding {
    /// Builds the ending from the last word of a verse
    ///
    /// Monosyllables contribute the whole word, longer words their last two
    /// syllables.
    pub fn from_word(word: &Word, tables: &Tables) -> Self {
        let syllables = word.syllables();
        let consonant_form = if syllables.len() == 1 {
            word.text().to_string()
        } else {
            syllables[syllables.len() - 2..].concat()
        };

        Self::from_consonant_form(consonant_form, tables)
    }

    pub fn from_consonant_form(consonant_form: String, tables: &Tables) -> Self {
        let vowel_skeleton = consonant_form
            .chars()
            .map(|c| tables.skeleton_char(c))
            .collect();
        let vowels = consonant_form.chars().filter(|&c| is_vowel(c)).collect();

        Self {
            consonant_form,
            vowel_skeleton,
            vowels,
        }
    }

    /// Full ending used for consonant rhyme
    pub fn consonant_form(&self) -> &str {
        &self.consonant_form
    }

    /// Ending with consonants replaced by the wildcard and accents removed
    pub fn vowel_skeleton(&self) -> &str {
        &self.vowel_skeleton
    }

    /// Vowel letters of the ending, accents preserved
    pub fn vowels(&self) -> &str {
        &self.vowels
    }
}

/// One profiled line of a poem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    raw_text: String,
    refined_text: String,
    words: Vec<Word>,
    syllable_count: usize,
    elisions: usize,
    ending: LineEnding,
    is_major_art: bool,
}

impl Verse {
    /// Profiles one verse of lowercased text
    pub fn profile(
        raw: &str,
        syllabifier: &dyn Syllabifier,
        tables: &Tables,
    ) -> Result<Self, VerseError> {
        let refined: String = raw
            .chars()
            .filter(|c| !tables.punctuation().contains(c))
            .collect();
        let refined = refined.trim().to_string();

        if refined.is_empty() {
            return Err(VerseError::Empty(raw.to_string()));
        }

        let mut words = Vec::new();
        for token in refined.split(' ') {
            if token.is_empty() {
                return Err(VerseError::EmptyToken(raw.to_string()));
            }
            words.push(Word::analyze(token, syllabifier, tables)?);
        }

        let elisions = count_elisions(&words);
        let total: usize = words.iter().map(Word::syllable_count).sum();
        let syllable_count = total - elisions;

        // `words` is non-empty: `refined` held at least one token
        let ending = match words.last() {
            Some(last) => LineEnding::from_word(last, tables),
            None => return Err(VerseError::Empty(raw.to_string())),
        };

        Ok(Self {
            raw_text: raw.to_string(),
            refined_text: refined,
            syllable_count,
            elisions,
            ending,
            is_major_art: tables.is_major_art(syllable_count),
            words,
        })
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn refined_text(&self) -> &str {
        &self.refined_text
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Metrical syllables after synalepha
    pub fn syllable_count(&self) -> usize {
        self.syllable_count
    }

    pub fn elisions(&self) -> usize {
        self.elisions
    }

    pub fn ending(&self) -> &LineEnding {
        &self.ending
    }

    pub fn is_major_art(&self) -> bool {
        self.is_major_art
    }

    /// Words whose stressed syllable could not be located
    pub fn unstressed_words(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(|w| !w.has_stress())
    }
}

/// Counts word boundaries where a vowel-like end meets a vowel-like start
fn count_elisions(words: &[Word]) -> usize {
    words
        .windows(2)
        .filter(|pair| pair[0].ends_with_vowel_like() && pair[1].starts_with_vowel_like())
        .count()
}
