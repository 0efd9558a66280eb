//! Character classes, scheme alphabets and the form catalog
//!
//! Every stage of the scansion pipeline reads its constants from a single
//! [`Tables`] value. It is built once (usually from configuration) and
//! passed by reference; nothing in the pipeline mutates it.

use super::form::{FormCatalog, RuleSet};

/// Plain Spanish vowels
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Vowels carrying a written (stress) accent
pub const ACCENTED_VOWELS: [char; 5] = ['á', 'é', 'í', 'ó', 'ú'];

/// Punctuation removed from every verse before tokenizing
pub const PUNCTUATION: [char; 8] = ['.', ';', ',', '!', '¡', '?', '¿', ':'];

/// Marker used in vowel skeletons for any non-vowel character
pub const WILDCARD: char = '*';

/// Marker for a verse that rhymes with no other verse
pub const UNRHYMED: char = '-';

/// Verses with more syllables than this are arte mayor
pub const MAJOR_ART_THRESHOLD: usize = 8;

/// Returns the unaccented form of an accented vowel
pub fn unaccented(c: char) -> Option<char> {
    ACCENTED_VOWELS
        .iter()
        .position(|&a| a == c)
        .map(|i| VOWELS[i])
}

/// Returns true for plain or accented vowels
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c) || ACCENTED_VOWELS.contains(&c)
}

/// Returns true for vowels carrying a written accent
pub fn is_accented(c: char) -> bool {
    ACCENTED_VOWELS.contains(&c)
}

/// Shared constant tables for one analysis configuration
#[derive(Debug, Clone)]
pub struct Tables {
    punctuation: Vec<char>,
    start_union: Vec<char>,
    end_union: Vec<char>,
    major_alphabet: Vec<char>,
    minor_alphabet: Vec<char>,
    major_art_threshold: usize,
    catalog: FormCatalog,
}

impl Default for Tables {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

impl Tables {
    /// Builds the Spanish tables with the given form rule set
    pub fn new(rules: RuleSet) -> Self {
        // Letters that can close a word into a synalepha
        let mut end_union: Vec<char> = VOWELS.to_vec();
        end_union.push('y');
        end_union.extend(ACCENTED_VOWELS);

        // Letters that can open a word into a synalepha (silent h included)
        let mut start_union = end_union.clone();
        start_union.retain(|&c| c != 'y');
        start_union.push('h');

        Self {
            punctuation: PUNCTUATION.to_vec(),
            start_union,
            end_union,
            major_alphabet: std::iter::once(UNRHYMED).chain('A'..='Z').collect(),
            minor_alphabet: std::iter::once(UNRHYMED).chain('a'..='z').collect(),
            major_art_threshold: MAJOR_ART_THRESHOLD,
            catalog: FormCatalog::new(rules),
        }
    }

    /// Sets the syllable count above which a verse is arte mayor
    pub fn with_major_art_threshold(mut self, threshold: usize) -> Self {
        self.major_art_threshold = threshold;
        self
    }

    /// Adds characters to strip from verses besides the standard punctuation
    pub fn with_extra_punctuation(mut self, extra: &[char]) -> Self {
        for &c in extra {
            if !self.punctuation.contains(&c) {
                self.punctuation.push(c);
            }
        }
        self
    }

    /// Characters stripped from verses
    pub fn punctuation(&self) -> &[char] {
        &self.punctuation
    }

    /// Returns true if a word starting with `c` can absorb a preceding vowel
    pub fn opens_synalepha(&self, c: char) -> bool {
        self.start_union.contains(&c)
    }

    /// Returns true if a word ending with `c` can merge with the next word
    pub fn closes_synalepha(&self, c: char) -> bool {
        self.end_union.contains(&c)
    }

    /// The symbol alphabet for major (`true`) or minor art; index 0 is unrhymed
    pub fn alphabet(&self, major_art: bool) -> &[char] {
        if major_art {
            &self.major_alphabet
        } else {
            &self.minor_alphabet
        }
    }

    pub fn major_art_threshold(&self) -> usize {
        self.major_art_threshold
    }

    /// Returns true if a verse of `syllables` syllables is arte mayor
    pub fn is_major_art(&self, syllables: usize) -> bool {
        syllables > self.major_art_threshold
    }

    pub fn catalog(&self) -> &FormCatalog {
        &self.catalog
    }

    /// Maps a character to its vowel skeleton form
    pub fn skeleton_char(&self, c: char) -> char {
        if VOWELS.contains(&c) {
            c
        } else {
            unaccented(c).unwrap_or(WILDCARD)
        }
    }
}
