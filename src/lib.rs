//! Metrica - Metrical and rhyme-scheme analysis of Spanish poetry
//!
//! Counts the syllables of each verse (with synalepha), groups the verse
//! endings into rhymes, encodes the rhyme scheme and names the classical
//! form it matches, such as soneto, redondilla or décima espinela.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{analyze_batch, Poem, PoemForm, RuleSet, RuleSyllabifier, Syllabifier, Tables};
