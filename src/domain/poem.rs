//! Whole-poem analysis
//!
//! Ties the stages together: the text is lowercased and split into
//! verses, each verse is profiled, the endings are clustered, the scheme
//! is encoded and finally matched against the form catalog.

use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use super::form::PoemForm;
use super::rhyme::{RhymeClusters, RhymeKind};
use super::scheme::{Scheme, SchemeError};
use super::syllabifier::Syllabifier;
use super::tables::Tables;
use super::verse::{Verse, VerseError};
use super::word::Word;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PoemError {
    #[error("Poem has no verses")]
    Empty,

    #[error("Verse {line}: {source}")]
    Verse {
        /// 1-based position among the non-blank lines
        line: usize,
        #[source]
        source: VerseError,
    },

    #[error(transparent)]
    Scheme(#[from] SchemeError),
}

/// A word whose stressed syllable could not be located
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StressWarning {
    /// 1-based verse position
    pub line: usize,
    pub word: String,
}

/// A fully analyzed poem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poem {
    verses: Vec<Verse>,
    clusters: RhymeClusters,
    scheme: Scheme,
    form: PoemForm,
    warnings: Vec<StressWarning>,
}

impl Poem {
    /// Analyzes raw poem text; blank lines are ignored
    pub fn analyze(
        text: &str,
        syllabifier: &dyn Syllabifier,
        tables: &Tables,
    ) -> Result<Self, PoemError> {
        let text = text.to_lowercase();

        let verses = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(i, line)| {
                Verse::profile(line, syllabifier, tables)
                    .map_err(|source| PoemError::Verse { line: i + 1, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if verses.is_empty() {
            return Err(PoemError::Empty);
        }

        let endings: Vec<_> = verses.iter().map(|v| v.ending().clone()).collect();
        let clusters = RhymeClusters::cluster(&endings);
        let scheme = Scheme::encode(&verses, clusters.groups(), tables)?;
        let form = tables.catalog().classify(&scheme);

        let warnings = verses
            .iter()
            .enumerate()
            .flat_map(|(i, verse)| {
                verse.unstressed_words().map(move |word| StressWarning {
                    line: i + 1,
                    word: word.text().to_string(),
                })
            })
            .collect();

        Ok(Self {
            verses,
            clusters,
            scheme,
            form,
            warnings,
        })
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn clusters(&self) -> &RhymeClusters {
        &self.clusters
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn form(&self) -> PoemForm {
        self.form
    }

    pub fn warnings(&self) -> &[StressWarning] {
        &self.warnings
    }

    pub fn syllable_counts(&self) -> Vec<usize> {
        self.scheme.syllable_counts()
    }

    /// Bare scheme letters per verse
    pub fn symbols(&self) -> Vec<char> {
        self.scheme.symbols().iter().map(|s| s.mark()).collect()
    }

    /// Syllable-prefixed scheme tokens per verse
    pub fn tokens(&self) -> Vec<String> {
        self.scheme.tokens()
    }

    /// Serializable summary of the analysis
    pub fn report(&self) -> PoemReport {
        let verses = self
            .verses
            .iter()
            .zip(self.scheme.symbols())
            .zip(self.clusters.kinds())
            .map(|((verse, symbol), &rhyme)| VerseReport {
                text: verse.refined_text().to_string(),
                syllables: verse.syllable_count(),
                elisions: verse.elisions(),
                symbol: symbol.mark(),
                token: symbol.token(),
                rhyme,
                ending: verse.ending().consonant_form().to_string(),
                assonance: verse.ending().vowel_skeleton().to_string(),
                vowels: verse.ending().vowels().to_string(),
                words: verse.words().iter().map(WordReport::from).collect(),
            })
            .collect();

        PoemReport {
            form: self.form,
            scheme: self.scheme.pattern(),
            syllable_counts: self.syllable_counts(),
            symbols: self.symbols(),
            tokens: self.tokens(),
            rhyme_keys: self.clusters.keys().to_vec(),
            verses,
            warnings: self.warnings.clone(),
        }
    }
}

/// Analyzes many poems in parallel, keeping input order
pub fn analyze_batch<T: AsRef<str> + Sync>(
    texts: &[T],
    syllabifier: &dyn Syllabifier,
    tables: &Tables,
) -> Vec<Result<Poem, PoemError>> {
    texts
        .par_iter()
        .map(|text| Poem::analyze(text.as_ref(), syllabifier, tables))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct WordReport {
    pub text: String,
    pub syllables: Vec<String>,
    pub stress: Option<String>,
}

impl From<&Word> for WordReport {
    fn from(word: &Word) -> Self {
        Self {
            text: word.text().to_string(),
            syllables: word.syllables().to_vec(),
            stress: word.stress().ok().map(|s| s.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VerseReport {
    pub text: String,
    pub syllables: usize,
    pub elisions: usize,
    pub symbol: char,
    pub token: String,
    pub rhyme: RhymeKind,
    pub ending: String,
    pub assonance: String,
    pub vowels: String,
    pub words: Vec<WordReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PoemReport {
    pub form: PoemForm,
    pub scheme: String,
    pub syllable_counts: Vec<usize>,
    pub symbols: Vec<char>,
    pub tokens: Vec<String>,
    pub rhyme_keys: Vec<String>,
    pub verses: Vec<VerseReport>,
    pub warnings: Vec<StressWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::syllabifier::RuleSyllabifier;
    use proptest::prelude::*;

    const LUCEROS: &str = "Tus ojos son luceros,\n\
                           tus labios, de terciopelo,\n\
                           y un amor como el que siento,\n\
                           es imposible esconderlo.";

    fn analyze(text: &str) -> Result<Poem, PoemError> {
        Poem::analyze(text, &RuleSyllabifier, &Tables::default())
    }

    #[test]
    fn alternating_minor_rhyme_is_serventesio() {
        let poem = analyze(LUCEROS).unwrap();

        assert_eq!(poem.scheme().pattern(), "-a-a");
        assert_eq!(poem.tokens(), vec!["7-", "8a", "8-", "8a"]);
        assert_eq!(poem.syllable_counts(), vec![7, 8, 8, 8]);
        assert_eq!(poem.form(), PoemForm::Serventesio);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let spaced = format!("\n\n{}\n\n   \n", LUCEROS.replace('\n', "\n\n"));
        let poem = analyze(&spaced).unwrap();
        assert_eq!(poem.verses().len(), 4);
        assert_eq!(poem.form(), PoemForm::Serventesio);
    }

    #[test]
    fn two_lines_are_pareado() {
        let poem = analyze("el sol\nla mar").unwrap();
        assert_eq!(poem.form(), PoemForm::Pareado);
    }

    #[test]
    fn no_shared_endings_is_verso_libre() {
        let poem = analyze("el sol\nla mar\nun pez").unwrap();
        assert_eq!(poem.scheme().pattern(), "---");
        assert_eq!(poem.form(), PoemForm::VersoLibre);
    }

    #[test]
    fn embraced_rhyme_is_redondilla() {
        let poem = analyze("la casa\nel camino\nun destino\nuna pasa").unwrap();

        assert_eq!(poem.scheme().pattern(), "abba");
        assert_eq!(poem.clusters().keys(), &["asa", "ino"]);
        assert_eq!(poem.form(), PoemForm::Redondilla);
    }

    #[test]
    fn empty_text_is_an_error() {
        assert_eq!(analyze("\n  \n"), Err(PoemError::Empty));
    }

    #[test]
    fn malformed_verse_reports_its_line() {
        let result = analyze("la casa\n\nel  camino");
        assert!(matches!(
            result,
            Err(PoemError::Verse {
                line: 2,
                source: VerseError::EmptyToken(_)
            })
        ));
    }

    #[test]
    fn unstressed_words_become_warnings() {
        let poem = analyze("la casa\nvino el sr").unwrap();
        assert_eq!(
            poem.warnings(),
            &[StressWarning {
                line: 2,
                word: "sr".to_string()
            }]
        );
    }

    #[test]
    fn report_has_one_entry_per_verse() {
        let poem = analyze(LUCEROS).unwrap();
        let report = poem.report();

        assert_eq!(report.verses.len(), 4);
        assert_eq!(report.symbols, vec!['-', 'a', '-', 'a']);
        assert_eq!(report.verses[3].ending, "derlo");
        assert_eq!(report.verses[3].vowels, "eo");
        assert_eq!(report.verses[1].rhyme, RhymeKind::Consonant);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["form"], "serventesio");
        assert_eq!(json["tokens"][1], "8a");
    }

    #[test]
    fn batch_keeps_input_order() {
        let texts = vec![LUCEROS.to_string(), "el sol\nla mar".to_string(), String::new()];
        let results = analyze_batch(&texts, &RuleSyllabifier, &Tables::default());

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().form(), PoemForm::Serventesio);
        assert_eq!(results[1].as_ref().unwrap().form(), PoemForm::Pareado);
        assert_eq!(results[2], Err(PoemError::Empty));
    }

    const ENDINGS: &[&str] = &[
        "casa", "pasa", "camino", "destino", "amor", "flor", "sol", "mar", "rosa", "cosa",
        "canción", "corazón", "luna", "cuna",
    ];

    proptest! {
        #[test]
        fn analysis_is_deterministic(
            lines in prop::collection::vec(prop::sample::select(ENDINGS), 1..12)
        ) {
            let text: Vec<String> = lines.iter().map(|w| format!("la {}", w)).collect();
            let text = text.join("\n");

            let first = analyze(&text).unwrap();
            let second = analyze(&text).unwrap();

            prop_assert_eq!(first.scheme(), second.scheme());
            prop_assert_eq!(first.clusters(), second.clusters());
            prop_assert_eq!(first.form(), second.form());
        }
    }
}
