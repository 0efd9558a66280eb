//! Golden tests for whole-poem scansion
//!
//! These pin the scheme and form produced for known poems. The JSON report
//! is the machine contract of `metrica scan --format json`.

use metrica::domain::{
    rule_stress_index, Poem, PoemError, PoemForm, RhymeKind, RuleSet, RuleSyllabifier,
    SchemeError, StressDetails, Syllabifier, SyllabifierError, Tables,
};
use proptest::prelude::*;
use serde_json::json;

const LUCEROS: &str = "Tus ojos son luceros,\n\
                       tus labios, de terciopelo,\n\
                       y un amor como el que siento,\n\
                       es imposible esconderlo.";

/// Syllabifies on explicit hyphens, so verses can be built to a length
struct HyphenSyllabifier;

impl Syllabifier for HyphenSyllabifier {
    fn syllabify(&self, word: &str) -> Result<Vec<String>, SyllabifierError> {
        Ok(word.split('-').map(str::to_string).collect())
    }

    fn stress_details(&self, word: &str) -> Result<StressDetails, SyllabifierError> {
        let syllables = self.syllabify(word)?;
        let stressed = rule_stress_index(&syllables);
        Ok(StressDetails::from_syllables(syllables, stressed))
    }
}

/// A verse of `syllables` syllables ending in the hyphenated `last` word
fn verse(syllables: usize, last: &str) -> String {
    let tail = last.split('-').count();
    let mut words = vec!["pan"; syllables - tail];
    words.push(last);
    words.join(" ")
}

fn stanza(syllables: usize, endings: &[&str]) -> String {
    endings
        .iter()
        .map(|last| verse(syllables, last))
        .collect::<Vec<_>>()
        .join("\n")
}

fn hyphenated(text: &str, tables: &Tables) -> Result<Poem, PoemError> {
    Poem::analyze(text, &HyphenSyllabifier, tables)
}

#[test]
fn luceros_is_serventesio() {
    let poem = Poem::analyze(LUCEROS, &RuleSyllabifier, &Tables::default()).unwrap();

    assert_eq!(poem.syllable_counts(), vec![7, 8, 8, 8]);
    assert_eq!(poem.symbols(), vec!['-', 'a', '-', 'a']);
    assert_eq!(poem.tokens(), vec!["7-", "8a", "8-", "8a"]);
    assert_eq!(poem.clusters().keys(), &["lo"]);
    assert_eq!(poem.form(), PoemForm::Serventesio);

    let endings: Vec<_> = poem
        .verses()
        .iter()
        .map(|v| v.ending().consonant_form().to_string())
        .collect();
    assert_eq!(endings, vec!["ceros", "pelo", "siento", "derlo"]);
}

#[test]
fn luceros_report_golden() {
    let poem = Poem::analyze(LUCEROS, &RuleSyllabifier, &Tables::default()).unwrap();
    let report = serde_json::to_value(poem.report()).unwrap();

    assert_eq!(report["form"], "serventesio");
    assert_eq!(report["scheme"], "-a-a");
    assert_eq!(report["syllable_counts"], json!([7, 8, 8, 8]));
    assert_eq!(report["symbols"], json!(["-", "a", "-", "a"]));
    assert_eq!(report["tokens"], json!(["7-", "8a", "8-", "8a"]));
    assert_eq!(report["rhyme_keys"], json!(["lo"]));
    assert_eq!(report["warnings"], json!([]));

    let third = &report["verses"][2];
    assert_eq!(third["text"], "y un amor como el que siento");
    assert_eq!(third["syllables"], 8);
    assert_eq!(third["symbol"], "-");
    assert_eq!(third["ending"], "siento");
    assert_eq!(third["vowels"], "ieo");
    assert_eq!(report["verses"][3]["vowels"], "eo");
}

#[test]
fn any_two_verses_are_pareado() {
    let poem = Poem::analyze("Yo soy\nun gato", &RuleSyllabifier, &Tables::default()).unwrap();
    assert_eq!(poem.form(), PoemForm::Pareado);

    let rhymed = hyphenated(&stanza(11, &["ca-sa", "pa-sa"]), &Tables::default()).unwrap();
    assert_eq!(rhymed.scheme().pattern(), "AA");
    assert_eq!(rhymed.form(), PoemForm::Pareado);
}

#[test]
fn petrarchan_sonnet() {
    let text = stanza(
        11,
        &[
            "ca-sa", "ca-mi-no", "des-ti-no", "pa-sa", "ma-sa", "pe-pi-no", "tri-no", "ta-sa",
            "pa-lo", "ver-de", "ma-lo", "pier-de", "ca-lo", "muer-de",
        ],
    );
    let poem = hyphenated(&text, &Tables::default()).unwrap();

    assert!(poem.syllable_counts().iter().all(|&c| c == 11));
    assert_eq!(poem.scheme().pattern(), "ABBAABBACDCDCD");
    assert_eq!(poem.clusters().keys(), &["asa", "ino", "alo", "erde"]);
    assert_eq!(poem.form(), PoemForm::Soneto);
}

#[test]
fn raising_the_threshold_turns_sonnet_into_minor_art() {
    let text = stanza(
        11,
        &[
            "ca-sa", "ca-mi-no", "des-ti-no", "pa-sa", "ma-sa", "pe-pi-no", "tri-no", "ta-sa",
            "pa-lo", "ver-de", "ma-lo", "pier-de", "ca-lo", "muer-de",
        ],
    );
    let tables = Tables::default().with_major_art_threshold(11);
    let poem = hyphenated(&text, &tables).unwrap();

    assert_eq!(poem.scheme().pattern(), "abbaabbacdcdcd");
    assert_eq!(poem.form(), PoemForm::Unknown);
}

#[test]
fn cuaderna_via_needs_fourteen_syllables_throughout() {
    let endings = ["ca-sa", "pa-sa", "ma-sa", "ta-sa"];

    let poem = hyphenated(&stanza(14, &endings), &Tables::default()).unwrap();
    assert_eq!(poem.scheme().pattern(), "AAAA");
    assert_eq!(poem.form(), PoemForm::CuadernaVia);

    let uneven = [
        verse(14, "ca-sa"),
        verse(13, "pa-sa"),
        verse(14, "ma-sa"),
        verse(14, "ta-sa"),
    ]
    .join("\n");
    let poem = hyphenated(&uneven, &Tables::default()).unwrap();
    assert_eq!(poem.scheme().pattern(), "AAAA");
    assert_eq!(poem.form(), PoemForm::Unknown);
}

#[test]
fn no_shared_suffix_is_verso_libre() {
    let poem = hyphenated(
        &stanza(11, &["ca-sa", "pe-rro", "ár-bol", "ca-mi-no"]),
        &Tables::default(),
    )
    .unwrap();

    assert_eq!(poem.scheme().pattern(), "----");
    assert!(poem.clusters().keys().is_empty());
    assert_eq!(poem.form(), PoemForm::VersoLibre);
}

#[test]
fn assonance_is_reported_without_a_letter() {
    let poem = hyphenated(&stanza(8, &["ca-sa", "ra-ma"]), &Tables::default()).unwrap();

    assert_eq!(poem.scheme().pattern(), "--");
    assert_eq!(
        poem.clusters().kinds(),
        &[RhymeKind::Assonant, RhymeKind::Assonant]
    );
}

#[test]
fn draft_rules_name_solea() {
    let text = "la casa\nla mesa\nuna pasa";

    let canonical =
        Poem::analyze(text, &RuleSyllabifier, &Tables::new(RuleSet::Canonical)).unwrap();
    assert_eq!(canonical.scheme().pattern(), "aba");
    assert_eq!(canonical.form(), PoemForm::Tercerilla);

    let draft = Poem::analyze(text, &RuleSyllabifier, &Tables::new(RuleSet::Draft)).unwrap();
    assert_eq!(draft.form(), PoemForm::Solea);
}

#[test]
fn synalepha_shortens_the_verse() {
    let poem = Poem::analyze("la hora de amar", &RuleSyllabifier, &Tables::default()).unwrap();
    let verse = &poem.verses()[0];

    // la-ho-ra-de-a-mar, merged twice
    assert_eq!(verse.elisions(), 2);
    assert_eq!(verse.syllable_count(), 4);
}

#[test]
fn twenty_seven_rhyme_pairs_exhaust_the_alphabet() {
    // Consonant-vowel keys; no key starts with `p` or `t`, so the pairs stay apart
    let keys: Vec<String> = "bcdfgl"
        .chars()
        .flat_map(|c| "aeiou".chars().map(move |v| format!("{}{}", c, v)))
        .take(27)
        .collect();
    let text = keys
        .iter()
        .flat_map(|key| [format!("p{}", key), format!("t{}", key)])
        .collect::<Vec<_>>()
        .join("\n");

    let result = hyphenated(&text, &Tables::default());
    assert!(matches!(
        result,
        Err(PoemError::Scheme(SchemeError::AlphabetExhausted {
            verse: 53,
            group: 27,
            capacity: 26,
        }))
    ));
}

/// One-syllable words no longer than the rhyme key, one per letter
const LETTER_WORDS: &[&str] = &["ba", "ce", "di", "fo", "gu", "la"];

/// Letters in first-appearance order; groups seen once are unrhymed
fn expected_pattern(groups: &[usize]) -> String {
    let mut order: Vec<usize> = Vec::new();
    groups
        .iter()
        .map(|group| {
            if groups.iter().filter(|g| *g == group).count() < 2 {
                return '-';
            }
            let position = match order.iter().position(|g| g == group) {
                Some(position) => position,
                None => {
                    order.push(*group);
                    order.len() - 1
                }
            };
            char::from(b'a' + position as u8)
        })
        .collect()
}

proptest! {
    #[test]
    fn letter_patterns_survive_scansion(
        groups in prop::collection::vec(0..LETTER_WORDS.len(), 1..16)
    ) {
        let text: Vec<&str> = groups.iter().map(|&g| LETTER_WORDS[g]).collect();
        let poem = hyphenated(&text.join("\n"), &Tables::default()).unwrap();

        prop_assert_eq!(poem.scheme().pattern(), expected_pattern(&groups));
    }
}
