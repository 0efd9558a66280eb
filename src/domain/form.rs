//! Classical stanza and poem forms
//!
//! A [`FormCatalog`] is an ordered list of [`FormRule`]s. Each rule names
//! the verse count it applies to (or any) and a [`Pattern`] over the
//! scheme; the first matching rule names the form. Two rule sets exist:
//! the canonical one and a draft variant that names a few alternate forms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::scheme::Scheme;

/// Which set of classification rules to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSet {
    #[default]
    Canonical,

    /// Alternate rules: soleá for `aba`, sextilla for `AABBCC`
    Draft,
}

impl RuleSet {
    pub fn as_str(&self) -> &str {
        match self {
            RuleSet::Canonical => "canonical",
            RuleSet::Draft => "draft",
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuleSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "canonical" | "hardened" => Ok(RuleSet::Canonical),
            "draft" => Ok(RuleSet::Draft),
            _ => Err(format!("Unknown rule set: {}", s)),
        }
    }
}

/// A named poem or stanza form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoemForm {
    Pareado,
    Terceto,
    Tercerilla,
    Solea,
    Cuarteto,
    Serventesio,
    Redondilla,
    Cuarteta,
    CuadernaVia,
    Quintilla,
    Quinteto,
    Lira,
    SextaRima,
    CoplaDePieQuebrado,
    Sextilla,
    OctavaReal,
    Octavilla,
    DecimaEspinela,
    Soneto,
    VersoLibre,
    Unknown,
}

impl PoemForm {
    pub fn name(&self) -> &'static str {
        match self {
            PoemForm::Pareado => "pareado",
            PoemForm::Terceto => "terceto",
            PoemForm::Tercerilla => "tercerilla",
            PoemForm::Solea => "soleá",
            PoemForm::Cuarteto => "cuarteto",
            PoemForm::Serventesio => "serventesio",
            PoemForm::Redondilla => "redondilla",
            PoemForm::Cuarteta => "cuarteta",
            PoemForm::CuadernaVia => "cuaderna via",
            PoemForm::Quintilla => "quintilla",
            PoemForm::Quinteto => "quinteto",
            PoemForm::Lira => "lira",
            PoemForm::SextaRima => "sexta rima",
            PoemForm::CoplaDePieQuebrado => "copla de pie quebrado",
            PoemForm::Sextilla => "sextilla",
            PoemForm::OctavaReal => "octava real",
            PoemForm::Octavilla => "octavilla",
            PoemForm::DecimaEspinela => "décima espinela",
            PoemForm::Soneto => "soneto",
            PoemForm::VersoLibre => "verso libre",
            PoemForm::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PoemForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for PoemForm {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Condition a scheme must meet for a rule to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Any scheme
    Any,

    /// Bare letters equal one of the listed patterns
    Letters(&'static [&'static str]),

    /// Bare letters equal the pattern and every verse has this many syllables
    LettersWithSyllables(&'static str, usize),

    /// Syllable-prefixed tokens equal the listed sequence
    Tokens(&'static [&'static str]),

    /// Every verse is unrhymed
    Unrhymed,
}

impl Pattern {
    pub fn matches(&self, scheme: &Scheme) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::Letters(options) => {
                let pattern = scheme.pattern();
                options.iter().any(|o| *o == pattern)
            }
            Pattern::LettersWithSyllables(letters, syllables) => {
                scheme.pattern() == *letters
                    && scheme.syllable_counts().iter().all(|c| c == syllables)
            }
            Pattern::Tokens(tokens) => scheme.tokens() == *tokens,
            Pattern::Unrhymed => scheme.is_unrhymed(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Any => write!(f, "any scheme"),
            Pattern::Letters(options) => write!(f, "{}", options.join(" | ")),
            Pattern::LettersWithSyllables(letters, syllables) => {
                write!(f, "{} with {} syllables each", letters, syllables)
            }
            Pattern::Tokens(tokens) => write!(f, "{}", tokens.join(" ")),
            Pattern::Unrhymed => write!(f, "no rhyme"),
        }
    }
}

/// One row of the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRule {
    /// Verse count the rule applies to; `None` for any count
    pub verses: Option<usize>,
    pub pattern: Pattern,
    pub form: PoemForm,
}

impl FormRule {
    fn new(verses: usize, pattern: Pattern, form: PoemForm) -> Self {
        Self {
            verses: Some(verses),
            pattern,
            form,
        }
    }

    pub fn matches(&self, scheme: &Scheme) -> bool {
        self.verses.map_or(true, |n| n == scheme.len()) && self.pattern.matches(scheme)
    }
}

const QUINTILLA: &[&str] = &["ababa", "abaab", "abbab", "aabab", "aabba"];
const QUINTETO: &[&str] = &["ABABA", "ABAAB", "ABBAB", "AABAB", "AABBA"];
const SONETO: &[&str] = &["ABBAABBACDCDCD", "ABBAABBACDECDE", "ABBAABBACDEDCE"];
const LIRA: &[&str] = &["7a", "11B", "7a", "7b", "11B"];
const PIE_QUEBRADO: &[&str] = &["8a", "8b", "4c", "8a", "8b", "4c"];

/// Ordered classification table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormCatalog {
    rules: Vec<FormRule>,
}

impl FormCatalog {
    /// Builds the catalog for a rule set
    pub fn new(rule_set: RuleSet) -> Self {
        use Pattern::*;
        use PoemForm::*;

        let three_minor = match rule_set {
            RuleSet::Canonical => Tercerilla,
            RuleSet::Draft => Solea,
        };

        let mut rules = vec![
            FormRule::new(2, Any, Pareado),
            FormRule::new(3, Letters(&["ABA"]), Terceto),
            FormRule::new(3, Letters(&["aba"]), three_minor),
            FormRule::new(4, Letters(&["ABBA"]), Cuarteto),
            FormRule::new(4, Letters(&["ABAB"]), Serventesio),
            FormRule::new(4, Letters(&["abba"]), Redondilla),
            FormRule::new(4, Letters(&["abab"]), Cuarteta),
            FormRule::new(4, Letters(&["-a-a"]), Serventesio),
            FormRule::new(4, LettersWithSyllables("AAAA", 14), CuadernaVia),
            FormRule::new(5, Letters(QUINTILLA), Quintilla),
            FormRule::new(5, Letters(QUINTETO), Quinteto),
            FormRule::new(5, Tokens(LIRA), Lira),
            FormRule::new(6, Letters(&["ABABCC"]), SextaRima),
            FormRule::new(6, Tokens(PIE_QUEBRADO), CoplaDePieQuebrado),
        ];

        if rule_set == RuleSet::Draft {
            rules.push(FormRule::new(6, Letters(&["AABBCC"]), Sextilla));
        }

        rules.extend([
            FormRule::new(8, Letters(&["ABABABCC"]), OctavaReal),
            FormRule::new(8, Letters(&["-aab-ccb"]), Octavilla),
            FormRule::new(10, Letters(&["abbaaccddc"]), DecimaEspinela),
            FormRule::new(14, Letters(SONETO), Soneto),
            FormRule {
                verses: None,
                pattern: Unrhymed,
                form: VersoLibre,
            },
        ]);

        Self { rules }
    }

    pub fn rules(&self) -> &[FormRule] {
        &self.rules
    }

    /// Names the form of a scheme; `Unknown` when no rule matches
    pub fn classify(&self, scheme: &Scheme) -> PoemForm {
        self.rules
            .iter()
            .find(|rule| rule.matches(scheme))
            .map_or(PoemForm::Unknown, |rule| rule.form)
    }
}

impl Default for FormCatalog {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scheme::SchemeSymbol;
    use crate::domain::tables::Tables;

    /// Builds a scheme from tokens such as "11A" or "7-"
    fn scheme(tokens: &[&str]) -> Scheme {
        let tables = Tables::default();
        let symbols = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let split = token.len() - 1;
                let count: usize = token[..split].parse().unwrap();
                let mark = token[split..].chars().next().unwrap();
                let group = if mark == '-' {
                    0
                } else {
                    (mark.to_ascii_lowercase() as usize) - ('a' as usize) + 1
                };
                SchemeSymbol::encode(i, group, count, &tables).unwrap()
            })
            .collect();
        Scheme::from_symbols(symbols)
    }

    /// Builds a scheme from bare letters, with 11 syllables for uppercase
    fn letters(pattern: &str) -> Scheme {
        let tokens: Vec<String> = pattern
            .chars()
            .map(|c| {
                if c.is_ascii_uppercase() {
                    format!("11{}", c)
                } else {
                    format!("8{}", c)
                }
            })
            .collect();
        let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
        scheme(&refs)
    }

    fn classify(s: &Scheme) -> PoemForm {
        FormCatalog::default().classify(s)
    }

    #[test]
    fn two_verses_are_always_pareado() {
        assert_eq!(classify(&letters("--")), PoemForm::Pareado);
        assert_eq!(classify(&letters("AA")), PoemForm::Pareado);
        assert_eq!(classify(&letters("ab")), PoemForm::Pareado);
    }

    #[test]
    fn soneto_variants() {
        assert_eq!(classify(&letters("ABBAABBACDCDCD")), PoemForm::Soneto);
        assert_eq!(classify(&letters("ABBAABBACDECDE")), PoemForm::Soneto);
        assert_eq!(classify(&letters("ABBAABBACDEDCE")), PoemForm::Soneto);
        assert_eq!(classify(&letters("ABABABABCDCDCD")), PoemForm::Unknown);
    }

    #[test]
    fn four_verse_forms() {
        assert_eq!(classify(&letters("ABBA")), PoemForm::Cuarteto);
        assert_eq!(classify(&letters("ABAB")), PoemForm::Serventesio);
        assert_eq!(classify(&letters("abba")), PoemForm::Redondilla);
        assert_eq!(classify(&letters("abab")), PoemForm::Cuarteta);
        assert_eq!(classify(&letters("-a-a")), PoemForm::Serventesio);
    }

    #[test]
    fn cuaderna_via_needs_alexandrines() {
        assert_eq!(
            classify(&scheme(&["14A", "14A", "14A", "14A"])),
            PoemForm::CuadernaVia
        );
        assert_eq!(
            classify(&scheme(&["14A", "13A", "14A", "14A"])),
            PoemForm::Unknown
        );
    }

    #[test]
    fn five_verse_forms() {
        assert_eq!(classify(&letters("abaab")), PoemForm::Quintilla);
        assert_eq!(classify(&letters("AABBA")), PoemForm::Quinteto);
        assert_eq!(
            classify(&scheme(&["7a", "11B", "7a", "7b", "11B"])),
            PoemForm::Lira
        );
        assert_eq!(
            classify(&scheme(&["8a", "11B", "7a", "7b", "11B"])),
            PoemForm::Unknown
        );
    }

    #[test]
    fn six_verse_forms() {
        assert_eq!(classify(&letters("ABABCC")), PoemForm::SextaRima);
        assert_eq!(
            classify(&scheme(&["8a", "8b", "4c", "8a", "8b", "4c"])),
            PoemForm::CoplaDePieQuebrado
        );
        assert_eq!(classify(&letters("AABBCC")), PoemForm::Unknown);
    }

    #[test]
    fn eight_and_ten_verse_forms() {
        assert_eq!(classify(&letters("ABABABCC")), PoemForm::OctavaReal);
        assert_eq!(classify(&letters("-aab-ccb")), PoemForm::Octavilla);
        assert_eq!(classify(&letters("abbaaccddc")), PoemForm::DecimaEspinela);
    }

    #[test]
    fn three_verse_forms_by_rule_set() {
        assert_eq!(classify(&letters("ABA")), PoemForm::Terceto);
        assert_eq!(classify(&letters("aba")), PoemForm::Tercerilla);

        let draft = FormCatalog::new(RuleSet::Draft);
        assert_eq!(draft.classify(&letters("aba")), PoemForm::Solea);
        assert_eq!(draft.classify(&letters("AABBCC")), PoemForm::Sextilla);
    }

    #[test]
    fn unrhymed_is_verso_libre_at_any_length() {
        assert_eq!(classify(&letters("---")), PoemForm::VersoLibre);
        assert_eq!(classify(&letters("----")), PoemForm::VersoLibre);
        assert_eq!(classify(&letters("-------")), PoemForm::VersoLibre);
    }

    #[test]
    fn unmatched_is_unknown() {
        assert_eq!(classify(&letters("abcab")), PoemForm::Unknown);
        assert_eq!(classify(&letters("aaaaaaa")), PoemForm::Unknown);
    }

    #[test]
    fn rule_set_parses() {
        assert_eq!("draft".parse::<RuleSet>(), Ok(RuleSet::Draft));
        assert_eq!("Hardened".parse::<RuleSet>(), Ok(RuleSet::Canonical));
        assert!("other".parse::<RuleSet>().is_err());
    }

    #[test]
    fn form_serializes_as_name() {
        let json = serde_json::to_string(&PoemForm::DecimaEspinela).unwrap();
        assert_eq!(json, "\"décima espinela\"");
    }
}
