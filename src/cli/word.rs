//! Word command: syllables and stress of single words

use anyhow::{Context, Result};

use super::output::Output;
use super::session::Session;
use crate::domain::Word;

pub fn run(output: &Output, words: &[String]) -> Result<()> {
    let session = Session::load(output, None)?;

    let mut analyzed = Vec::with_capacity(words.len());
    for raw in words {
        let text: String = raw
            .to_lowercase()
            .chars()
            .filter(|c| !session.tables.punctuation().contains(c))
            .collect();

        let word = Word::analyze(text.trim(), session.syllabifier(), &session.tables)
            .with_context(|| format!("Failed to analyze word '{}'", raw))?;

        if !word.has_stress() {
            output.warn("word", &format!("no stressed syllable in '{}'", word.text()));
        }
        analyzed.push(word);
    }

    if output.is_json() {
        let items: Vec<_> = analyzed
            .iter()
            .map(|w| {
                serde_json::json!({
                    "word": w.text(),
                    "syllables": w.syllables(),
                    "syllable_count": w.syllable_count(),
                    "stress": w.stress().ok().map(|s| s.to_string()),
                    "starts_with_vowel_like": w.starts_with_vowel_like(),
                    "ends_with_vowel_like": w.ends_with_vowel_like(),
                })
            })
            .collect();
        output.data(&items);
        return Ok(());
    }

    println!("{:<20} {:<24} {:<4} {:<14} SYNALEPHA", "WORD", "SYLLABLES", "N", "STRESS");
    println!("{}", "-".repeat(76));
    for word in &analyzed {
        let stress = word
            .stress()
            .map(|s| s.to_string())
            .unwrap_or_else(|_| "-".to_string());

        let synalepha = match (word.starts_with_vowel_like(), word.ends_with_vowel_like()) {
            (true, true) => "both",
            (true, false) => "start",
            (false, true) => "end",
            (false, false) => "none",
        };

        println!(
            "{:<20} {:<24} {:<4} {:<14} {}",
            word.text(),
            word.syllables().join("-"),
            word.syllable_count(),
            stress,
            synalepha
        );
    }

    Ok(())
}
