//! Rhyme clustering across the verses of a poem
//!
//! Endings are scanned in verse order. A verse joins a consonant rhyme
//! group when an already discovered rhyme key occurs inside its ending;
//! otherwise the first later ending sharing its final two characters
//! establishes a new key (their longest common suffix). Verses left over
//! fall back to assonance on the vowel skeleton.
//!
//! Discovery order of keys is the basis of the scheme letters: the first
//! key is `A`/`a`, the second `B`/`b`, and so on.

use std::collections::HashSet;

use serde::Serialize;

use super::verse::LineEnding;

/// How a verse rhymes with the rest of the poem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RhymeKind {
    /// Shares a discovered rhyme key (full rhyme)
    Consonant,

    /// Only its vowel skeleton repeats elsewhere
    Assonant,

    /// Rhymes with no other verse
    Unrhymed,
}

impl std::fmt::Display for RhymeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RhymeKind::Consonant => write!(f, "consonant"),
            RhymeKind::Assonant => write!(f, "assonant"),
            RhymeKind::Unrhymed => write!(f, "unrhymed"),
        }
    }
}

/// Result of clustering the endings of one poem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RhymeClusters {
    /// Rhyme keys in discovery order
    keys: Vec<String>,

    /// 1-based key index per verse, 0 for no consonant rhyme
    groups: Vec<usize>,

    kinds: Vec<RhymeKind>,
}

impl RhymeClusters {
    /// Clusters the endings of a poem, given in verse order
    pub fn cluster(endings: &[LineEnding]) -> Self {
        let mut keys: Vec<String> = Vec::new();
        let mut kinds = Vec::with_capacity(endings.len());

        for (i, ending) in endings.iter().enumerate() {
            let form = ending.consonant_form();

            if keys.iter().any(|key| form.contains(key.as_str())) {
                kinds.push(RhymeKind::Consonant);
                continue;
            }

            let later = distinct_in_order(endings[i + 1..].iter().map(LineEnding::consonant_form));
            if let Some(partner) = later.into_iter().find(|other| shares_final_pair(form, other)) {
                keys.push(longest_common_suffix(form, partner));
                kinds.push(RhymeKind::Consonant);
                continue;
            }

            let skeleton = ending.vowel_skeleton();
            let repeats = endings
                .iter()
                .filter(|e| e.vowel_skeleton() == skeleton)
                .count();
            kinds.push(if repeats > 1 {
                RhymeKind::Assonant
            } else {
                RhymeKind::Unrhymed
            });
        }

        let groups: Vec<usize> = endings
            .iter()
            .map(|ending| group_of(&keys, ending.consonant_form()))
            .collect();

        // A key found later can still reach an earlier verse's ending
        for (kind, &group) in kinds.iter_mut().zip(&groups) {
            if group > 0 {
                *kind = RhymeKind::Consonant;
            }
        }

        Self {
            keys,
            groups,
            kinds,
        }
    }

    /// Discovered rhyme keys in discovery order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Group index per verse (1-based, 0 = no consonant rhyme)
    pub fn groups(&self) -> &[usize] {
        &self.groups
    }

    pub fn kinds(&self) -> &[RhymeKind] {
        &self.kinds
    }

    /// Returns true if no verse has a consonant rhyme
    pub fn is_unrhymed(&self) -> bool {
        self.groups.iter().all(|&g| g == 0)
    }
}

/// Index (1-based) of the first key contained in `form`, 0 if none
fn group_of(keys: &[String], form: &str) -> usize {
    keys.iter()
        .position(|key| form.contains(key.as_str()))
        .map_or(0, |i| i + 1)
}

/// Drops repeated items, keeping the first occurrence of each
fn distinct_in_order<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(*item)).collect()
}

/// Two endings match when their final two characters are equal
fn shares_final_pair(a: &str, b: &str) -> bool {
    let mut a = a.chars().rev();
    let mut b = b.chars().rev();
    match (a.next(), a.next(), b.next(), b.next()) {
        (Some(a1), Some(a2), Some(b1), Some(b2)) => a1 == b1 && a2 == b2,
        _ => false,
    }
}

/// Longest common suffix of two strings, compared by character
///
/// Empty when the final characters differ.
pub fn longest_common_suffix(a: &str, b: &str) -> String {
    let mut suffix: Vec<char> = a
        .chars()
        .rev()
        .zip(b.chars().rev())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x)
        .collect();
    suffix.reverse();
    suffix.into_iter().collect()
}
