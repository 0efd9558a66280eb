//! Scan command: metrical and rhyme analysis of whole poems

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use super::output::Output;
use super::session::Session;
use crate::domain::{analyze_batch, Poem, PoemError, PoemReport, RuleSet};
use crate::storage::{PoemFile, PoemMeta};

/// JSON shape of one analyzed poem
#[derive(Serialize)]
struct ScanReport<'a> {
    source: String,

    #[serde(flatten)]
    meta: &'a PoemMeta,

    rules: RuleSet,

    #[serde(flatten)]
    report: PoemReport,
}

/// Analyzes each file (or stdin) and prints its form and scheme
pub fn run(
    output: &Output,
    files: &[PathBuf],
    rules: Option<RuleSet>,
    show_verses: bool,
) -> Result<()> {
    let session = Session::load(output, rules)?;
    let poems = read_poems(output, files)?;

    let texts: Vec<&str> = poems.iter().map(|p| p.body.as_str()).collect();
    let results = analyze_all(&session, &texts)?;
    output.verbose_ctx("scan", &format!("Analyzed {} poem(s)", results.len()));

    let many = poems.len() > 1;

    for (index, (file, result)) in poems.iter().zip(results).enumerate() {
        let label = file.label();
        let poem = result.with_context(|| format!("Failed to analyze {}", label))?;

        for warning in poem.warnings() {
            output.warn(
                "scan",
                &format!(
                    "{}: verse {}: no stressed syllable in '{}'",
                    label, warning.line, warning.word
                ),
            );
        }

        if output.is_json() {
            output.data(&ScanReport {
                source: label,
                meta: &file.meta,
                rules: session.rules,
                report: poem.report(),
            });
            continue;
        }

        if many {
            if index > 0 {
                println!();
            }
            println!("== {} ==", label);
        }
        print_poem(&poem, show_verses);
    }

    Ok(())
}

/// Runs the batch on the configured worker pool
fn analyze_all(session: &Session, texts: &[&str]) -> Result<Vec<Result<Poem, PoemError>>> {
    let analyze = || analyze_batch(texts, session.syllabifier(), &session.tables);

    match session.jobs() {
        Some(jobs) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .context("Failed to start worker pool")?;
            Ok(pool.install(analyze))
        }
        None => Ok(analyze()),
    }
}

fn read_poems(output: &Output, files: &[PathBuf]) -> Result<Vec<PoemFile>> {
    if files.is_empty() {
        output.verbose_ctx("scan", "Reading poem from stdin");
        return Ok(vec![PoemFile::read_from(io::stdin().lock())?]);
    }

    files
        .iter()
        .map(|path| {
            if path.as_os_str() == "-" {
                output.verbose_ctx("scan", "Reading poem from stdin");
                PoemFile::read_from(io::stdin().lock())
            } else {
                output.verbose_ctx("scan", &format!("Reading {}", path.display()));
                PoemFile::read(path)
            }
        })
        .collect()
}

fn print_poem(poem: &Poem, show_verses: bool) {
    println!("Form:      {}", poem.form());
    println!("Scheme:    {}", poem.scheme().pattern());
    println!("Tokens:    {}", poem.tokens().join(" "));

    if !poem.clusters().keys().is_empty() {
        println!("Rhymes:    {}", poem.clusters().keys().join(", "));
    }

    if !show_verses {
        return;
    }

    println!();
    println!(
        "{:<4} {:<4} {:<4} {:<10} {:<10} {:<8} VERSE",
        "#", "SYL", "SYM", "RHYME", "ENDING", "VOWELS"
    );
    println!("{}", "-".repeat(78));

    let rows = poem
        .verses()
        .iter()
        .zip(poem.scheme().symbols())
        .zip(poem.clusters().kinds());

    for (i, ((verse, symbol), kind)) in rows.enumerate() {
        println!(
            "{:<4} {:<4} {:<4} {:<10} {:<10} {:<8} {}",
            i + 1,
            verse.syllable_count(),
            symbol.mark(),
            kind.to_string(),
            verse.ending().consonant_form(),
            verse.ending().vowels(),
            verse.refined_text()
        );
    }
}
