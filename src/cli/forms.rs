//! Forms command: lists the classification catalog

use anyhow::Result;

use super::output::Output;
use crate::domain::{FormCatalog, RuleSet};
use crate::storage::Config;

pub fn run(output: &Output, rules: Option<RuleSet>) -> Result<()> {
    let rules = match rules {
        Some(rules) => rules,
        None => Config::load()?.project.rules,
    };
    output.verbose_ctx("forms", &format!("Listing rule set: {}", rules));

    let catalog = FormCatalog::new(rules);

    if output.is_json() {
        let items: Vec<_> = catalog
            .rules()
            .iter()
            .map(|rule| {
                serde_json::json!({
                    "form": rule.form.name(),
                    "verses": rule.verses,
                    "pattern": rule.pattern.to_string(),
                })
            })
            .collect();
        output.data(&serde_json::json!({
            "rules": rules,
            "forms": items,
        }));
        return Ok(());
    }

    println!("Forms ({} rules):", rules);
    println!("{:<24} {:<8} PATTERN", "FORM", "VERSES");
    println!("{}", "-".repeat(70));
    for rule in catalog.rules() {
        let verses = rule
            .verses
            .map(|n| n.to_string())
            .unwrap_or_else(|| "any".to_string());
        println!("{:<24} {:<8} {}", rule.form.name(), verses, rule.pattern);
    }

    Ok(())
}
