use anyhow::Result;
use colored::Colorize;

use tutorlint::education::{self, ExplanationLevel};

pub fn run(code: &str, level: ExplanationLevel) -> Result<()> {
    let Some(entry) = education::entry_for(code) else {
        eprintln!("No educational content registered for '{code}'.");
        eprintln!("Known codes: {}", education::registered_codes().join(", "));
        return Ok(());
    };

    println!();
    println!("{}", code.bold());
    println!("  {}", education::explanation_for(code, level));
    if !entry.fix_suggestion.is_empty() {
        println!("  {} {}", "Fix:".green(), entry.fix_suggestion);
    }
    if !entry.related_concepts.is_empty() {
        println!("  Related: {}", entry.related_concepts.join(", "));
    }
    if !entry.practice_exercises.is_empty() {
        println!("  Practice: {}", entry.practice_exercises.join(", "));
    }
    if !entry.learn_more.is_empty() {
        println!("  Learn more: {}", entry.learn_more);
    }
    println!();

    Ok(())
}
