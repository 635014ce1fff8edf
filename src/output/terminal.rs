// Colored terminal output for document stats and comparisons.

use std::f64::consts::FRAC_PI_2;

use colored::Colorize;

use super::{single_line, truncate_chars};
use crate::compare::{Comparison, DocumentSummary};
use crate::vector::FrequencyVector;

const LABEL_WIDTH: usize = 40;
const BAR_WIDTH: usize = 20;

/// Display a comparison between two documents.
pub fn display_comparison(comparison: &Comparison, precision: usize) {
    println!("\n{}", "=== Document Similarity ===".bold());
    println!();

    display_summary("A", &comparison.a);
    display_summary("B", &comparison.b);
    println!();

    println!(
        "  Shared words: {}   Dot product: {}",
        comparison.shared_words, comparison.dot_product
    );

    let distance = format!("{:.*} rad", precision, comparison.distance);
    println!(
        "  Distance:     {}  {}",
        colorize_distance(comparison.distance, &distance),
        similarity_bar(comparison.similarity)
    );
    println!(
        "  Similarity:   {:.*}",
        precision, comparison.similarity
    );

    if comparison.is_identical() {
        println!("\n  {}", "Documents have identical word profiles.".bright_green());
    } else if comparison.distance >= FRAC_PI_2 {
        println!("\n  {}", "Documents share no vocabulary.".bright_red());
    }
    println!();
}

fn display_summary(tag: &str, summary: &DocumentSummary) {
    let label = truncate_chars(&single_line(&summary.label), LABEL_WIDTH);
    println!(
        "  {} {:<width$}  {} lines, {} words ({} unique), norm {:.4}",
        format!("{tag}:").bold(),
        label,
        summary.lines,
        summary.words,
        summary.unique_words,
        summary.norm,
        width = LABEL_WIDTH + 3,
    );
}

/// Display the counters and most frequent words of a single document.
pub fn display_stats(label: &str, vector: &FrequencyVector, top: usize) {
    let label = truncate_chars(&single_line(label), LABEL_WIDTH);
    println!("\n{}", format!("=== {label} ===").bold());
    println!();
    println!("  Lines:        {}", vector.line_count());
    println!("  Words:        {}", vector.word_count());
    println!("  Unique words: {}", vector.unique_word_count());
    println!("  Norm:         {:.6}", vector.euclidean_norm());

    if vector.is_empty() {
        println!("\n  {}", "No words found.".dimmed());
        println!();
        return;
    }

    let top_words = vector.top_words(top);
    println!("\n  Top {} words:", top_words.len());
    for (i, (word, count)) in top_words.iter().enumerate() {
        println!("  {:>4}. {:<24} {}", i + 1, word, count.to_string().dimmed());
    }
    println!();
}

/// Color a formatted distance by how close the documents are.
fn colorize_distance(distance: f64, text: &str) -> colored::ColoredString {
    let share = distance / FRAC_PI_2;
    if share <= 0.25 {
        text.bright_green()
    } else if share <= 0.75 {
        text.bright_yellow()
    } else {
        text.bright_red()
    }
}

fn similarity_bar(similarity: f64) -> String {
    let filled = (similarity.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let empty = BAR_WIDTH.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}
