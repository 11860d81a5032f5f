use indicatif::{ProgressBar, ProgressStyle};

use crate::app::CastPathApp;
use crate::args::Command;
use crate::colors::ColorScheme;
use crate::search::BatchSummary;

pub fn create_progress_bar(query_count: usize, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::new(query_count as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} queries",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-"),
    );
    progress
}

pub fn display_corpus_info(
    app: &CastPathApp,
    query_count: usize,
    skipped_queries: usize,
    colors: &ColorScheme,
) {
    println!(
        "🎬 Loaded {} actors and {} movies from {} records",
        colors.count(&format_number(app.store.actor_count())),
        colors.count(&format_number(app.store.movie_count())),
        colors.count(&format_number(app.ingest_stats.records))
    );

    if app.ingest_stats.skipped > 0 {
        println!(
            "⚡ Skipped {} malformed cast records",
            colors.count(&format_number(app.ingest_stats.skipped))
        );
    }

    if skipped_queries > 0 {
        println!(
            "⚡ Skipped {} malformed query records",
            colors.count(&format_number(skipped_queries))
        );
    }

    println!(
        "🔍 Answering {} queries...",
        colors.count(&format_number(query_count))
    );
}

pub fn display_batch_summary(
    summary: &BatchSummary,
    command: &Command,
    verbose: bool,
    colors: &ColorScheme,
) {
    let (noun, description) = match command {
        Command::Path { mode, .. } => ("paths", format!("{} search", mode)),
        Command::Connect { strategy, .. } => ("connection years", format!("{} strategy", strategy)),
    };

    println!(
        "{} Wrote {} {} to {}",
        colors.success("✅"),
        colors.count(&format_number(summary.answered)),
        noun,
        colors.output_path(&command.output_file().display().to_string())
    );

    if summary.unresolved > 0 {
        println!(
            "{} {} queries had no connection",
            colors.failure("❌"),
            colors.count(&format_number(summary.unresolved))
        );
    }

    if verbose {
        println!("\n---\n");
        if summary.edge_count > 0 {
            println!(
                "{} Built {} edges",
                colors.stats("📊"),
                colors.count(&format_number(summary.edge_count))
            );
        }
        println!(
            "{} Answered with {} in {} sec",
            colors.stats("📊"),
            description,
            colors.count(&format!("{:.3}", summary.search_duration))
        );
    }
}

/// Groups digits in threes: `1234567` becomes `1,234,567`.
pub fn format_number(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
