//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{SimulationStats, SuggestResult};
use colored::Colorize;

/// Print one page of ranked suggestions
pub fn print_suggestions(result: &SuggestResult, verbose: bool) {
    if result.total == 0 {
        println!("\n{}", "No words found.".yellow().bold());
        println!("Check the feedback you entered; it rules out every word.");
        return;
    }

    println!("\n{}", "─".repeat(40).cyan());
    println!(
        " {} {}",
        "SUGGESTIONS".bright_cyan().bold(),
        format!("({} candidates)", result.total).bright_black()
    );
    println!("{}", "─".repeat(40).cyan());

    if verbose {
        println!("  Constraints: {}", result.constraints.summary());
        println!();
    }

    let offset = result.page * result.per_page;
    for (i, word) in result.words.iter().enumerate() {
        let rank = offset + i + 1;
        let text = word.to_uppercase();
        if rank == 1 {
            println!("  {rank:3}. {}", text.bright_green().bold());
        } else {
            println!("  {rank:3}. {text}");
        }
    }

    if result.total_pages > 1 {
        println!(
            "\n  Page {} of {}",
            result.page + 1,
            result.total_pages
        );
    }
}

/// Print the aggregate report of a simulation run
pub fn print_simulation_report(stats: &SimulationStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let success_rate = if stats.total > 0 {
        (stats.solved as f64 / stats.total as f64) * 100.0
    } else {
        0.0
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", stats.total);
    println!(
        "   Solved:           {} ({:.1}%)",
        stats.solved.to_string().green(),
        success_rate
    );
    if stats.failed > 0 {
        println!("   Failed:           {}", stats.failed.to_string().red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Time taken:       {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=6 {
        if let Some(&count) = stats.distribution.get(&guess_count) {
            let pct = (count as f64 / stats.total as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !stats.worst.is_empty() {
        println!("\n🔥 {}", "Hardest solved words:".bright_cyan().bold());
        for (word, guesses) in &stats.worst {
            println!("   {} ({guesses} guesses)", word.to_uppercase().yellow());
        }
    }

    if !stats.failures.is_empty() {
        println!("\n❌ {}", "Unsolved words:".bright_cyan().bold());
        for outcome in stats.failures.iter().take(10) {
            println!(
                "   {} (tried: {})",
                outcome.answer.to_uppercase().red(),
                outcome.guesses.join(", ")
            );
        }
        if stats.failures.len() > 10 {
            println!("   ... and {} more", stats.failures.len() - 10);
        }
    }
}
