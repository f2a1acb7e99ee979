//! Interactive assistant mode
//!
//! Text-based loop for playing alongside a real game. The user enters each
//! guess they made together with the tile feedback, and the assistant shows
//! how many words remain and the best next guesses.

use crate::constraint::aggregate;
use crate::core::{GuessFeedback, Word};
use crate::solver::Engine;
use std::io::{self, Write};

/// Run the interactive assistant loop
///
/// # Errors
///
/// Returns an error if reading user input fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(engine: &Engine) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Solvle - Interactive Assistant                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("After each guess you make in the game, enter it here with the");
    println!("feedback you got, e.g. 'crane --G-Y':\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (in the word, wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)");
    println!("  - Or 'word win' if that guess was the answer!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let mut history: Vec<GuessFeedback> = Vec::new();

    loop {
        let candidates = engine.solve(&history);

        if candidates.is_empty() {
            println!("\n❌ No words match! Your feedback may be incorrect.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");
        } else {
            let turn = history.len() + 1;
            println!("────────────────────────────────────────────────────────────");
            println!("Turn {turn}: {} candidates remaining", candidates.len());
            println!("────────────────────────────────────────────────────────────");

            if !history.is_empty() {
                println!("  Known: {}", aggregate(&history).summary());
            }

            println!("\n📊 Best guesses:");
            for (i, candidate) in candidates.iter().take(10).enumerate() {
                println!("  {:2}. {}", i + 1, candidate.text().to_uppercase());
            }
            println!();
        }

        let input = get_user_input("Enter 'word marks' or a command")?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                history.clear();
                println!("\n🔄 New game started!\n");
                continue;
            }
            "undo" | "u" => {
                if history.pop().is_some() {
                    println!("✓ Undone! Back to turn {}\n", history.len() + 1);
                } else {
                    println!("Nothing to undo!\n");
                }
                continue;
            }
            _ => {}
        }

        let Some((word_part, marks)) = input.split_once(char::is_whitespace) else {
            println!("❌ Expected a word and its marks, e.g. 'crane --G-Y'\n");
            continue;
        };

        let word = match Word::new(word_part.trim()) {
            Ok(w) => w,
            Err(e) => {
                println!("❌ Invalid guess '{word_part}': {e}\n");
                continue;
            }
        };

        let marks = marks.trim();
        let feedback = if matches!(marks, "win" | "correct" | "ggggg") {
            GuessFeedback::score(&word, &word)
        } else {
            match GuessFeedback::from_marks(&word, marks) {
                Some(fb) => fb,
                None => {
                    println!("❌ Invalid marks! Use G/Y/-, 'win', or '🟩🟨⬜🟩🟨'\n");
                    continue;
                }
            }
        };

        history.push(feedback);

        if history.last().is_some_and(GuessFeedback::is_win) {
            celebrate(&history);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    history.clear();
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Victory banner with the emoji history of the game
fn celebrate(history: &[GuessFeedback]) {
    use crate::output::formatters::format_guess_line;
    use colored::Colorize;

    let turn = history.len();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  S O L V E D !  ✨ 🎊 🎉    ".bright_green().bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match turn {
        1 => "🏆 Perfect!",
        2 => "⭐ Excellent!",
        3 => "💫 Great!",
        4 => "✨ Good!",
        5 => "👍 Solved!",
        _ => "✓ Complete!",
    };

    println!("\n  {}", performance.bright_yellow().bold());
    println!(
        "\n  Solved in {} {}",
        turn.to_string().bright_cyan().bold(),
        if turn == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, feedback) in history.iter().enumerate() {
        let word: String = feedback.tiles().iter().map(|t| t.letter as char).collect();
        println!(
            "    {}. {}",
            (i + 1).to_string().bright_black(),
            format_guess_line(&word, &feedback.to_emoji())
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
