//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a guess with its emoji feedback, e.g. "CRANE 🟩🟨⬜⬜🟩"
#[must_use]
pub fn format_guess_line(word: &str, emoji: &str) -> String {
    format!("{} {}", word.to_uppercase(), emoji)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn guess_line_uppercases() {
        assert_eq!(format_guess_line("crane", "🟩🟩🟩🟩🟩"), "CRANE 🟩🟩🟩🟩🟩");
    }
}
