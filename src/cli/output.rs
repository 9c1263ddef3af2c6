//! Terminal report formatting shared by the CLI commands

use indicatif::{ProgressBar, ProgressStyle};

const RULE_WIDTH: usize = 60;
const SUBSECTION_RULE_WIDTH: usize = 40;

/// Width of the key column in aligned key/value output
const KEY_WIDTH: usize = 20;

/// Progress bar for a duel series, with a live W/D/L tally in the message
pub fn create_duel_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (W:{msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a top-level section header
pub fn print_section(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{rule}\n{title}\n{rule}");
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}\n{}", "-".repeat(SUBSECTION_RULE_WIDTH));
}

/// Print a rendered board, indented to sit inside a report
pub fn print_board(board: &str) {
    for line in board.lines() {
        println!("  {line}");
    }
}

/// Print a key-value pair in the aligned report style
pub fn print_kv(key: &str, value: &str) {
    let label = format!("{key}:");
    println!("  {label:<KEY_WIDTH$} {value}");
}

/// Format a count with thousands separators
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let lead = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 3 == lead {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a fraction in `0..=1` as a percentage with one decimal
pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}
