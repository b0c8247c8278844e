//! Terminal output helpers.
//!
//! One accepted command prints one line. Anything richer (status blocks)
//! lives with its command handler.

use owo_colors::OwoColorize;

/// Print a success line for an accepted command.
pub fn accepted(what: &str) {
    println!("{} {what}", "ok".green().bold());
}

/// Print an informational line.
pub fn note(what: &str) {
    println!("{} {what}", "--".dimmed());
}

/// Render a key/value row for status output.
pub fn row(key: &str, value: &str) {
    println!("  {:<12} {value}", key.dimmed());
}
