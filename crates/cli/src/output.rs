//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use a11y_core::Error;
use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }

    /// Print one registry entry: its id and the marker class it toggles
    pub fn entry(id: &str, marker: &str) {
        println!("  {:<20} {}", id.cyan(), marker.dimmed());
    }

    /// Print a structured error with its code, context and suggestion
    pub fn report(err: &Error) {
        eprintln!("{} {} {}", "✗".red(), err.code.to_string().dimmed(), err.message);
        if let Some(context) = &err.context {
            eprintln!("  {} {}", "context:".dimmed(), context);
        }
        if let Some(suggestion) = &err.suggestion {
            eprintln!("  {} {}", "hint:".yellow(), suggestion);
        }
    }
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1_000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.1}ms", micros as f64 / 1_000.0)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

/// Format a stylesheet size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;

    if bytes >= KB * KB {
        format!("{:.2} MB", bytes as f64 / (KB * KB) as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
