//! Terminal helpers for the accessibility widget tools
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Error reports with codes and suggestions
//! - Human-readable sizes and counts

#![warn(missing_docs)]

pub mod output;

pub use output::{format_count, format_duration, format_size, Status};
