//! Core utilities shared by the accessibility widget crates
//!
//! This crate provides:
//!
//! - **Error handling**: Structured errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based widget configuration with validation
//! - **Validation**: Collect-all validation of tool ids, prefixes, and bounds
//!
//! # Example
//!
//! ```rust,no_run
//! use a11y_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! let tools = config.schema.tool_registry();
//! let filters = config.schema.filter_registry();
//!
//! println!("{} tools, {} filters", tools.len(), filters.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod validation;

pub use error::{Error, ErrorCode, Result, ResultExt};

