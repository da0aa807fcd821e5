//! Configuration loading and schema definitions
//!
//! Widget settings plus user-supplied tools and filters layered over the
//! built-in registries.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
