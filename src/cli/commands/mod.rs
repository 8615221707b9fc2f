//! CLI command implementations.

pub mod act;
pub mod config;
pub mod key;
