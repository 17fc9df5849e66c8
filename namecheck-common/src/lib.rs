//! # namecheck Common Library
//!
//! Shared code for the namecheck crates:
//! - Error types
//! - TOML configuration loading, defaults and validation

pub mod config;
pub mod error;

pub use config::TomlConfig;
pub use error::{Error, Result};
