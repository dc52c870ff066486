//! Common utilities for the Tincture color model.
//!
//! This crate provides shared infrastructure used by the value crates:
//! - **Warning System** - colored, deduplicated stderr diagnostics
//! - **Errors** - typed failures for the fallible parsers

pub mod error;
pub mod warning;

pub use error::HexColorError;
