//! Infrastructure layer for scriptform.
//!
//! Contains implementations of the ports defined in `scriptform-core`: the
//! Rhai scanner and replay runtime, the local filesystem script loader, and
//! the `config.toml` loader.

pub mod config;
pub mod filesystem;
pub mod script;
