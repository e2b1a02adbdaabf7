//! Shared domain types for scriptform.
//!
//! This crate contains the data carried between scanning, presentation and
//! replay: input fields, form specifications, answer sequences, execution
//! results, global configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod form;
pub mod replay;
