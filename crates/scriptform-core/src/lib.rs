//! Business logic and port definitions for scriptform.
//!
//! This crate owns the engine-agnostic half of the system: the prompt
//! grammar, form assembly, positional answer naming, and the answer tape a
//! replay consumes from. The script-language specifics sit behind the
//! [`script::scanner::ScriptScanner`], [`script::runtime::ScriptRuntime`] and
//! [`script::loader::ScriptLoader`] traits, implemented in `scriptform-infra`.
//! It depends only on `scriptform-types` -- never on `scriptform-infra`.

pub mod form;
pub mod prompt;
pub mod script;
pub mod service;
