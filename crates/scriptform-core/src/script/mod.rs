//! Ports to the script language.
//!
//! The traits here are the only things the form service knows about the
//! target language. `scriptform-infra` implements them for Rhai.

pub mod loader;
pub mod runtime;
pub mod scanner;
pub mod tape;
