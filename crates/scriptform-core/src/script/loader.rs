//! ScriptLoader trait for locating and reading script source.
//!
//! Defined in scriptform-core so callers can re-read a script on every use
//! without depending on a specific filesystem implementation. The
//! `LocalScriptLoader` adapter lives in scriptform-infra.

use std::fmt;
use std::path::PathBuf;

use scriptform_types::error::LoadError;

/// Where a script's text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    /// A script file, re-read on every load so edits are picked up.
    File(PathBuf),
    /// Script text passed directly on the command line.
    Inline(String),
}

impl fmt::Display for ScriptSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptSource::File(path) => write!(f, "{}", path.display()),
            ScriptSource::Inline(_) => f.write_str("<inline script>"),
        }
    }
}

/// Abstraction over script lookup and reading.
pub trait ScriptLoader: Send + Sync {
    /// Decide whether a user-supplied reference names a file or is itself
    /// script text.
    fn resolve(&self, reference: &str) -> ScriptSource;

    /// Read the current text of a script.
    fn load(
        &self,
        source: &ScriptSource,
    ) -> impl std::future::Future<Output = Result<String, LoadError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ScriptSource::File(PathBuf::from("scripts/password.rhai")).to_string(),
            "scripts/password.rhai"
        );
        assert_eq!(
            ScriptSource::Inline("print(1);".to_string()).to_string(),
            "<inline script>"
        );
    }
}
