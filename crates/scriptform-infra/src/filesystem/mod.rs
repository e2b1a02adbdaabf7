//! Filesystem adapters for scriptform.
//!
//! Implements the `ScriptLoader` trait from `scriptform-core` for local files
//! and resolves the data directory that holds `config.toml`.

use std::path::{Path, PathBuf};

use scriptform_core::script::loader::{ScriptLoader, ScriptSource};
use scriptform_types::error::LoadError;

/// File extension that marks a reference as a script path even when the
/// file does not exist (yet).
const SCRIPT_EXTENSION: &str = "rhai";

/// Local filesystem implementation of the `ScriptLoader` trait.
///
/// All reads go through `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalScriptLoader;

impl LocalScriptLoader {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptLoader for LocalScriptLoader {
    /// An existing path is a file. So is a single-line reference ending in
    /// `.rhai`, so a typo reports "not found" instead of being run as code.
    /// Anything else is inline script text.
    fn resolve(&self, reference: &str) -> ScriptSource {
        let path = Path::new(reference);
        let looks_like_path = !reference.contains('\n')
            && path
                .extension()
                .is_some_and(|ext| ext == SCRIPT_EXTENSION);

        if looks_like_path || (!reference.contains('\n') && path.is_file()) {
            ScriptSource::File(path.to_path_buf())
        } else {
            ScriptSource::Inline(reference.to_string())
        }
    }

    async fn load(&self, source: &ScriptSource) -> Result<String, LoadError> {
        match source {
            ScriptSource::Inline(text) => Ok(text.clone()),
            ScriptSource::File(path) => match tokio::fs::read_to_string(path).await {
                Ok(text) => Ok(text),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    Err(LoadError::NotFound(path.display().to_string()))
                }
                Err(err) => Err(LoadError::Io {
                    path: path.display().to_string(),
                    source: err,
                }),
            },
        }
    }
}

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `SCRIPTFORM_DATA_DIR` environment variable
/// 2. `~/.scriptform` under the home directory
/// 3. `.scriptform` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SCRIPTFORM_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".scriptform");
    }

    PathBuf::from(".scriptform")
}
