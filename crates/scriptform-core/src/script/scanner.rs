//! Static discovery of a script's input requests.

use scriptform_types::error::SourceSyntaxError;

/// Raw scanner output: the leading documentation block and the literal
/// prompt of every recognized `input(...)` call, in program order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedScript {
    pub doc: Option<String>,
    pub prompts: Vec<String>,
}

/// Trait for scanning script source without running it.
///
/// Implementations must report call sites in the order a replay of the same
/// script would reach them for straight-line code, and must fail on a script
/// that does not parse instead of returning a partial scan.
pub trait ScriptScanner: Send + Sync {
    fn scan(&self, source: &str) -> Result<ScannedScript, SourceSyntaxError>;
}
