//! Rhai adapters for the script ports.
//!
//! Target scripts are Rhai programs. A script asks for an answer with the
//! free function `input("prompt")`, prints with `print`, and documents
//! itself with a leading `//!` (or `/*! ... */`) block.

pub mod doc;
pub mod runtime;
pub mod scanner;

use std::borrow::Cow;

use rhai::{Engine, OptimizationLevel, ParseError, AST};
use scriptform_types::error::SourceSyntaxError;

/// Name of the input-request function recognized in scripts.
pub const INPUT_FN: &str = "input";

/// Blank out a leading `#!` line, keeping line numbers stable.
pub(crate) fn strip_shebang(source: &str) -> Cow<'_, str> {
    if !source.starts_with("#!") {
        return Cow::Borrowed(source);
    }
    match source.find('\n') {
        Some(end) => Cow::Owned(source[end..].to_string()),
        None => Cow::Borrowed(""),
    }
}

/// Compile a script exactly as written, without constant folding or dead
/// code elimination.
pub(crate) fn compile_verbatim(source: &str) -> Result<AST, SourceSyntaxError> {
    let mut engine = Engine::new_raw();
    engine.set_optimization_level(OptimizationLevel::None);
    engine.compile(source).map_err(syntax_error)
}

pub(crate) fn syntax_error(err: ParseError) -> SourceSyntaxError {
    let ParseError(kind, position) = err;
    SourceSyntaxError::new(kind.to_string()).at(position.line(), position.position())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_shebang() {
        assert_eq!(strip_shebang("print(1);"), "print(1);");
        assert_eq!(
            strip_shebang("#!/usr/bin/env rhai\nprint(1);"),
            "\nprint(1);"
        );
        assert_eq!(strip_shebang("#!/usr/bin/env rhai"), "");
    }

    #[test]
    fn test_compile_verbatim_reports_position() {
        let err = compile_verbatim("let x = 1;\nlet y = (2;").unwrap_err();
        assert_eq!(err.line, Some(2));
        assert!(!err.message.is_empty());
    }
}
