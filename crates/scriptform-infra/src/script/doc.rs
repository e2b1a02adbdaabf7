//! Leading documentation block extraction.
//!
//! A script documents itself with consecutive `//!` lines, or a single
//! `/*! ... */` block, before any code:
//!
//! ```rhai
//! //! Blurple
//! //! Black and purple color mix
//! let first = input("First color [black]:");
//! ```

/// Return the text of the script's leading documentation block, if any.
///
/// A `#!` line and blank lines may precede the block. One space after `//!`
/// is stripped from each line; in a block comment, a leading `*` margin is
/// stripped from each line.
pub fn leading_doc_block(source: &str) -> Option<String> {
    let mut rest = source;
    if rest.starts_with("#!") {
        rest = rest.split_once('\n').map_or("", |(_, tail)| tail);
    }
    let rest = rest.trim_start();

    if let Some(body) = rest.strip_prefix("/*!") {
        let end = body.find("*/")?;
        let lines: Vec<&str> = body[..end]
            .lines()
            .map(|line| {
                let line = line.trim();
                let line = line.strip_prefix('*').unwrap_or(line);
                line.strip_prefix(' ').unwrap_or(line)
            })
            .collect();
        return Some(lines.join("\n"));
    }

    if rest.starts_with("//!") {
        let lines: Vec<&str> = rest
            .lines()
            .map(str::trim_start)
            .map_while(|line| line.strip_prefix("//!"))
            .map(|line| line.strip_prefix(' ').unwrap_or(line).trim_end())
            .collect();
        return Some(lines.join("\n"));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_doc_block() {
        let source = "//! Blurple\n//! Black and purple color mix\nlet c = input(\"Color:\");\n";
        assert_eq!(
            leading_doc_block(source).as_deref(),
            Some("Blurple\nBlack and purple color mix")
        );
    }

    #[test]
    fn test_line_doc_block_with_blank_line() {
        let source = "//! Blurple\n//!\n//! Black and purple color mix\n";
        assert_eq!(
            leading_doc_block(source).as_deref(),
            Some("Blurple\n\nBlack and purple color mix")
        );
    }

    #[test]
    fn test_block_doc_comment() {
        let source = "/*!\n * Blurple\n * Black and purple color mix\n */\nprint(1);";
        assert_eq!(
            leading_doc_block(source).as_deref(),
            Some("\nBlurple\nBlack and purple color mix\n")
        );
    }

    #[test]
    fn test_shebang_and_blank_lines_are_skipped() {
        let source = "#!/usr/bin/env rhai\n\n//! Tool\nprint(1);";
        assert_eq!(leading_doc_block(source).as_deref(), Some("Tool"));
    }

    #[test]
    fn test_doc_block_stops_at_code() {
        let source = "//! Title\nlet x = 1;\n//! not part of the block\n";
        assert_eq!(leading_doc_block(source).as_deref(), Some("Title"));
    }

    #[test]
    fn test_plain_comments_are_not_docs() {
        assert_eq!(leading_doc_block("// just a comment\nprint(1);"), None);
        assert_eq!(leading_doc_block("/* block */ print(1);"), None);
    }

    #[test]
    fn test_code_first_means_no_docs() {
        assert_eq!(leading_doc_block("print(1);\n//! Too late"), None);
        assert_eq!(leading_doc_block(""), None);
    }
}
