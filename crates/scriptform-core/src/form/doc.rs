//! Title/description split of a script's documentation block.

/// Split a documentation block into `(title, description)`.
///
/// The block is trimmed and split at its first line break: the first line is
/// the title, the trimmed remainder is the description. A single-line block
/// has an empty description.
pub fn split_doc_block(doc: &str) -> (String, String) {
    let doc = doc.trim();
    match doc.split_once('\n') {
        Some((title, description)) => (title.trim().to_string(), description.trim().to_string()),
        None => (doc.to_string(), String::new()),
    }
}
