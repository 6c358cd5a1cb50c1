//! Import name derivation.
//!
//! A meta definition file at `test/Button.node.js` (relative to the scanned
//! directory) is imported as `TestButtonNode`.

use barrelgen_core::capitalize_first;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Derive the import name for a path relative to the scanned directory.
///
/// The path is split on every run of characters other than ASCII letters,
/// digits and `_`. The last segment (the extension) is dropped and the
/// remaining segments are concatenated with their first letter uppercased.
/// The result is empty when nothing but the extension remains.
pub fn import_name(relative_path: &str) -> String {
    let mut segments: Vec<&str> = relative_path
        .split(|c: char| !is_word_char(c))
        .filter(|segment| !segment.is_empty())
        .collect();

    // A trailing separator leaves an empty last segment, and that empty
    // segment is the one dropped.
    if !relative_path.ends_with(|c: char| !is_word_char(c)) {
        segments.pop();
    }

    segments.into_iter().map(capitalize_first).collect()
}

/// Whether `name` can be used as a JavaScript binding in the generated module.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| is_word_char(c) || c == '$')
        }
        _ => false,
    }
}
