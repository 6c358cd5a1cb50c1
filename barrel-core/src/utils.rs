//! Shared utility functions for code generation.

use std::path::Path;

/// Uppercase the first character of a string, leaving the rest untouched
/// (e.g., "button" -> "Button", "hElLo" -> "HElLo").
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Render a path with `/` separators regardless of the host platform.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
