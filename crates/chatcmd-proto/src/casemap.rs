//! Command-name case folding.
//!
//! Command names and aliases are stored folded. Raw user input is folded
//! before every comparison, so lookups are case-insensitive on the input.

/// Fold a command name, alias or token for comparison.
///
/// Uses full Unicode lowercasing so that non-ASCII names behave the same
/// on both sides of a comparison.
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Compare two command keys case-insensitively.
pub fn key_eq(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    fold_key(a) == fold_key(b)
}
