//! Name canonicalization
//!
//! Turns a display name into an order-independent comparison key so that
//! "John Smith", "smith, john" and "SMITH  John" all compare equal.

/// Canonical comparison key for a person's name
///
/// Lowercases, keeps only ASCII letters and whitespace, then sorts the
/// whitespace-delimited tokens and joins them with single spaces. Empty
/// input yields the empty string.
pub fn normalize(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| c.is_ascii_lowercase() || *c == ' ')
        .collect();

    let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Tokens of the normalized name, in sorted order
pub fn tokens(name: &str) -> Vec<String> {
    normalize(name)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
