//! Noun pluralization for counted labels ("3 Colors").

/// Pluralize with the default `"s"` suffix.
///
/// A count of exactly 1 returns the noun unchanged (no count prefix); any
/// other count, including 0, is treated as plural and prefixed with the
/// count.
pub fn pluralize(noun: &str, count: u32) -> String {
    pluralize_with(noun, "s", count)
}

/// Pluralize with a custom plural suffix (e.g. `"es"`).
pub fn pluralize_with(noun: &str, suffix: &str, count: u32) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{count} {noun}{suffix}")
    }
}
