//! Pluralization for log messages.

/// Format count with noun, adding an `s` unless the count is exactly one.
///
/// - `plural_count(0, "file")` -> `"0 files"`
/// - `plural_count(1, "entry")` -> `"1 entry"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "file"), "0 files");
        assert_eq!(plural_count(1, "file"), "1 file");
        assert_eq!(plural_count(12, "input"), "12 inputs");
    }
}
