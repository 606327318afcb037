//! Format - Formatting Utilities

/// Truncate a string to at most `max_chars` characters with an ellipsis.
///
/// Operates on characters, not bytes, so multibyte text never splits.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let cut: String = s.chars().take(keep).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_string_unchanged() {
        assert_eq!(truncate("NMN", 10), "NMN");
    }

    #[test]
    fn test_long_string_gets_ellipsis() {
        assert_eq!(truncate("Nicotinamide", 10), "Nicotin...");
    }

    #[test]
    fn test_exact_length_unchanged() {
        assert_eq!(truncate("Berberine", 9), "Berberine");
    }

    #[test]
    fn test_multibyte_safe() {
        let truncated = truncate("补剂浏览器补剂浏览器", 8);
        assert!(truncated.ends_with("..."));
        assert!(truncated.chars().count() <= 8);
    }
}
