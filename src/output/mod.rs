// Output formatting: terminal display of catalogs and recommendations.

pub mod terminal;

/// Shorten `text` to at most `max_chars` characters, ending in "..." when cut.
///
/// Counts characters rather than bytes, so multi-byte titles never split
/// in the middle of a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate_chars("Heat", 10), "Heat");
    }

    #[test]
    fn test_long_text_fits_width() {
        let cut = truncate_chars("The Good, the Bad and the Ugly", 12);
        assert_eq!(cut, "The Good,...");
        assert_eq!(cut.chars().count(), 12);
    }

    #[test]
    fn test_multibyte_titles() {
        assert_eq!(truncate_chars("Amélie à Montmartre", 8), "Améli...");
    }
}
