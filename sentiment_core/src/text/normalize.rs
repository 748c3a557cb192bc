//! Deterministic text cleaning for transliterated input.
//!
//! The normalizer deliberately discards everything that is not an ASCII
//! letter: digits, punctuation and non-Latin script all disappear. This
//! matches the lexicon, which only carries lowercased romanized words.

/// Clean raw text into the canonical lowercased form used everywhere else.
///
/// Steps, in order: lowercase, strip every character that is not an ASCII
/// letter or whitespace, collapse whitespace runs to a single space, trim.
/// Pure and idempotent; blank input yields an empty string.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_trims() {
        assert_eq!(normalize("  Mi Khup KHUSH aahe  "), "mi khup khush aahe");
    }

    #[test]
    fn test_strips_digits_and_punctuation() {
        assert_eq!(normalize("mi 100% khush aahe!!"), "mi khush aahe");
        assert_eq!(normalize("a,b.c;d"), "abcd");
    }

    #[test]
    fn test_strips_non_latin_script() {
        assert_eq!(normalize("mi खुश aahe"), "mi aahe");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("mi\t\tkhush\n\naahe"), "mi khush aahe");
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n"), "");
        assert_eq!(normalize("123 !?"), "");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["Mi khup KHUSH aahe!", "", "  a  b  ", "12३ .. x"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_output_charset() {
        let cleaned = normalize("Aaj 3 vajta, Pune-station var bhetu?!");
        assert!(cleaned.chars().all(|c| c.is_ascii_lowercase() || c == ' '));
    }
}
