//! Case folding for catalog name matching.

/// Fold `text` for case-insensitive comparison.
///
/// Uses the full Unicode lowercase mapping, so `"AMÉLIE"` and `"amélie"`
/// fold to the same string.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Whether `haystack` contains `folded_needle` ignoring case.
///
/// `folded_needle` must already have gone through [`fold_case`].
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    fold_case(haystack).contains(folded_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_ascii_folds() {
        assert!(contains_folded("Amélie.mkv", &fold_case("AMÉLIE")));
        assert!(contains_folded("ÖSTERREICH", &fold_case("österr")));
    }

    #[test]
    fn test_wildcards_are_literal() {
        assert!(contains_folded("100%_done.txt", &fold_case("%_")));
        assert!(!contains_folded("100 done.txt", &fold_case("%_")));
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        assert!(contains_folded("anything", &fold_case("")));
    }
}
