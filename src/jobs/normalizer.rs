/// Key used to intern entity names. Names that differ only in case share a key.
pub(crate) fn intern_key(value: &str) -> String {
    value.to_lowercase()
}

/// Case-insensitive substring test. `needle` must already be folded with [`intern_key`].
pub(crate) fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_key_folds_case_only() {
        assert_eq!(intern_key("Saint Louis"), "saint louis");
        assert_eq!(intern_key("SAINT LOUIS"), intern_key("saint louis"));
        assert_ne!(intern_key(" Saint Louis"), intern_key("Saint Louis"));
    }

    #[test]
    fn contains_folded_ignores_case_of_haystack() {
        let needle = intern_key("Enterprise");
        assert!(contains_folded("Enterprise Holdings, Inc", &needle));
        assert!(contains_folded("ENTERPRISE", &needle));
        assert!(!contains_folded("Enterprize", &needle));
        assert!(contains_folded("anything", ""));
    }
}
