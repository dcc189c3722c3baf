//! Brazilian federative unit (UF) codes.

/// The 26 states and the Federal District, sorted for binary search.
pub static UF_CODES: &[&str] = &[
    "AC", "AL", "AM", "AP", "BA", "CE", "DF", "ES", "GO", "MA", "MG", "MS", "MT", "PA", "PB", "PE",
    "PI", "PR", "RJ", "RN", "RO", "RR", "RS", "SC", "SE", "SP", "TO",
];

/// Check whether `code` is a known UF (uppercase, e.g. "SP").
pub fn is_known_uf(code: &str) -> bool {
    UF_CODES.binary_search(&code).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ufs() {
        assert!(is_known_uf("SP"));
        assert!(is_known_uf("DF"));
        assert!(is_known_uf("AC"));
        assert!(is_known_uf("TO"));
    }

    #[test]
    fn unknown_ufs() {
        assert!(!is_known_uf("XX"));
        assert!(!is_known_uf(""));
        assert!(!is_known_uf("sp"));
        assert!(!is_known_uf("SAO"));
    }

    #[test]
    fn list_is_sorted() {
        for window in UF_CODES.windows(2) {
            assert!(
                window[0] < window[1],
                "UF codes not sorted: {} >= {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn list_count() {
        assert_eq!(UF_CODES.len(), 27);
    }
}
