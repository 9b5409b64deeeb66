use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating merchant transaction references
    /// Must be URL-safe: alphanumeric with hyphens and underscores
    /// - Valid: "ORD-2024-000123", "inv_42", "a1b2c3"
    /// - Invalid: "ord 123", "ord#123", "đơn-1", ""
    pub static ref TXN_REF_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_txn_ref_regex_valid() {
        assert!(TXN_REF_REGEX.is_match("ORD-2024-000123"));
        assert!(TXN_REF_REGEX.is_match("inv_42"));
        assert!(TXN_REF_REGEX.is_match("a1b2c3"));
        assert!(TXN_REF_REGEX.is_match("X"));
    }

    #[test]
    fn test_txn_ref_regex_invalid() {
        assert!(!TXN_REF_REGEX.is_match("ord 123")); // space
        assert!(!TXN_REF_REGEX.is_match("ord#123")); // symbol
        assert!(!TXN_REF_REGEX.is_match("đơn-1")); // non-ASCII
        assert!(!TXN_REF_REGEX.is_match("")); // empty
    }
}
