const ADDRESS_LEN: usize = 42;

/// Checks that `address` is `0x` followed by exactly 40 hex digits.
///
/// Only the format is checked; mixed-case checksums are not verified.
pub fn is_valid_address(address: &str) -> bool {
    match address.strip_prefix("0x") {
        Some(digits) => {
            address.len() == ADDRESS_LEN && digits.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lowercase_uppercase_and_mixed_case() {
        assert!(is_valid_address("0x742d35cc6634c0532925a3b844bc454e4438f44e"));
        assert!(is_valid_address("0x742D35CC6634C0532925A3B844BC454E4438F44E"));
        assert!(is_valid_address("0x742d35Cc6634C0532925a3b844Bc454e4438f44e"));
    }

    #[test]
    fn rejects_empty_and_wrong_length() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("0x"));
        assert!(!is_valid_address("0x742d35cc6634c0532925a3b844bc454e4438f44"));
        assert!(!is_valid_address("0x742d35cc6634c0532925a3b844bc454e4438f44e0"));
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert!(!is_valid_address("0x742d35cc6634c0532925a3b844bc454e4438f44g"));
        assert!(!is_valid_address("0x742d35cc6634c0532925a3b844bc454e4438f4 e"));
    }

    #[test]
    fn rejects_missing_or_uppercase_prefix() {
        // 42 chars, no prefix
        assert!(!is_valid_address("00742d35cc6634c0532925a3b844bc454e4438f44e"));
        assert!(!is_valid_address("0X742d35cc6634c0532925a3b844bc454e4438f44e"));
    }

    #[test]
    fn rejects_multibyte_input_of_matching_byte_length() {
        // 'é' is two bytes, so the byte length is 42 but a digit is not hex
        assert!(!is_valid_address("0x742d35cc6634c0532925a3b844bc454e4438f4é"));
    }
}
