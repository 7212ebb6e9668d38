use num_bigint::BigUint;
use proptest::prelude::*;

use eth_balance_service::utils::{format_ether, is_valid_address};

/// Scales a display balance back up by 10^18.
fn to_wei(display: &str) -> BigUint {
    let (integer, fraction) = display.split_once('.').unwrap_or((display, ""));
    assert!(fraction.len() <= 18, "too many fraction digits: {}", display);
    let digits = format!("{}{:0<18}", integer, fraction);
    digits.parse().unwrap()
}

proptest! {
    #[test]
    fn display_balance_round_trips(bytes in proptest::collection::vec(any::<u8>(), 0..40)) {
        let value = BigUint::from_bytes_be(&bytes);
        let hex = format!("0x{:x}", value);

        let display = format_ether(&hex).unwrap();

        prop_assert_eq!(to_wei(&display), value);
        prop_assert!(!display.ends_with('.'));
        if display.contains('.') {
            prop_assert!(!display.ends_with('0'));
        }
    }

    #[test]
    fn prefix_is_optional(value in any::<u128>()) {
        let bare = format!("{:x}", value);
        prop_assert_eq!(format_ether(&bare).unwrap(), format_ether(&format!("0x{}", bare)).unwrap());
    }

    #[test]
    fn any_forty_hex_digits_form_an_address(digits in "[0-9a-fA-F]{40}") {
        let address = format!("0x{}", digits);
        prop_assert!(is_valid_address(&address));
    }

    #[test]
    fn other_lengths_are_rejected(digits in "[0-9a-f]{0,60}") {
        prop_assume!(digits.len() != 40);
        let address = format!("0x{}", digits);
        prop_assert!(!is_valid_address(&address));
    }
}
