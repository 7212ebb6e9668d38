use num_bigint::BigUint;
use thiserror::Error;

/// Decimals of the native currency: 1 ETH = 10^18 wei.
pub const ETHER_DECIMALS: u32 = 18;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Invalid hex encoding: {0:?}")]
    InvalidEncoding(String),
}

/// Parses a hex quantity, with or without a `0x`/`0X` prefix, into a big integer.
pub fn parse_hex_quantity(hex: &str) -> Result<BigUint, ConversionError> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);

    // BigUint::parse_bytes tolerates '_' and a leading '+', which are not hex.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ConversionError::InvalidEncoding(hex.to_string()));
    }

    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| ConversionError::InvalidEncoding(hex.to_string()))
}

/// Renders a hex quantity in the smallest unit as an exact decimal string
/// divided by `10^scale`, without trailing fractional zeros.
pub fn to_display_balance(hex: &str, scale: u32) -> Result<String, ConversionError> {
    let value = parse_hex_quantity(hex)?;
    Ok(format_units(&value, scale))
}

/// `to_display_balance` with the native currency scale.
pub fn format_ether(hex: &str) -> Result<String, ConversionError> {
    to_display_balance(hex, ETHER_DECIMALS)
}

fn format_units(value: &BigUint, scale: u32) -> String {
    let divisor = BigUint::from(10u32).pow(scale);
    let integer = value / &divisor;
    let fraction = value % &divisor;

    if scale == 0 {
        return integer.to_string();
    }

    let fraction = format!("{:0>width$}", fraction.to_string(), width = scale as usize);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    }
}
