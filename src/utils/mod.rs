pub mod address;
pub mod units;

pub use address::is_valid_address;
pub use units::{format_ether, to_display_balance, ConversionError};
