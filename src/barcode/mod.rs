//! Finnish virtual barcode (virtuaaliviivakoodi).
//!
//! A virtual barcode is exactly 54 ASCII digits in six fixed-width fields:
//!
//! | Field | Width | Content |
//! |-------|-------|---------|
//! | version | 1 | `4` |
//! | account | 16 | IBAN digits (check digits + BBAN) |
//! | amount | 8 | integer cents |
//! | reserved | 3 | `000` |
//! | reference | 20 | reference digits (`RF` dropped) |
//! | due date | 6 | `DDMMYY` |
//!
//! Every field is zero-padded on the left. A value that does not fit its
//! field is rejected with a [`FieldError`] naming the field; nothing is
//! truncated.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use maksu::barcode::*;
//! use rust_decimal_macros::dec;
//!
//! let barcode = encode_virtual_barcode(
//!     "FI2112345600000785",
//!     dec!(150.00),
//!     "RF74001",
//!     NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
//! )
//! .unwrap();
//! assert_eq!(barcode.field(BarcodeField::DueDate), "151224");
//! ```

mod decode;
mod display;
mod encode;
mod error;
mod field;
mod types;

pub use decode::BarcodeFields;
pub use display::format_barcode_for_display;
pub use encode::{BARCODE_LENGTH, RESERVED, VERSION, encode_virtual_barcode};
pub use error::BarcodeError;
pub use field::{BarcodeField, FieldError, encode_fixed_width};
pub use types::VirtualBarcode;
