//! Virtual barcode encoding.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{trace, warn};

use super::error::BarcodeError;
use super::field::{BarcodeField, encode_fixed_width};
use super::types::VirtualBarcode;
use crate::core::digits_only;

/// Format identifier for reference-based payments.
pub const VERSION: &str = "4";

/// Content of the reserved field.
pub const RESERVED: &str = "000";

/// Total length of every virtual barcode.
pub const BARCODE_LENGTH: usize = 54;

/// Encode a Finnish virtual barcode.
///
/// - `iban`: only its digits are used (`FI21 1234 5600 0007 85` →
///   `2112345600000785`); more than 16 digits is an account field error.
/// - `amount`: euros, rounded to the nearest cent; at most 999 999.99.
/// - `reference`: only its digits are used, so `RF74001` → `74001`;
///   at most 20 digits.
/// - `due_date`: written as `DDMMYY`.
///
/// Fails rather than emitting anything but exactly 54 digits.
pub fn encode_virtual_barcode(
    iban: &str,
    amount: Decimal,
    reference: &str,
    due_date: NaiveDate,
) -> Result<VirtualBarcode, BarcodeError> {
    let account = encode_fixed_width(BarcodeField::Account, &digits_only(iban))?;
    let cents = encode_fixed_width(BarcodeField::Amount, &amount_in_cents(amount)?)?;
    let reference = encode_fixed_width(BarcodeField::Reference, &digits_only(reference))?;
    let due = encode_fixed_width(
        BarcodeField::DueDate,
        &due_date.format("%d%m%y").to_string(),
    )?;

    let barcode = [
        VERSION,
        account.as_str(),
        cents.as_str(),
        RESERVED,
        reference.as_str(),
        due.as_str(),
    ]
    .concat();
    if barcode.len() != BARCODE_LENGTH {
        warn!(length = barcode.len(), "virtual barcode has wrong length");
        return Err(BarcodeError::Length {
            length: barcode.len(),
        });
    }

    trace!(barcode = %barcode, "encoded virtual barcode");
    Ok(VirtualBarcode(barcode))
}

/// Integer cents as a digit string, rounded half away from zero.
fn amount_in_cents(amount: Decimal) -> Result<String, BarcodeError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(BarcodeError::NegativeAmount(amount));
    }
    let mut cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cents.rescale(2);
    Ok(cents.mantissa().unsigned_abs().to_string())
}
