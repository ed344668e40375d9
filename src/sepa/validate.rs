//! EPC QR field limits.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::payload::SepaPayment;
use crate::core::ValidationError;

const MAX_NAME_CHARS: usize = 70;
const MAX_IBAN_CHARS: usize = 34;
const MAX_REFERENCE_CHARS: usize = 35;
const MIN_AMOUNT: Decimal = dec!(0.01);
const MAX_AMOUNT: Decimal = dec!(999999999.99);

/// Check a payment against the EPC QR field limits.
///
/// Returns an empty list if the payload can be rendered as-is. Building
/// the payload does not require this; it is for callers that want to
/// reject bad input before printing a QR code.
pub fn validate_sepa_payment(payment: &SepaPayment) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("iban", &payment.iban),
        ("bic", &payment.bic),
        ("reference", &payment.reference),
        ("beneficiary_name", &payment.beneficiary_name),
    ] {
        if value.contains(['\n', '\r']) {
            errors.push(ValidationError::new(field, "must not contain line breaks"));
        }
    }

    let name_len = payment.beneficiary_name.chars().count();
    if payment.beneficiary_name.trim().is_empty() {
        errors.push(ValidationError::new("beneficiary_name", "is required"));
    } else if name_len > MAX_NAME_CHARS {
        errors.push(ValidationError::new(
            "beneficiary_name",
            format!("has {name_len} characters, max {MAX_NAME_CHARS}"),
        ));
    }

    if payment.iban.trim().is_empty() {
        errors.push(ValidationError::new("iban", "is required"));
    } else if payment.iban.len() > MAX_IBAN_CHARS {
        errors.push(ValidationError::new(
            "iban",
            format!("has {} characters, max {MAX_IBAN_CHARS}", payment.iban.len()),
        ));
    }

    if !payment.bic.is_empty() && !matches!(payment.bic.len(), 8 | 11) {
        errors.push(ValidationError::new("bic", "must be 8 or 11 characters"));
    }

    if payment.amount < MIN_AMOUNT || payment.amount > MAX_AMOUNT {
        errors.push(ValidationError::new(
            "amount",
            format!("{} is outside EUR {MIN_AMOUNT} - {MAX_AMOUNT}", payment.amount),
        ));
    }

    if payment.reference.chars().count() > MAX_REFERENCE_CHARS {
        errors.push(ValidationError::new(
            "reference",
            format!("longer than {MAX_REFERENCE_CHARS} characters"),
        ));
    }

    errors
}
