//! Barcode field layout and fixed-width encoding.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// One of the six fixed-width fields of a virtual barcode, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarcodeField {
    Version,
    Account,
    Amount,
    Reserved,
    Reference,
    DueDate,
}

impl BarcodeField {
    /// All fields in barcode order.
    pub const ALL: [BarcodeField; 6] = [
        BarcodeField::Version,
        BarcodeField::Account,
        BarcodeField::Amount,
        BarcodeField::Reserved,
        BarcodeField::Reference,
        BarcodeField::DueDate,
    ];

    /// Width of the field in digits.
    pub const fn width(self) -> usize {
        match self {
            BarcodeField::Version => 1,
            BarcodeField::Account => 16,
            BarcodeField::Amount => 8,
            BarcodeField::Reserved => 3,
            BarcodeField::Reference => 20,
            BarcodeField::DueDate => 6,
        }
    }

    /// Position of the first digit of the field.
    pub const fn offset(self) -> usize {
        match self {
            BarcodeField::Version => 0,
            BarcodeField::Account => 1,
            BarcodeField::Amount => 17,
            BarcodeField::Reserved => 25,
            BarcodeField::Reference => 28,
            BarcodeField::DueDate => 48,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BarcodeField::Version => "version",
            BarcodeField::Account => "account",
            BarcodeField::Amount => "amount",
            BarcodeField::Reserved => "reserved",
            BarcodeField::Reference => "reference",
            BarcodeField::DueDate => "due date",
        }
    }
}

impl fmt::Display for BarcodeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value with more digits than its barcode field holds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} field is {width} digits wide, value has {actual}")]
pub struct FieldError {
    pub field: BarcodeField,
    pub width: usize,
    pub actual: usize,
}

/// Left-pad `digits` with zeros to the width of `field`.
///
/// `digits` must already be digit-only. Values longer than the field are
/// rejected, never truncated.
pub fn encode_fixed_width(field: BarcodeField, digits: &str) -> Result<String, FieldError> {
    let width = field.width();
    if digits.len() > width {
        warn!(%field, width, actual = digits.len(), "barcode field overflow");
        return Err(FieldError {
            field,
            width,
            actual: digits.len(),
        });
    }
    Ok(format!("{digits:0>width$}"))
}
