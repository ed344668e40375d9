use rust_decimal::Decimal;
use thiserror::Error;

use super::field::FieldError;

/// Errors from virtual barcode encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BarcodeError {
    /// A value does not fit its fixed-width field.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Barcodes carry unsigned amounts only.
    #[error("amount {0} is negative")]
    NegativeAmount(Decimal),

    /// The assembled barcode is not 54 digits long.
    #[error("virtual barcode must be 54 digits, encoding produced {length}")]
    Length { length: usize },

    /// Input to the decoder is not a well-formed virtual barcode.
    #[error("malformed virtual barcode: {reason}")]
    Malformed { reason: String },

    /// The due date field is not a calendar date.
    #[error("invalid due date field '{0}'")]
    DueDate(String),
}
