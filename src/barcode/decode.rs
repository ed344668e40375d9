//! Parsing virtual barcodes back into their fields.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::encode::{BARCODE_LENGTH, RESERVED, VERSION};
use super::error::BarcodeError;
use super::field::BarcodeField;
use super::types::VirtualBarcode;

/// The decoded content of a virtual barcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeFields {
    /// 16 account digits (IBAN check digits + BBAN).
    pub account: String,
    /// Amount in euros.
    pub amount: Decimal,
    /// 20 reference digits, zero-padded.
    pub reference: String,
    /// `None` when the due date field is `000000`.
    pub due_date: Option<NaiveDate>,
}

impl VirtualBarcode {
    /// Parse a 54-digit virtual barcode. Whitespace is ignored, so the
    /// display form parses too.
    pub fn parse(input: &str) -> Result<Self, BarcodeError> {
        let digits: String = input.chars().filter(|c| !c.is_whitespace()).collect();

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(BarcodeError::Malformed {
                reason: "contains non-digit characters".into(),
            });
        }
        if digits.len() != BARCODE_LENGTH {
            return Err(BarcodeError::Malformed {
                reason: format!("expected {BARCODE_LENGTH} digits, got {}", digits.len()),
            });
        }

        let barcode = Self(digits);
        let version = barcode.field(BarcodeField::Version);
        if version != VERSION {
            return Err(BarcodeError::Malformed {
                reason: format!("unsupported version '{version}'"),
            });
        }
        if barcode.field(BarcodeField::Reserved) != RESERVED {
            return Err(BarcodeError::Malformed {
                reason: "reserved field must be 000".into(),
            });
        }
        Ok(barcode)
    }

    /// Decode the account, amount, reference and due date fields.
    pub fn fields(&self) -> Result<BarcodeFields, BarcodeError> {
        let amount = self.field(BarcodeField::Amount);
        let cents: i64 = amount.parse().map_err(|_| BarcodeError::Malformed {
            reason: format!("amount field '{amount}' is not numeric"),
        })?;

        Ok(BarcodeFields {
            account: self.field(BarcodeField::Account).to_string(),
            amount: Decimal::new(cents, 2),
            reference: self.field(BarcodeField::Reference).to_string(),
            due_date: parse_due_date(self.field(BarcodeField::DueDate))?,
        })
    }
}

/// `DDMMYY`, two-digit years are 2000-2099.
fn parse_due_date(field: &str) -> Result<Option<NaiveDate>, BarcodeError> {
    if field == "000000" {
        return Ok(None);
    }
    let invalid = || BarcodeError::DueDate(field.to_string());
    let part = |range: std::ops::Range<usize>| -> Result<u32, BarcodeError> {
        field
            .get(range)
            .and_then(|s| s.parse().ok())
            .ok_or_else(invalid)
    };

    let day = part(0..2)?;
    let month = part(2..4)?;
    let year = 2000 + part(4..6)? as i32;
    NaiveDate::from_ymd_opt(year, month, day)
        .map(Some)
        .ok_or_else(invalid)
}
