use std::fmt;

use serde::{Deserialize, Serialize};

use super::display::format_barcode_for_display;
use super::error::BarcodeError;
use super::field::BarcodeField;

/// An encoded virtual barcode: always exactly 54 ASCII digits.
///
/// Obtained from [`encode_virtual_barcode`](super::encode_virtual_barcode)
/// or [`VirtualBarcode::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VirtualBarcode(pub(super) String);

impl VirtualBarcode {
    /// The 54 digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The digits of a single field.
    pub fn field(&self, field: BarcodeField) -> &str {
        let start = field.offset();
        &self.0[start..start + field.width()]
    }

    /// Grouped for human display, see [`format_barcode_for_display`].
    pub fn to_display_string(&self) -> String {
        format_barcode_for_display(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for VirtualBarcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VirtualBarcode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VirtualBarcode {
    type Error = BarcodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VirtualBarcode> for String {
    fn from(barcode: VirtualBarcode) -> Self {
        barcode.0
    }
}
