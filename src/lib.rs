//! # maksu
//!
//! Finnish payment identifiers for invoices:
//! ISO 11649 creditor references ("RF references"), the 54-digit
//! virtual barcode (virtuaaliviivakoodi), and the EPC QR payload for
//! SEPA credit transfers.
//!
//! Every operation is a pure, synchronous text-to-text transformation.
//! There is no shared state, so all functions are safe to call from any
//! number of threads. All monetary values use [`rust_decimal::Decimal`] —
//! never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use maksu::*;
//! use rust_decimal_macros::dec;
//!
//! let reference = generate_reference("INV-001");
//! assert_eq!(reference.as_str(), "RF74001");
//! assert!(validate_reference("RF74001"));
//!
//! let barcode = encode_virtual_barcode(
//!     "FI21 1234 5600 0007 85",
//!     dec!(150.00),
//!     reference.as_str(),
//!     NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
//! )
//! .unwrap();
//! assert_eq!(barcode.as_str().len(), 54);
//!
//! let payload = build_sepa_payload(
//!     "FI2112345600000785",
//!     "NDEAFIHH",
//!     dec!(150),
//!     reference.as_str(),
//!     "Toiminimi Oy",
//! );
//! assert_eq!(payload.split('\n').count(), 11);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Mod-97 checksum, RF references, IBAN check |
//! | `barcode` (default) | Finnish 54-digit virtual barcode |
//! | `sepa` (default) | EPC QR (SEPA credit transfer) payload |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "barcode")]
pub mod barcode;

#[cfg(feature = "sepa")]
pub mod sepa;

#[cfg(all(feature = "barcode", feature = "sepa"))]
pub mod payment;

// Re-export the boundary functions at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "barcode")]
pub use crate::barcode::{
    BarcodeError, VirtualBarcode, encode_virtual_barcode, format_barcode_for_display,
};

#[cfg(feature = "sepa")]
pub use crate::sepa::{SepaPayment, build_sepa_payload};

#[cfg(all(feature = "barcode", feature = "sepa"))]
pub use crate::payment::{PaymentDetails, PaymentDetailsBuilder};
