//! EPC QR payload ("Girocode") for SEPA credit transfers.
//!
//! Builds the newline-delimited text block that banking apps read from a
//! payment QR code. Rendering the QR image is left to the caller.
//!
//! # Example
//!
//! ```
//! use maksu::sepa::*;
//! use rust_decimal_macros::dec;
//!
//! let payment = SepaPayment::new(
//!     "FI2112345600000785",
//!     "NDEAFIHH",
//!     dec!(150),
//!     "RF74001",
//!     "Toiminimi Oy",
//! );
//! assert!(validate_sepa_payment(&payment).is_empty());
//! assert!(payment.to_payload().starts_with("BCD\n002\n1\nSCT\n"));
//! ```

mod payload;
mod validate;

pub use payload::{
    CHARACTER_SET, IDENTIFICATION, LINE_COUNT, SERVICE_TAG, SepaPayment, VERSION,
    build_sepa_payload,
};
pub use validate::validate_sepa_payment;
