//! Core payment identifiers: mod-97 checksum, RF creditor references,
//! and IBAN validation.
//!
//! Everything here is a pure function over string inputs. The barcode and
//! SEPA modules build on these primitives.

mod checksum;
mod config;
mod error;
mod iban;
mod reference;

pub use checksum::*;
pub use config::*;
pub use error::*;
pub use iban::{iban_length_for_country, validate_iban};
pub use reference::*;
