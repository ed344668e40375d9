//! ISO 11649 creditor references ("RF references").
//!
//! A reference is `RF` + two check digits + the base number. The check
//! digits are `98 - (base ‖ "271500") mod 97`, where `2715` is `RF` in
//! ISO 7064 letter encoding and `00` holds the place of the check digits.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::checksum::{digits_only, mod97};
use super::config::{EmptySeedPolicy, ReferenceConfig};
use super::error::ReferenceError;

/// Literal prefix of every creditor reference.
pub const RF_PREFIX: &str = "RF";

/// Maximum base digits in a 25-character reference (`RF` + 2 check digits + 21).
pub const MAX_BASE_DIGITS: usize = 21;

/// `RF` as ISO 7064 digits followed by the `00` check-digit placeholder.
const RF_CHECK_SUFFIX: &str = "271500";

/// A checksum-valid ISO 11649 creditor reference in electronic format
/// (upper case, no spaces), e.g. `RF18539007547034`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CreditorReference(String);

impl CreditorReference {
    /// Build the reference for a non-empty digit-only base number.
    fn from_base(base: &str) -> Self {
        Self(format!("{RF_PREFIX}{:02}{base}", check_digits(base)))
    }

    /// The reference in electronic format.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two check digits following `RF`.
    pub fn check_digits(&self) -> &str {
        &self.0[2..4]
    }

    /// The base number after the check digits.
    pub fn base(&self) -> &str {
        &self.0[4..]
    }

    /// Paper format: groups of four characters separated by spaces,
    /// e.g. `RF18 5390 0754 7034`.
    pub fn to_print_format(&self) -> String {
        self.0
            .as_bytes()
            .chunks(4)
            .map(|chunk| String::from_utf8_lossy(chunk))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CreditorReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CreditorReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CreditorReference {
    type Err = ReferenceError;

    /// Parse print or electronic format; the stored form is normalised.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        if is_valid_normalized(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(ReferenceError::Invalid { value: s.into() })
        }
    }
}

impl TryFrom<String> for CreditorReference {
    type Error = ReferenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CreditorReference> for String {
    fn from(reference: CreditorReference) -> Self {
        reference.0
    }
}

/// Generate a creditor reference from any identifier, e.g. an invoice number.
///
/// Only the digits of `seed` form the base number (`"INV-001"` → `RF74001`).
/// A seed without digits falls back to a timestamp-derived base, so this
/// never fails. Use [`generate_reference_with`] to reject such seeds.
pub fn generate_reference(seed: &str) -> CreditorReference {
    let base = match seed_digits(seed) {
        Some(digits) => digits,
        None => timestamp_base(seed),
    };
    CreditorReference::from_base(&base)
}

/// Generate a creditor reference under an explicit [`ReferenceConfig`].
pub fn generate_reference_with(
    seed: &str,
    config: &ReferenceConfig,
) -> Result<CreditorReference, ReferenceError> {
    let base = match (seed_digits(seed), config.empty_seed) {
        (Some(digits), _) => digits,
        (None, EmptySeedPolicy::Timestamp) => timestamp_base(seed),
        (None, EmptySeedPolicy::Reject) => {
            return Err(ReferenceError::NoDigits { seed: seed.into() });
        }
    };

    if config.enforce_max_length && base.len() > MAX_BASE_DIGITS {
        return Err(ReferenceError::TooLong { digits: base.len() });
    }

    Ok(CreditorReference::from_base(&base))
}

/// Check whether `reference` is a checksum-valid RF reference.
///
/// Whitespace is ignored and letters are upper-cased first, so both
/// `"RF74001"` and `"rf74 001"` pass. Anything that is not `RF` followed
/// by at least three digits returns `false`; this never panics.
pub fn validate_reference(reference: &str) -> bool {
    is_valid_normalized(&normalize(reference))
}

fn is_valid_normalized(reference: &str) -> bool {
    let Some(digits) = reference.strip_prefix(RF_PREFIX) else {
        return false;
    };
    if digits.len() < 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let (check, base) = digits.split_at(2);
    format!("{:02}", check_digits(base)) == check
}

fn normalize(reference: &str) -> String {
    reference
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Check digits for a digit-only base number, in `2..=98`.
fn check_digits(base: &str) -> u32 {
    let mut check_input = String::with_capacity(base.len() + RF_CHECK_SUFFIX.len());
    check_input.push_str(base);
    check_input.push_str(RF_CHECK_SUFFIX);
    let check = 98 - mod97(&check_input);
    debug_assert!((1..=98).contains(&check), "check digits out of range: {check}");
    check
}

fn seed_digits(seed: &str) -> Option<String> {
    let digits = digits_only(seed);
    (!digits.is_empty()).then_some(digits)
}

fn timestamp_base(seed: &str) -> String {
    let base = Utc::now().timestamp_millis().unsigned_abs().to_string();
    debug!(seed, base = %base, "reference seed has no digits, using timestamp base");
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_number_seed() {
        let reference = generate_reference("INV-001");
        assert_eq!(reference.as_str(), "RF74001");
        assert_eq!(reference.check_digits(), "74");
        assert_eq!(reference.base(), "001");
    }

    #[test]
    fn iso_example() {
        assert_eq!(generate_reference("539007547034").as_str(), "RF18539007547034");
    }

    #[test]
    fn single_digit_check_is_zero_padded() {
        assert_eq!(generate_reference("0").as_str(), "RF040");
    }

    #[test]
    fn validates_known_references() {
        assert!(validate_reference("RF74001"));
        assert!(validate_reference("RF18539007547034"));
        assert!(validate_reference("RF18 5390 0754 7034"));
        assert!(validate_reference("rf74001"));
    }

    #[test]
    fn rejects_wrong_check_digits() {
        assert!(!validate_reference("RF75001"));
        assert!(!validate_reference("RF19539007547034"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(!validate_reference(""));
        assert!(!validate_reference("RF"));
        assert!(!validate_reference("RF74"));
        assert!(!validate_reference("XX74001"));
        assert!(!validate_reference("RF74A01"));
        assert!(!validate_reference("74001"));
        assert!(!validate_reference("RF7400ä"));
    }

    #[test]
    fn empty_seed_falls_back_to_timestamp() {
        let reference = generate_reference("INV-ABC");
        assert!(validate_reference(reference.as_str()));
        assert!(reference.base().len() >= 13);
    }

    #[test]
    fn strict_config_rejects_empty_seed() {
        let err = generate_reference_with("no digits", &ReferenceConfig::strict()).unwrap_err();
        assert_eq!(
            err,
            ReferenceError::NoDigits {
                seed: "no digits".into()
            }
        );
    }

    #[test]
    fn strict_config_rejects_long_base() {
        let seed = "1".repeat(22);
        let err = generate_reference_with(&seed, &ReferenceConfig::strict()).unwrap_err();
        assert_eq!(err, ReferenceError::TooLong { digits: 22 });

        let ok = generate_reference_with(&"1".repeat(21), &ReferenceConfig::strict()).unwrap();
        assert_eq!(ok.as_str().len(), 25);
    }

    #[test]
    fn lenient_config_matches_default_generator() {
        let reference = generate_reference_with("INV-001", &ReferenceConfig::default()).unwrap();
        assert_eq!(reference, generate_reference("INV-001"));
    }

    #[test]
    fn print_format_groups_by_four() {
        let reference = generate_reference("539007547034");
        assert_eq!(reference.to_print_format(), "RF18 5390 0754 7034");
        assert_eq!(generate_reference("001").to_print_format(), "RF74 001");
    }

    #[test]
    fn parse_normalizes() {
        let reference: CreditorReference = "rf18 5390 0754 7034".parse().unwrap();
        assert_eq!(reference.as_str(), "RF18539007547034");
        assert!("RF75001".parse::<CreditorReference>().is_err());
    }

    #[test]
    fn serde_as_string() {
        let reference = generate_reference("INV-001");
        let json = serde_json::to_string(&reference).unwrap();
        assert_eq!(json, r#""RF74001""#);
        let back: CreditorReference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reference);
        assert!(serde_json::from_str::<CreditorReference>(r#""RF75001""#).is_err());
    }
}
