use thiserror::Error;

/// Errors from the strict creditor reference generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ReferenceError {
    /// The seed contains no digits and the config forbids a fallback base.
    #[error("reference seed '{seed}' contains no digits")]
    NoDigits { seed: String },

    /// The base number would push the reference past 25 characters.
    #[error("reference base has {digits} digits, at most 21 fit into an ISO 11649 reference")]
    TooLong { digits: usize },

    /// The string is not a checksum-valid RF reference.
    #[error("'{value}' is not a valid RF creditor reference")]
    Invalid { value: String },
}

/// Errors from IBAN validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IbanError {
    #[error("IBAN too short ({0} characters)")]
    TooShort(usize),

    #[error("IBAN too long ({0} characters, max 34)")]
    TooLong(usize),

    #[error("IBAN contains invalid character '{0}'")]
    InvalidCharacter(char),

    /// Country prefix is not a SEPA IBAN country.
    #[error("unknown IBAN country code '{0}'")]
    UnknownCountry(String),

    #[error("IBAN for {country} must have {expected} characters, got {actual}")]
    WrongLength {
        country: String,
        expected: usize,
        actual: usize,
    },

    /// The ISO 13616 mod-97 check failed.
    #[error("IBAN check digits do not match")]
    Checksum,
}

/// A single validation finding with field name and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the offending field (e.g. "beneficiary_name").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
