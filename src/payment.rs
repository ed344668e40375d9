//! Payment details for a single invoice, composing the barcode and the
//! SEPA QR payload from one set of inputs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::barcode::{BarcodeError, VirtualBarcode, encode_virtual_barcode};
use crate::core::{
    CreditorReference, ReferenceConfig, ReferenceError, ValidationError, generate_reference_with,
    validate_iban,
};
use crate::sepa::{SepaPayment, validate_sepa_payment};

/// Errors from [`PaymentDetailsBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PaymentError {
    #[error("payment reference is missing")]
    MissingReference,

    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

/// Everything needed to print the payment part of an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub iban: String,
    pub bic: String,
    pub beneficiary_name: String,
    pub amount: Decimal,
    pub reference: CreditorReference,
    pub due_date: NaiveDate,
}

impl PaymentDetails {
    /// The 54-digit virtual barcode.
    pub fn virtual_barcode(&self) -> Result<VirtualBarcode, BarcodeError> {
        encode_virtual_barcode(
            &self.iban,
            self.amount,
            self.reference.as_str(),
            self.due_date,
        )
    }

    pub fn sepa_payment(&self) -> SepaPayment {
        SepaPayment::new(
            self.iban.as_str(),
            self.bic.as_str(),
            self.amount,
            self.reference.as_str(),
            self.beneficiary_name.as_str(),
        )
    }

    /// The EPC QR text block.
    pub fn sepa_payload(&self) -> String {
        self.sepa_payment().to_payload()
    }

    /// IBAN checksum plus EPC QR field limits. Empty if everything is fine.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let iban_checked = match validate_iban(&self.iban) {
            Ok(_) => false,
            Err(e) => {
                errors.push(ValidationError::new("iban", e.to_string()));
                true
            }
        };
        // Skip the payload's own IBAN finding if the checksum already failed
        errors.extend(
            validate_sepa_payment(&self.sepa_payment())
                .into_iter()
                .filter(|e| !(iban_checked && e.field == "iban")),
        );
        errors
    }
}

/// Builder for [`PaymentDetails`].
///
/// ```
/// use chrono::NaiveDate;
/// use maksu::PaymentDetailsBuilder;
/// use rust_decimal_macros::dec;
///
/// let details = PaymentDetailsBuilder::new(
///     "FI21 1234 5600 0007 85",
///     "Toiminimi Oy",
///     dec!(150),
///     NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
/// )
/// .bic("NDEAFIHH")
/// .reference_from_seed("INV-001")
/// .build()
/// .unwrap();
///
/// assert_eq!(details.reference.as_str(), "RF74001");
/// assert_eq!(details.virtual_barcode().unwrap().as_str().len(), 54);
/// ```
pub struct PaymentDetailsBuilder {
    iban: String,
    bic: String,
    beneficiary_name: String,
    amount: Decimal,
    due_date: NaiveDate,
    reference: Option<CreditorReference>,
    seed: Option<String>,
    config: ReferenceConfig,
}

impl PaymentDetailsBuilder {
    pub fn new(
        iban: impl Into<String>,
        beneficiary_name: impl Into<String>,
        amount: Decimal,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            iban: iban.into(),
            bic: String::new(),
            beneficiary_name: beneficiary_name.into(),
            amount,
            due_date,
            reference: None,
            seed: None,
            config: ReferenceConfig::default(),
        }
    }

    pub fn bic(mut self, bic: impl Into<String>) -> Self {
        self.bic = bic.into();
        self
    }

    /// Use an existing reference, e.g. one stored with the invoice.
    pub fn reference(mut self, reference: CreditorReference) -> Self {
        self.reference = Some(reference);
        self.seed = None;
        self
    }

    /// Generate the reference from an invoice number at build time.
    pub fn reference_from_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self.reference = None;
        self
    }

    /// Config for [`reference_from_seed`](Self::reference_from_seed).
    pub fn reference_config(mut self, config: ReferenceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<PaymentDetails, PaymentError> {
        let reference = match (self.reference, self.seed) {
            (Some(reference), _) => reference,
            (None, Some(seed)) => generate_reference_with(&seed, &self.config)?,
            (None, None) => return Err(PaymentError::MissingReference),
        };

        Ok(PaymentDetails {
            iban: self.iban,
            bic: self.bic,
            beneficiary_name: self.beneficiary_name,
            amount: self.amount,
            reference,
            due_date: self.due_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn builder() -> PaymentDetailsBuilder {
        PaymentDetailsBuilder::new(
            "FI2112345600000785",
            "Toiminimi Oy",
            dec!(150),
            NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
        )
        .bic("NDEAFIHH")
    }

    #[test]
    fn builds_barcode_and_payload_from_one_reference() {
        let details = builder().reference_from_seed("INV-001").build().unwrap();
        assert_eq!(
            details.virtual_barcode().unwrap().as_str(),
            "421123456000007850001500000000000000000000074001151224"
        );
        assert!(details.sepa_payload().contains("\nRF74001\n"));
        assert!(details.validate().is_empty());
    }

    #[test]
    fn explicit_reference() {
        let reference: CreditorReference = "RF18539007547034".parse().unwrap();
        let details = builder().reference(reference.clone()).build().unwrap();
        assert_eq!(details.reference, reference);
    }

    #[test]
    fn missing_reference() {
        assert_eq!(builder().build().unwrap_err(), PaymentError::MissingReference);
    }

    #[test]
    fn strict_config_propagates() {
        let err = builder()
            .reference_config(ReferenceConfig::strict())
            .reference_from_seed("INV-ABC")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            PaymentError::Reference(ReferenceError::NoDigits { .. })
        ));
    }

    #[test]
    fn invalid_iban_reported_once() {
        let details = PaymentDetailsBuilder::new(
            "FI2112345600000786",
            "Toiminimi Oy",
            dec!(150),
            NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
        )
        .reference_from_seed("INV-001")
        .build()
        .unwrap();
        let errors = details.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "iban");
    }
}
