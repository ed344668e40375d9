use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Service tag, always `BCD`.
pub const SERVICE_TAG: &str = "BCD";
/// Payload format version.
pub const VERSION: &str = "002";
/// Character set indicator, `1` = UTF-8.
pub const CHARACTER_SET: &str = "1";
/// SEPA Credit Transfer identification code.
pub const IDENTIFICATION: &str = "SCT";
/// Number of lines in every payload.
pub const LINE_COUNT: usize = 11;

/// Input for an EPC QR payload.
///
/// Free-text fields are written verbatim; they must not contain newlines.
/// See [`validate_sepa_payment`](super::validate_sepa_payment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SepaPayment {
    pub iban: String,
    /// May be empty within the EEA.
    pub bic: String,
    /// Amount in euros.
    pub amount: Decimal,
    /// Structured creditor reference including the `RF` prefix.
    pub reference: String,
    pub beneficiary_name: String,
}

impl SepaPayment {
    pub fn new(
        iban: impl Into<String>,
        bic: impl Into<String>,
        amount: Decimal,
        reference: impl Into<String>,
        beneficiary_name: impl Into<String>,
    ) -> Self {
        Self {
            iban: iban.into(),
            bic: bic.into(),
            amount,
            reference: reference.into(),
            beneficiary_name: beneficiary_name.into(),
        }
    }

    /// Render the payload: 11 lines joined by `\n`, no trailing newline.
    ///
    /// Lines: service tag, version, character set, identification, BIC,
    /// beneficiary name, IBAN, `EUR` + amount, purpose (empty), structured
    /// reference, unstructured remittance (empty). Empty fields keep their line.
    pub fn to_payload(&self) -> String {
        let amount = format!("EUR{}", two_decimals(self.amount));
        let lines: [&str; LINE_COUNT] = [
            SERVICE_TAG,
            VERSION,
            CHARACTER_SET,
            IDENTIFICATION,
            self.bic.as_str(),
            self.beneficiary_name.as_str(),
            self.iban.as_str(),
            amount.as_str(),
            "",
            self.reference.as_str(),
            "",
        ];
        let payload = lines.join("\n");
        trace!(lines = LINE_COUNT, bytes = payload.len(), "built SEPA payload");
        payload
    }
}

/// Build an EPC QR payload from loose values. Never fails.
pub fn build_sepa_payload(
    iban: &str,
    bic: &str,
    amount: Decimal,
    reference: &str,
    beneficiary_name: &str,
) -> String {
    SepaPayment::new(iban, bic, amount, reference, beneficiary_name).to_payload()
}

fn two_decimals(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
