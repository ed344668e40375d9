use maksu::sepa::*;
use rust_decimal_macros::dec;

fn main() {
    println!("=== EPC QR Payload ===\n");

    let payment = SepaPayment::new(
        "FI2112345600000785",
        "NDEAFIHH",
        dec!(150),
        "RF74001",
        "Toiminimi Oy",
    );
    for (i, line) in payment.to_payload().split('\n').enumerate() {
        println!("  {:>2}: {line:?}", i + 1);
    }

    println!("\n=== Field Checks ===\n");

    let bad = SepaPayment {
        bic: "NDEA".into(),
        beneficiary_name: "Toiminimi\nOy".into(),
        amount: dec!(0),
        ..payment
    };
    for e in validate_sepa_payment(&bad) {
        println!("  {e}");
    }
}
