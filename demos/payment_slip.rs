use chrono::NaiveDate;
use maksu::*;
use rust_decimal_macros::dec;

fn main() {
    // What a PDF renderer needs for the payment part of one invoice
    let details = match PaymentDetailsBuilder::new(
        "FI21 1234 5600 0007 85",
        "Toiminimi Oy",
        dec!(1234.56),
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
    )
    .bic("NDEAFIHH")
    .reference_from_seed("RE-2025-0042")
    .build()
    {
        Ok(d) => d,
        Err(e) => {
            println!("Build failed: {e}");
            return;
        }
    };

    println!("Reference:  {}", details.reference.to_print_format());

    match details.virtual_barcode() {
        Ok(barcode) => println!("Barcode:    {}", barcode.to_display_string()),
        Err(e) => println!("Barcode:    unavailable ({e})"),
    }

    println!("QR payload:\n{}", details.sepa_payload());

    let errors = details.validate();
    if errors.is_empty() {
        println!("\nAll checks passed.");
    }
    for e in &errors {
        println!("  Validation: {e}");
    }
}
