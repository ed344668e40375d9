use chrono::NaiveDate;
use maksu::barcode::*;
use rust_decimal_macros::dec;

fn main() {
    let due = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();

    println!("=== Encode ===\n");
    let barcode = match encode_virtual_barcode("FI21 1234 5600 0007 85", dec!(150.00), "RF74001", due)
    {
        Ok(b) => b,
        Err(e) => {
            println!("  encoding failed: {e}");
            return;
        }
    };
    println!("  digits:  {barcode}");
    println!("  display: {}", barcode.to_display_string());

    println!("\n=== Fields ===\n");
    for field in BarcodeField::ALL {
        println!("  {:<10} {}", field.name(), barcode.field(field));
    }

    println!("\n=== Decode ===\n");
    match barcode.fields() {
        Ok(fields) => {
            println!("  account:   {}", fields.account);
            println!("  amount:    {} EUR", fields.amount);
            println!("  reference: {}", fields.reference);
            println!("  due date:  {:?}", fields.due_date);
        }
        Err(e) => println!("  decoding failed: {e}"),
    }

    println!("\n=== Rejected Inputs ===\n");
    let cases = [
        ("German IBAN", "DE89370400440532013000", dec!(10), "RF74001"),
        ("Amount too large", "FI2112345600000785", dec!(1000000), "RF74001"),
        ("Negative amount", "FI2112345600000785", dec!(-5), "RF74001"),
        ("Reference too long", "FI2112345600000785", dec!(10), "RF401234567890123456789"),
    ];
    for (label, iban, amount, reference) in cases {
        match encode_virtual_barcode(iban, amount, reference, due) {
            Ok(b) => println!("  {label}: {b}"),
            Err(e) => println!("  {label}: {e}"),
        }
    }
}
