use maksu::core::*;

fn main() {
    // Reference generation from invoice numbers
    println!("=== RF Creditor References ===\n");

    for seed in ["INV-001", "RE-2024-017", "539007547034", "2024/12/0042"] {
        let reference = generate_reference(seed);
        println!(
            "  {seed:<14} => {reference}  (print: {})",
            reference.to_print_format()
        );
    }

    // Validation
    println!("\n=== Validation ===\n");

    for input in ["RF74001", "RF75001", "rf18 5390 0754 7034", "RF", "74001"] {
        println!("  {input:<22} => {}", validate_reference(input));
    }

    // Strict config: digit-less seeds are an error instead of a timestamp
    println!("\n=== Strict Generation ===\n");

    let config = ReferenceConfig::strict();
    let long_seed = "9".repeat(22);
    for seed in ["INV-001", "DRAFT", long_seed.as_str()] {
        match generate_reference_with(seed, &config) {
            Ok(reference) => println!("  {seed} => {reference}"),
            Err(e) => println!("  {seed} => ERROR: {e}"),
        }
    }

    // IBAN check
    println!("\n=== IBAN ===\n");

    for iban in ["FI21 1234 5600 0007 85", "FI21 1234 5600 0007 86", "XX00123"] {
        match validate_iban(iban) {
            Ok(normalized) => println!("  {iban} => valid ({normalized})"),
            Err(e) => println!("  {iban} => INVALID: {e}"),
        }
    }
}
