//! Property-based tests for checksums, references, barcodes and payloads.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(all(feature = "barcode", feature = "sepa"))]

use chrono::NaiveDate;
use maksu::barcode::*;
use maksu::core::*;
use maksu::sepa::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Reduce via u128 chunks of up to 18 digits, independent of `mod97`.
fn chunked_mod97(digits: &str) -> u32 {
    let mut remainder: u128 = 0;
    for chunk in digits.as_bytes().chunks(18) {
        let chunk = std::str::from_utf8(chunk).unwrap();
        let scale = 10u128.pow(chunk.len() as u32);
        remainder = (remainder * scale + chunk.parse::<u128>().unwrap()) % 97;
    }
    remainder as u32
}

// ── Proptest Strategies ─────────────────────────────────────────────────────

fn arb_digits(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..10, len)
        .prop_map(|v| v.into_iter().map(|d| char::from(b'0' + d)).collect())
}

/// Amount in cents, 0.00 to 999999.99.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..=2099, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Free text without line breaks.
fn arb_text() -> impl Strategy<Value = String> {
    "[^\r\n]{0,40}"
}

// ── Checksum ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn mod97_matches_native(digits in arb_digits(1..=38)) {
        let expected = (digits.parse::<u128>().unwrap() % 97) as u32;
        prop_assert_eq!(mod97(&digits), expected);
    }

    #[test]
    fn mod97_matches_chunked_on_long_inputs(digits in arb_digits(39..=120)) {
        prop_assert_eq!(mod97(&digits), chunked_mod97(&digits));
    }
}

// ── References ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn reference_roundtrip(base in arb_digits(1..=15)) {
        let reference = generate_reference(&base);
        prop_assert!(validate_reference(reference.as_str()));
        prop_assert_eq!(reference.base(), base.as_str());
    }

    #[test]
    fn reference_ignores_non_digits(prefix in "[A-Z]{1,4}-", base in arb_digits(1..=15)) {
        let seed = format!("{prefix}{base}");
        prop_assert_eq!(generate_reference(&seed), generate_reference(&base));
    }

    #[test]
    fn single_digit_tamper_detected(
        base in arb_digits(1..=15),
        pos_seed in any::<prop::sample::Index>(),
        shift in 1u8..10,
    ) {
        let reference = generate_reference(&base).into_string();
        let mut bytes = reference.into_bytes();
        let pos = 2 + pos_seed.index(bytes.len() - 2);
        bytes[pos] = b'0' + (bytes[pos] - b'0' + shift) % 10;
        let tampered = String::from_utf8(bytes).unwrap();
        prop_assert!(!validate_reference(&tampered));
    }

    #[test]
    fn validate_never_panics(input in ".{0,40}") {
        let _ = validate_reference(&input);
    }
}

// ── Barcode ─────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn barcode_is_always_54_digits(
        account in arb_digits(0..=16),
        amount in arb_amount(),
        base in arb_digits(1..=18),
        due in arb_date(),
    ) {
        let iban = format!("FI{account}");
        let reference = generate_reference(&base);
        let barcode = encode_virtual_barcode(&iban, amount, reference.as_str(), due).unwrap();

        prop_assert_eq!(barcode.as_str().len(), 54);
        prop_assert!(barcode.as_str().bytes().all(|b| b.is_ascii_digit()));
        let widths: Vec<usize> = BarcodeField::ALL
            .iter()
            .map(|&f| barcode.field(f).len())
            .collect();
        prop_assert_eq!(widths, vec![1, 16, 8, 3, 20, 6]);

        let fields = barcode.fields().unwrap();
        prop_assert_eq!(fields.amount, amount);
        prop_assert_eq!(fields.due_date, Some(due));
    }

    #[test]
    fn display_strip_restores_barcode(digits in arb_digits(54..=54)) {
        let shown = format_barcode_for_display(&digits);
        prop_assert_eq!(shown.replace(' ', ""), digits);
        prop_assert_eq!(format_barcode_for_display(&shown), shown);
    }

    #[test]
    fn parse_never_panics(input in ".{0,80}") {
        let _ = VirtualBarcode::parse(&input).map(|b| b.fields());
    }
}

// ── SEPA payload ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn payload_always_has_eleven_lines(
        iban in arb_text(),
        bic in arb_text(),
        amount in arb_amount(),
        reference in arb_text(),
        name in arb_text(),
    ) {
        let payload = build_sepa_payload(&iban, &bic, amount, &reference, &name);
        let lines: Vec<&str> = payload.split('\n').collect();
        prop_assert_eq!(lines.len(), LINE_COUNT);
        prop_assert_eq!(lines[3], "SCT");
        prop_assert_eq!(lines[6], iban.as_str());
        prop_assert!(lines[7].starts_with("EUR"));
    }
}
