/// Group barcode digits for display: the version digit alone, then groups
/// of five separated by single spaces.
///
/// Existing whitespace is dropped first, so formatting is idempotent and
/// removing the spaces gives back the original digits. Display only; the
/// ungrouped digits are the authoritative value.
///
/// ```
/// use maksu::barcode::format_barcode_for_display;
///
/// assert_eq!(format_barcode_for_display("412345678901"), "4 12345 67890 1");
/// ```
pub fn format_barcode_for_display(barcode: &str) -> String {
    let mut digits = barcode.chars().filter(|c| !c.is_whitespace());
    let mut out = String::with_capacity(barcode.len() + barcode.len() / 5 + 1);

    if let Some(version) = digits.next() {
        out.push(version);
    }
    for (i, c) in digits.enumerate() {
        if i % 5 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
