//! ISO 7064 MOD 97-10 arithmetic over arbitrarily long digit strings.

/// Reduce a decimal digit string modulo 97.
///
/// The remainder is folded in digit by digit (`r = (r * 10 + d) % 97`),
/// so inputs far longer than any native integer are handled without
/// big-integer arithmetic.
///
/// The input must consist of ASCII digits only; callers strip everything
/// else first. Debug builds assert this precondition, release builds skip
/// non-digit bytes.
pub fn mod97(digits: &str) -> u32 {
    debug_assert!(
        digits.bytes().all(|b| b.is_ascii_digit()),
        "mod97 input must be ASCII digits, got {digits:?}"
    );
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0, |r, b| (r * 10 + u32::from(b - b'0')) % 97)
}

/// Keep only the ASCII digits of `input`.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Convert an alphanumeric string to its ISO 7064 digit form
/// (`0-9` unchanged, `A`=10 … `Z`=35, case-insensitive).
///
/// Returns `None` if any character is not an ASCII letter or digit.
pub fn alphanumeric_to_digits(input: &str) -> Option<String> {
    let mut out = String::with_capacity(input.len() * 2);
    for c in input.chars() {
        match c {
            '0'..='9' => out.push(c),
            'A'..='Z' | 'a'..='z' => {
                let value = c.to_ascii_uppercase() as u32 - 'A' as u32 + 10;
                out.push_str(&value.to_string());
            }
            _ => return None,
        }
    }
    Some(out)
}
