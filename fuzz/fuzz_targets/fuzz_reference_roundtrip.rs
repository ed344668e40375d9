#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(seed) = std::str::from_utf8(data) {
        if !seed.chars().any(|c| c.is_ascii_digit()) {
            return;
        }
        let reference = maksu::core::generate_reference(seed);
        assert!(maksu::core::validate_reference(reference.as_str()));
    }
});
