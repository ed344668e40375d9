#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let valid = maksu::core::validate_reference(s);
        // Validation and parsing must agree
        assert_eq!(valid, s.parse::<maksu::core::CreditorReference>().is_ok());
    }
});
