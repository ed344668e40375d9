#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(barcode) = maksu::barcode::VirtualBarcode::parse(s) {
            assert_eq!(barcode.as_str().len(), 54);
            let _ = barcode.fields();
        }
    }
});
