#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Must reject or parse, never panic.
        let _ = oas_explorer::load_report_str(text);
    }
});
