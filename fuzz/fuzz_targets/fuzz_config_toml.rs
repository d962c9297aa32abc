#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Unknown keys become warnings, bad values errors; neither may panic
        let _ = treepick::config::parse_with_warnings(content, Path::new("fuzz.toml"));
    }
});
