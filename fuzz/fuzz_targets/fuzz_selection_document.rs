#![no_main]

use libfuzzer_sys::fuzz_target;
use treepick::store::SelectionDocument;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(doc) = serde_json::from_str::<SelectionDocument>(content) {
            // Whatever parses must serialize again
            let json = serde_json::to_string(&doc).unwrap();
            let back: SelectionDocument = serde_json::from_str(&json).unwrap();
            assert_eq!(back.selected, doc.selected);
        }
    }
});
