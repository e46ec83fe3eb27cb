#![no_main]

use libfuzzer_sys::fuzz_target;
use splinter::{extract, BlockMode};

fuzz_target!(|data: &[u8]| {
    if let Ok(doc) = std::str::from_utf8(data) {
        // Extraction is total: it must never panic, in either mode
        let _ = extract(doc, BlockMode::First);
        let _ = extract(doc, BlockMode::All);
    }
});
