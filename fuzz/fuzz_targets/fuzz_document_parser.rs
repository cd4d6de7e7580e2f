#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = std::str::from_utf8(data) {
        if let Ok(loaded) = walkmap::parse_map_document(json) {
            // Geladene Karten müssen sich wieder schreiben lassen
            let _ = walkmap::write_map_document(loaded.map_id.as_ref(), &loaded.store);
        }
    }
});
