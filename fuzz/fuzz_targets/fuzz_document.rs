#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic, and the typed parser must agree with the predicates.
        let valid = lexsum::is_valid_document(s);
        assert_eq!(lexsum::Document::parse(s).is_ok(), valid);
        assert_eq!(lexsum::classify_document(s).is_valid(), valid);
        let _ = lexsum::format_document(s);
    }
});
