#![no_main]

use libfuzzer_sys::fuzz_target;
use lexsum::registration::*;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let fields: Vec<&str> = s.splitn(5, '\n').collect();
        let field = |i: usize| fields.get(i).copied().unwrap_or_default();

        // Must not panic — errors are fine, panics are bugs.
        let _ = IndividualBuilder::new(field(0), field(1))
            .email(field(2))
            .mobile(field(3))
            .address(AddressBuilder::new().cep(field(4)).state(field(4)).build())
            .build();
        let _ = lexsum::contact::normalize_name(s);
        let _ = lexsum::contact::format_phone(s);
    }
});
