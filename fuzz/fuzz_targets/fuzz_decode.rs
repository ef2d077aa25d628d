#![no_main]

use libfuzzer_sys::fuzz_target;
use diffcompress::{decode, records};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic the decoder
    let _ = decode(data);
    for record in records(data) {
        if let Ok(record) = record {
            assert!(record.len >= 1);
            assert_eq!(record.values().count(), record.len);
        }
    }
});
