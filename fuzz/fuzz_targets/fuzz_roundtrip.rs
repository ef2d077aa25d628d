#![no_main]

use libfuzzer_sys::fuzz_target;
use diffcompress::{decode, encode, encoded_len, stretches};

fuzz_target!(|data: &[u8]| {
    let bytes = encode(data).unwrap();

    // Property 1: size estimate is exact
    assert_eq!(encoded_len(data), bytes.len(), "size mismatch");

    // Property 2: worst case is 3 bytes per input byte
    assert!(bytes.len() <= 3 * data.len(), "output too large");

    // Property 3: decode inverts encode unless a minimum was aliased
    if stretches(data).all(|s| s.minimum < 128) {
        assert_eq!(decode(&bytes).unwrap(), data, "roundtrip mismatch");
    }
});
