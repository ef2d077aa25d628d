#![no_main]

use libfuzzer_sys::fuzz_target;
use diffcompress::Encoder;

fuzz_target!(|data: &[u8]| {
    let mut enc = Encoder::new();

    // Property: a reused encoder gives the same bytes as a fresh one
    let first = enc.encode_line(data).unwrap().bytes.to_vec();
    let _ = enc.encode_line(&data[..data.len() / 2]).unwrap();
    let second = enc.encode_line(data).unwrap().bytes.to_vec();

    assert_eq!(first, second, "encode_line not idempotent");
});
