#![no_main]

use libfuzzer_sys::fuzz_target;
use diffcompress::stretches;

fuzz_target!(|data: &[u8]| {
    let mut covered = 0;
    for s in stretches(data) {
        // Property: stretches tile the input left to right
        assert_eq!(s.start, covered, "gap or overlap before stretch");
        covered += s.len;

        // Property: every value is within 15 of the stretch minimum
        for &b in s.slice(data) {
            assert!(b >= s.minimum && b - s.minimum <= 15, "value {b} outside window at {}", s.minimum);
        }
    }
    assert_eq!(covered, data.len());
});
