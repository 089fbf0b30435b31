#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = certiblock::verify::fingerprint::digest_bytes(data, 25, 2000);
});
