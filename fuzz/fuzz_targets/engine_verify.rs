#![no_main]
use libfuzzer_sys::fuzz_target;

use certiblock::{VerificationEngine, VerificationRequest};

fuzz_target!(|data: &[u8]| {
    // Builtin catalog and registry are parsed once per process.
    let engine = VerificationEngine::with_builtin();
    let filename = String::from_utf8_lossy(&data[..data.len().min(64)]).into_owned();
    let request = VerificationRequest::new(data.to_vec(), filename);
    let _ = engine.verify(&request);
});
