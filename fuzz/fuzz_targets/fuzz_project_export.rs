//! Fuzz target for the dependency export parser.
//!
//! Goal: parsing should **never panic** on any input.
//! Malformed exports must come back as `ContextError::Malformed`.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_project_export
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Limit input size to keep fuzzing fast
    if data.len() > 64 * 1024 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = pinguard_repo::fuzz::parse_export(text);
    }
});
