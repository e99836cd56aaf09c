//! Fuzz target for the request entry point.
//!
//! Goal: `validate` should **never panic**. Every input yields a response,
//! and malformed input is answered with code 400.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_validation_request
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    let response = safe_labels_app::validate(data);
    if response.accepted {
        assert!(response.message.is_none());
        assert!(response.code.is_none());
    }
});
