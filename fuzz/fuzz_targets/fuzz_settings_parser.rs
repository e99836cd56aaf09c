//! Fuzz target for settings parsing and compilation.
//!
//! Goal: parsing and compiling settings should **never panic** on any input.
//! Malformed JSON, bad patterns, and overlapping keys must surface as errors.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_settings_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    let _ = safe_labels_settings::load_rules_json(data);
    let _ = safe_labels_app::validate_settings(data);
});
