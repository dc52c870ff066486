//! Integration tests for the warning channel.

use tincture_common::warning::{clear_warnings, has_warned, warn_once, warning_count};

// The dedup set is process-wide, so every assertion lives in one test to
// keep parallel test threads from clearing each other's state.
#[test]
fn test_warn_once_records_and_clears() {
    assert!(!has_warned("Test", "first message"));

    warn_once("Test", "first message");
    warn_once("Test", "first message");
    assert!(has_warned("Test", "first message"));
    assert_eq!(warning_count(), 1);

    // Same text under a different component is a different warning
    assert!(!has_warned("Other", "first message"));

    clear_warnings();
    assert!(!has_warned("Test", "first message"));
    assert_eq!(warning_count(), 0);
}
