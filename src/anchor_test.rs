#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn fragment_id_strips_hash() {
    assert_eq!(fragment_id("#about"), Some("about"));
    assert_eq!(fragment_id("#work-2024"), Some("work-2024"));
}

#[test]
fn fragment_id_rejects_bare_hash_and_external_links() {
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id(""), None);
    assert_eq!(fragment_id("https://example.com/#about"), None);
    assert_eq!(fragment_id("/contact"), None);
}

#[test]
fn scroll_target_subtracts_header() {
    // Target 500px below the viewport top while already scrolled 1000px.
    assert_eq!(scroll_target(500.0, 1000.0, 66.0), 1434.0);
}

#[test]
fn scroll_target_handles_targets_above_viewport() {
    assert_eq!(scroll_target(-300.0, 1000.0, 66.0), 634.0);
}

#[test]
fn scroll_target_never_negative() {
    assert_eq!(scroll_target(20.0, 0.0, 66.0), 0.0);
}

#[test]
fn reduced_motion_scrolls_instantly() {
    assert_eq!(ScrollMode::for_reduced_motion(true), ScrollMode::Instant);
    assert_eq!(ScrollMode::for_reduced_motion(false), ScrollMode::Smooth);
}
