#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn scrolling_down_past_threshold_hides() {
    let mut tracker = HeaderTracker::new(0.0, 10.0);
    assert_eq!(tracker.observe(50.0), HeaderVisibility::Hidden);
    assert_eq!(tracker.observe(120.0), HeaderVisibility::Hidden);
}

#[test]
fn scrolling_down_near_top_keeps_header() {
    let mut tracker = HeaderTracker::new(0.0, 10.0);
    assert_eq!(tracker.observe(5.0), HeaderVisibility::Shown);
    assert_eq!(tracker.observe(10.0), HeaderVisibility::Shown);
    assert_eq!(tracker.observe(11.0), HeaderVisibility::Hidden);
}

#[test]
fn scrolling_up_shows() {
    let mut tracker = HeaderTracker::new(400.0, 10.0);
    assert_eq!(tracker.observe(500.0), HeaderVisibility::Hidden);
    assert_eq!(tracker.observe(450.0), HeaderVisibility::Shown);
}

#[test]
fn no_movement_shows() {
    let mut tracker = HeaderTracker::new(300.0, 10.0);
    assert_eq!(tracker.observe(300.0), HeaderVisibility::Shown);
}

#[test]
fn last_offset_updates_every_observation() {
    let mut tracker = HeaderTracker::new(0.0, 10.0);
    tracker.observe(5.0);
    assert_eq!(tracker.last_y(), 5.0);
    tracker.observe(2.0);
    assert_eq!(tracker.last_y(), 2.0);
}

#[test]
fn direction_reversal_sequence() {
    let mut tracker = HeaderTracker::new(0.0, 10.0);
    let states: Vec<bool> = [100.0, 200.0, 150.0, 160.0, 0.0]
        .into_iter()
        .map(|y| tracker.observe(y).is_hidden())
        .collect();
    assert_eq!(states, vec![true, true, false, true, false]);
}
