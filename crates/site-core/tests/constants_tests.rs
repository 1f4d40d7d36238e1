// Sanity checks on the shared tuning constants.

use site_core::{
    CONNECT_DISTANCE, PARTICLE_COUNT, PARTICLE_SPEED_CAP, SECTION_COOLDOWN_MS, SECTION_LABELS,
};

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_SPEED_CAP > 0.0 && PARTICLE_SPEED_CAP <= 1.0);
    assert!(CONNECT_DISTANCE > 0.0);
    assert!(SECTION_COOLDOWN_MS > 0);
}

#[test]
fn section_labels_are_distinct_after_normalization() {
    let mut ids: Vec<String> = SECTION_LABELS.iter().map(|l| l.to_lowercase()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), SECTION_LABELS.len(), "panel ids must be unique");
    for label in SECTION_LABELS {
        assert!(!label.is_empty());
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn connection_radius_is_meaningful_at_the_default_count() {
    // A particle always has headroom to bounce: the radius comfortably
    // exceeds the largest single-frame step.
    assert!(CONNECT_DISTANCE > PARTICLE_SPEED_CAP * 2.0);
}
