// Host-side tests for tuning constants and their relationships.

use notefall::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn decay_factors_are_valid_per_frame_multipliers() {
    assert!(DECAY_ON_BAR > 0.0 && DECAY_ON_BAR < 1.0);
    assert!(DECAY_AFTER_BAR > 0.0 && DECAY_AFTER_BAR < 1.0);
    // On-bar notes linger; passed notes fade faster
    assert!(DECAY_ON_BAR > DECAY_AFTER_BAR);
    assert!(FRAME_REF_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_thresholds_are_ordered() {
    assert!(REVEAL_BAR_START_SEC < REVEAL_MAIN_START_SEC);
    assert!(REVEAL_MAIN_START_SEC < VOLUME_FADE_START_SEC);
    assert!(VOLUME_FADE_START_SEC < VOLUME_FADE_END_SEC);
    assert!(
        (VOLUME_FADE_END_SEC - VOLUME_FADE_START_SEC) <= VOLUME_FADE_DURATION_SEC,
        "fade window must reach silence before the formula would clamp late"
    );
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_windows_are_positive() {
    assert!(REVEAL_EXPO_WINDOW_MS > 0.0);
    assert!(REVEAL_QUINT_WINDOW_MS > 0.0);
    assert!(REVEAL_LINEAR_WINDOW_MS > 0.0);
    // The snap effects land before the slow echo fade finishes
    assert!(REVEAL_EXPO_WINDOW_MS < REVEAL_LINEAR_WINDOW_MS);
    assert!(REVEAL_QUINT_WINDOW_MS < REVEAL_LINEAR_WINDOW_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn leaf_ranges_are_coherent() {
    assert!(LEAF_COUNT > 0);
    assert!(LEAF_LIFETIME_MIN_SEC < LEAF_LIFETIME_MAX_SEC);
    assert!(LEAF_TARGET_HEIGHT_MIN < LEAF_TARGET_HEIGHT_MAX);
    assert!(LEAF_TARGET_RADIUS_MIN > 0.0);
    // Every leaf outlives its launch hold; whether it reaches its target
    // before expiring is a deliberate aesthetic tension, not asserted here
    assert!(LEAF_PAUSE_SEC + LEAF_START_DELAY_MAX_SEC < LEAF_LIFETIME_MIN_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timeline_layout_is_consistent() {
    assert!(TIMELINE_SCALE > 0.0);
    assert!(BAR_OFFSET_PX > 0.0 && BAR_OFFSET_PX < VIEWPORT_W);
    assert!(GRADIENT_LEFT_PX < VIEWPORT_W);
    assert!(BAR_LINE_ALPHA > 0.0 && BAR_LINE_ALPHA < 1.0);
    assert!(GLOW_ALPHA_SCALE > 0.0 && GLOW_ALPHA_SCALE <= 1.0);
}
