// Host-side tests for the leaf field and its pure trajectory evaluation.

use glam::Vec3;
use notefall::constants::*;
use notefall::particles::{LeafField, LeafParams};

fn fixed_leaf() -> LeafParams {
    LeafParams {
        texture_id: 0,
        base_euler: Vec3::new(1.0, 2.0, 3.0),
        base_pos: Vec3::new(0.1, -0.2, 0.3),
        drift_x: 0.1,
        drift_y: 0.25,
        start_delay: 0.2,
        target_radius: 1.5,
        target_height: 4.0,
        angular_offset: 0.7,
        lifetime: 5.0,
    }
}

#[test]
fn population_has_exactly_leaf_count_entries() {
    let field = LeafField::new(7);
    assert_eq!(field.leaves().len(), LEAF_COUNT);
}

#[test]
fn same_seed_reproduces_identical_population() {
    let a = LeafField::new(42);
    let b = LeafField::new(42);
    assert_eq!(a.leaves(), b.leaves());

    let c = LeafField::new(43);
    assert_ne!(a.leaves(), c.leaves());
}

#[test]
fn sampled_parameters_stay_in_their_distributions() {
    let field = LeafField::new(1234);
    for leaf in field.leaves() {
        assert!(leaf.texture_id < LEAF_TEXTURE_COUNT);
        for c in [leaf.base_pos.x, leaf.base_pos.y, leaf.base_pos.z] {
            assert!(c.abs() <= LEAF_BASE_POS_EXTENT);
        }
        assert!(leaf.drift_x.abs() <= LEAF_DRIFT_X_EXTENT);
        assert!(leaf.drift_y >= 0.0 && leaf.drift_y <= LEAF_DRIFT_Y_MAX);
        assert!(leaf.start_delay >= 0.0 && leaf.start_delay <= LEAF_START_DELAY_MAX_SEC + 1e-6);
        assert!(
            leaf.target_height >= LEAF_TARGET_HEIGHT_MIN
                && leaf.target_height <= LEAF_TARGET_HEIGHT_MAX
        );
        assert!(leaf.target_radius >= LEAF_TARGET_RADIUS_MIN);
        assert!(
            leaf.lifetime >= LEAF_LIFETIME_MIN_SEC && leaf.lifetime <= LEAF_LIFETIME_MAX_SEC
        );
    }
}

#[test]
fn evaluation_is_pure_and_order_independent() {
    let leaf = fixed_leaf();
    let first = leaf.evaluate(5.0);
    let _earlier = leaf.evaluate(2.0);
    let again = leaf.evaluate(5.0);
    assert_eq!(first, again, "re-evaluating the same instant must be bit-identical");
}

#[test]
fn leaf_holds_at_base_until_pause_and_delay_elapse() {
    // start_delay 0.2 + pause 0.3: at T=0.4 the launch clock is still zero
    let leaf = fixed_leaf();
    let pose = leaf.evaluate(0.4);
    assert_eq!(pose.opacity, 1.0);

    // Position is still on the appear ramp, near the base point
    let hold = LEAF_PAUSE_SEC + leaf.start_delay;
    let rise = 0.4 / hold;
    let expected = leaf.base_pos + Vec3::new(leaf.drift_x * rise, leaf.drift_y * rise, 0.0);
    assert!((pose.position - expected).length() < 1e-5);
}

#[test]
fn opacity_follows_remaining_lifetime() {
    let leaf = fixed_leaf();
    let hold = LEAF_PAUSE_SEC + leaf.start_delay;

    // Mid-flight: more than a second of life left, fully opaque
    assert_eq!(leaf.evaluate(hold + 1.0).opacity, 1.0);

    // Final second: opacity equals the remaining life
    let pose = leaf.evaluate(hold + leaf.lifetime - 0.5);
    assert!((pose.opacity - 0.5).abs() < 1e-4);

    // At and past expiry: exactly zero, never negative
    assert!(leaf.evaluate(hold + leaf.lifetime).opacity.abs() < 1e-4);
    assert_eq!(leaf.evaluate(hold + leaf.lifetime + 3.0).opacity, 0.0);
}

#[test]
fn opacity_is_non_increasing_after_launch() {
    let leaf = fixed_leaf();
    let hold = LEAF_PAUSE_SEC + leaf.start_delay;
    let mut prev = f32::INFINITY;
    let mut t = hold;
    while t < hold + leaf.lifetime + 1.0 {
        let o = leaf.evaluate(t).opacity;
        assert!(o <= prev + 1e-6, "opacity rose at T={t}");
        assert!((0.0..=1.0).contains(&o));
        prev = o;
        t += 0.05;
    }
}

#[test]
fn expired_leaves_are_evaluated_but_not_drawn() {
    let field = LeafField::new(9);
    let mut out = Vec::new();
    // Well past every lifetime: every leaf evaluates to zero opacity
    field.emit(100.0, &mut out);
    assert!(out.is_empty());

    out.clear();
    field.emit(1.0, &mut out);
    assert_eq!(out.len(), LEAF_COUNT, "all leaves visible early in flight");
}

#[test]
fn trajectory_converges_toward_the_growing_target() {
    let leaf = fixed_leaf();
    let hold = LEAF_PAUSE_SEC + leaf.start_delay;
    // After the ease saturates (t * rate >= 1) the position sits on the
    // target curve: radius and height keep growing with t
    let a = leaf.evaluate(hold + 2.0).position;
    let b = leaf.evaluate(hold + 3.0).position;
    assert!(b.y > a.y, "leaf should keep climbing once on target");
}
