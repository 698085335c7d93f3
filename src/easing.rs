use glam::Vec3;

/// Pure easing and coordinate helpers used by the leaf field and the reveal
/// controller. All functions are total over their stated domains.

/// Circular ease-out: fast start, asymptotic arrival. Input clamped to [0, 1].
pub fn ease_out_circ(t: f32) -> f32 {
    let u = t.clamp(0.0, 1.0) - 1.0;
    (1.0 - u * u).sqrt()
}

/// Exponential ease-out. Exactly 1.0 at t >= 1 (the 2^-10 tail is snapped).
pub fn ease_out_expo(t: f32) -> f32 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f32.powf(-10.0 * t.max(0.0))
    }
}

/// Quintic ease-out. Input clamped to [0, 1].
pub fn ease_out_quint(t: f32) -> f32 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(5)
}

/// Scalar linear interpolation; `t` is not clamped (callers clamp upstream).
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub fn saturate(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Cylindrical (radius, azimuth, height) to Cartesian, y-up.
pub fn cylindrical_to_cartesian(radius: f32, phi: f32, height: f32) -> Vec3 {
    Vec3::new(radius * phi.cos(), height, radius * phi.sin())
}
