use glam::Vec3;

/// Timeline, leaf-field, and reveal tuning constants.
///
/// These constants express intended behavior (decay factors, trigger
/// thresholds, easing windows) and keep magic numbers out of the code.

// Viewport (square window)
pub const VIEWPORT_W: f32 = 720.0;
pub const VIEWPORT_H: f32 = 720.0;

// Timeline layout
pub const TIMELINE_SCALE: f32 = 0.15; // pixels per millisecond of score time
pub const BAR_OFFSET_PX: f32 = 80.0; // x position of the playback bar line
pub const AUDIO_LEAD_MS: f64 = 100.0; // transport latency compensation
pub const BAR_LINE_WIDTH: f32 = 6.0;
pub const NOTE_CORNER_RADIUS: f32 = 4.0;
pub const GLOW_CORNER_RADIUS: f32 = 5.0;

// Note alpha decay factors, tuned at the reference frame cadence below and
// converted to `factor^(dt/ref)` at use so decay stays wall-clock consistent
pub const DECAY_ON_BAR: f32 = 0.98;
pub const DECAY_AFTER_BAR: f32 = 0.85;
pub const FRAME_REF_SEC: f32 = 1.0 / 60.0;

// Note colors
pub const UNPASSED_NOTE_COLOR: [f32; 3] = [0.2, 0.25, 0.3];
pub const NOTE_HUE_BASE_DEG: f32 = 30.0; // hue = base + channel * step
pub const NOTE_HUE_CHANNEL_STEP_DEG: f32 = 100.0;
pub const GLOW_SATURATION: f32 = 0.5;
pub const GLOW_ALPHA_SCALE: f32 = 0.4;
pub const GLOW_BLUR_BASE: f32 = 12.0;
pub const GLOW_BLUR_ALPHA_SPAN: f32 = 8.0;
pub const GLOW_SPREAD_BASE: f32 = 2.0;
pub const GLOW_SPREAD_ALPHA_SPAN: f32 = 8.0;
pub const BAR_LINE_ALPHA: f32 = 20.0 / 255.0;

// Right-hand darkening gradient overlay
pub const GRADIENT_LEFT_PX: f32 = 200.0;

// Leaf field
pub const LEAF_COUNT: usize = 120;
pub const LEAF_TEXTURE_COUNT: u32 = 6;
pub const LEAF_PAUSE_SEC: f32 = 0.3; // shared hold before leaves launch
pub const LEAF_HEIGHT_GROWTH_PER_SEC: f32 = 0.4;
pub const LEAF_RADIUS_GROWTH_PER_SEC: f32 = 0.05;
pub const LEAF_ANGULAR_VEL_RAD: f32 = 50.0 * DEG; // orbit around the column axis
pub const LEAF_EASE_RATE_PER_SEC: f32 = 0.6; // progress feed into ease_out_circ
pub const LEAF_SPIN_PITCH_RAD: f32 = 44.0 * DEG;
pub const LEAF_SPIN_YAW_RAD: f32 = 121.0 * DEG;
pub const LEAF_SPRITE_SCALE: f32 = 0.4;
pub const LEAF_WORLD_OFFSET: Vec3 = Vec3::new(3.3, -2.2, -1.0);
pub const LEAF_COLOR: [f32; 3] = [0.2, 0.72, 0.46];

// Leaf sampling ranges
pub const LEAF_BASE_POS_EXTENT: f32 = 0.4; // base positions in [-e, e]^3
pub const LEAF_DRIFT_X_EXTENT: f32 = 0.2;
pub const LEAF_DRIFT_Y_MAX: f32 = 0.5;
pub const LEAF_START_DELAY_MAX_SEC: f32 = 0.12; // scaled by normalized base height
pub const LEAF_TARGET_HEIGHT_MIN: f32 = 0.5;
pub const LEAF_TARGET_HEIGHT_MAX: f32 = 7.0;
pub const LEAF_TARGET_RADIUS_MIN: f32 = 0.2;
pub const LEAF_LIFETIME_MIN_SEC: f32 = 4.5;
pub const LEAF_LIFETIME_MAX_SEC: f32 = 5.0;

// Reveal trigger thresholds (seconds of playback position)
pub const REVEAL_BAR_START_SEC: f64 = 8.6;
pub const REVEAL_MAIN_START_SEC: f64 = 22.3;
pub const VOLUME_FADE_START_SEC: f64 = 24.8;
pub const VOLUME_FADE_END_SEC: f64 = 27.8;
pub const VOLUME_FADE_DURATION_SEC: f64 = 3.0;
pub const CREDIT_FADE_START_SEC: f64 = 27.0;
pub const CREDIT_TEXT: &str = "MIDI:\noykenkyu.blogspot.com/2018/02/midi.html";

// Reveal bar and logo geometry
pub const REVEAL_BAR_X_START: f32 = 180.0;
pub const REVEAL_BAR_X_TARGET: f32 = 540.0;
pub const REVEAL_LOGO_X_START: f32 = 180.0;
pub const REVEAL_LOGO_X_TARGET: f32 = 558.0;
pub const REVEAL_LOGO_Y: f32 = 574.0;
pub const REVEAL_LOGO_SCALE: f32 = 0.64;
pub const REVEAL_LOGO_GLOW_SCALE: f32 = 0.63;
pub const LOGO_TEXTURE_ID: u32 = LEAF_TEXTURE_COUNT; // first id past the leaf set

// Reveal easing windows (milliseconds of bg0 elapsed time)
pub const REVEAL_EXPO_WINDOW_MS: f64 = 800.0;
pub const REVEAL_QUINT_WINDOW_MS: f64 = 500.0;
pub const REVEAL_LINEAR_WINDOW_MS: f64 = 6000.0;

// Bar thickness: timer-driven while the main stopwatch is idle, then a hard
// switch to a linear shrink once it runs
pub const THICKNESS_IDLE_BASE: f32 = 5.0;
pub const THICKNESS_IDLE_SPAN: f32 = 17.0;
pub const THICKNESS_SHRINK_PER_SEC: f32 = 6.0;
pub const MAGENTA_OVERLAY_COLOR: [f32; 3] = [0.8, 0.3, 0.6];
pub const MAGENTA_BAR_INSET_PX: f32 = 2.0;

const DEG: f32 = std::f32::consts::PI / 180.0;
