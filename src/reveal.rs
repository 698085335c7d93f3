//! Two-phase timer-gated reveal: a widening highlight bar, a logo slide-in
//! with a fading magenta echo, and the end-of-piece volume fade.

use crate::commands::{BlendMode, RenderCommand, RenderCommandList, Rgba, RoundedRect};
use crate::constants::*;
use crate::easing::{ease_out_expo, ease_out_quint, lerp, saturate};
use crate::timer::Stopwatch;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default)]
pub struct RevealController {
    bg0: Stopwatch,
    main: Stopwatch,
}

impl RevealController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the two stopwatches as playback crosses their thresholds. Starts
    /// are idempotent, so calling this every frame past a threshold is fine;
    /// neither timer is ever reset while the controller is alive.
    pub fn update(&mut self, playback_sec: f64, now_ms: f64) {
        if playback_sec > REVEAL_BAR_START_SEC {
            self.bg0.start(now_ms);
        }
        if playback_sec > REVEAL_MAIN_START_SEC {
            self.main.start(now_ms);
        }
    }

    /// Target transport volume during the closing fade, `None` outside it.
    pub fn volume(&self, playback_sec: f64) -> Option<f32> {
        (playback_sec > VOLUME_FADE_START_SEC).then(|| {
            saturate(((VOLUME_FADE_END_SEC - playback_sec) / VOLUME_FADE_DURATION_SEC) as f32)
        })
    }

    pub fn is_active(&self) -> bool {
        self.bg0.is_active()
    }

    /// Elapsed seconds of the main stopwatch; zero until phase 2 triggers.
    /// Gates both the leaf field and the bar-thickness mode switch.
    pub fn main_elapsed_sec(&self, now_ms: f64) -> f64 {
        self.main.elapsed_sec(now_ms)
    }

    /// Bar thickness in pixels. While the main stopwatch reads zero the
    /// thickness relaxes on the 6-second bg0 decay; the first frame it reads
    /// nonzero the input source switches to a linear shrink. The switch is a
    /// hard discontinuity, not a blend.
    pub fn bar_thickness(&self, now_ms: f64) -> f32 {
        let time = self.main_elapsed_sec(now_ms) as f32;
        if time > 0.0 {
            (THICKNESS_IDLE_BASE - time * THICKNESS_SHRINK_PER_SEC).max(0.0)
        } else {
            let decay = 1.0 - linear_progress(self.bg0.elapsed_ms(now_ms), REVEAL_LINEAR_WINDOW_MS);
            THICKNESS_IDLE_SPAN * decay + THICKNESS_IDLE_BASE
        }
    }

    /// Emit the bar and logo layers. Nothing draws until phase 1 triggers.
    pub fn emit(&self, now_ms: f64, out: &mut RenderCommandList) {
        if !self.bg0.is_active() {
            return;
        }
        let elapsed = self.bg0.elapsed_ms(now_ms);
        let bar_ease = ease_out_expo(linear_progress(elapsed, REVEAL_EXPO_WINDOW_MS));
        let logo_ease = ease_out_quint(linear_progress(elapsed, REVEAL_QUINT_WINDOW_MS));
        let echo = 1.0 - linear_progress(elapsed, REVEAL_LINEAR_WINDOW_MS);

        let thickness = self.bar_thickness(now_ms);
        let bar_x = lerp(REVEAL_BAR_X_START + thickness, REVEAL_BAR_X_TARGET, bar_ease);
        let leaf = Rgba::from_rgb(LEAF_COLOR);
        let magenta = Rgba::from_rgb(MAGENTA_OVERLAY_COLOR);

        out.push(RenderCommand::Rect {
            rect: RoundedRect::new(
                Vec2::new(bar_x, 0.0),
                Vec2::new(thickness, VIEWPORT_H),
                0.0,
            ),
            color: leaf.with_alpha(thickness / THICKNESS_IDLE_BASE),
            blend: BlendMode::Normal,
        });

        if echo > 0.0 {
            out.push(RenderCommand::Rect {
                rect: RoundedRect::new(
                    Vec2::new(bar_x + MAGENTA_BAR_INSET_PX, 0.0),
                    Vec2::new(
                        (thickness - 2.0 * MAGENTA_BAR_INSET_PX).max(0.0),
                        VIEWPORT_H,
                    ),
                    0.0,
                ),
                color: magenta.with_alpha(echo),
                blend: BlendMode::Additive,
            });
        }

        let logo_x = lerp(REVEAL_LOGO_X_START, REVEAL_LOGO_X_TARGET, logo_ease);
        if self.main_elapsed_sec(now_ms) == 0.0 {
            out.push(RenderCommand::Sprite2d {
                texture_id: LOGO_TEXTURE_ID,
                center: Vec2::new(logo_x, REVEAL_LOGO_Y),
                scale: REVEAL_LOGO_SCALE,
                tint: leaf,
                blend: BlendMode::Normal,
            });
        }
        if echo > 0.0 {
            out.push(RenderCommand::Sprite2d {
                texture_id: LOGO_TEXTURE_ID,
                center: Vec2::new(logo_x, REVEAL_LOGO_Y),
                scale: REVEAL_LOGO_GLOW_SCALE,
                tint: magenta.with_alpha(echo),
                blend: BlendMode::Additive,
            });
        }
    }
}

/// Linear sub-progress over a millisecond window, clamped at 1; never
/// regresses because the underlying stopwatch only moves forward.
fn linear_progress(elapsed_ms: f64, window_ms: f64) -> f32 {
    (elapsed_ms / window_ms).min(1.0) as f32
}
