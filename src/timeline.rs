//! Note visual state machine and the three-pass timeline renderer.

use crate::catalog::NoteCatalog;
use crate::commands::{BlendMode, RenderCommand, RenderCommandList, Rgba, RoundedRect};
use crate::constants::*;
use glam::Vec2;
use smallvec::SmallVec;

/// Per-note visual state, recomputed every frame while the note is on
/// screen. Invariant: `on_bar` implies `bar_passed`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoteVisualState {
    pub alpha: f32,
    pub bar_passed: bool,
    pub on_bar: bool,
}

impl Default for NoteVisualState {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            bar_passed: false,
            on_bar: false,
        }
    }
}

/// Scratch list of catalog indices visible this frame.
pub type VisibleNotes = SmallVec<[usize; 128]>;

/// Owns one `NoteVisualState` per catalog note and advances them against the
/// playback cursor each tick.
#[derive(Clone, Debug)]
pub struct Timeline {
    states: Vec<NoteVisualState>,
}

impl Timeline {
    pub fn new(catalog: &NoteCatalog) -> Self {
        Self {
            states: vec![NoteVisualState::default(); catalog.len()],
        }
    }

    pub fn states(&self) -> &[NoteVisualState] {
        &self.states
    }

    /// Force every note back to its initial state. Idempotent.
    pub fn reset_all(&mut self) {
        for s in &mut self.states {
            *s = NoteVisualState::default();
        }
    }

    /// Advance note states against the bar cursor (integer milliseconds) and
    /// return the indices inside the visible window.
    ///
    /// Culling is a performance policy only: a skipped note keeps its stale
    /// state until it scrolls back into view. While the transport is stopped
    /// every state is reset instead and no flags are advanced.
    pub fn advance(
        &mut self,
        catalog: &NoteCatalog,
        bar_ms: i64,
        is_playing: bool,
        dt_sec: f32,
    ) -> VisibleNotes {
        debug_assert_eq!(self.states.len(), catalog.len());
        let offset_ms = (BAR_OFFSET_PX / TIMELINE_SCALE) as i64;
        let left = bar_ms - offset_ms;
        let right = left + (VIEWPORT_W / TIMELINE_SCALE) as i64;

        if !is_playing {
            self.reset_all();
        }

        // Decay factors are tuned per reference frame; raise to dt/ref so
        // the wall-clock decay rate survives a variable frame cadence
        let decay_exp = dt_sec / FRAME_REF_SEC;

        let mut visible = VisibleNotes::new();
        for (i, note) in catalog.notes().iter().enumerate() {
            let start = note.start_ms as i64;
            let end = note.end_ms() as i64;
            if right < start || end < left {
                continue;
            }
            if is_playing {
                let s = &mut self.states[i];
                s.on_bar = start <= bar_ms && bar_ms <= end;
                s.bar_passed = start <= bar_ms;
                if s.bar_passed {
                    let factor = if s.on_bar { DECAY_ON_BAR } else { DECAY_AFTER_BAR };
                    s.alpha *= factor.powf(decay_exp);
                }
            }
            visible.push(i);
        }
        visible
    }

    /// Emit the timeline draw passes, back to front:
    /// dim unpassed rects, additive glows, then solid passed rects, and
    /// finally the static bar line.
    pub fn emit(
        &self,
        catalog: &NoteCatalog,
        visible: &VisibleNotes,
        cursor_px: f32,
        out: &mut RenderCommandList,
    ) {
        let block_h = catalog.block_height(VIEWPORT_H);
        let rect_for = |i: usize, corner: f32| {
            let note = &catalog.notes()[i];
            RoundedRect::new(
                Vec2::new(
                    note.start_ms as f32 * TIMELINE_SCALE + BAR_OFFSET_PX - cursor_px,
                    (catalog.max_pitch() - note.pitch) as f32 * block_h,
                ),
                Vec2::new(note.duration_ms as f32 * TIMELINE_SCALE, block_h),
                corner,
            )
        };

        for &i in visible {
            if !self.states[i].bar_passed {
                out.push(RenderCommand::Rect {
                    rect: rect_for(i, NOTE_CORNER_RADIUS),
                    color: Rgba::from_rgb(UNPASSED_NOTE_COLOR),
                    blend: BlendMode::Normal,
                });
            }
        }

        for &i in visible {
            let s = &self.states[i];
            if s.bar_passed {
                let hue = note_hue(catalog.notes()[i].channel);
                out.push(RenderCommand::Glow {
                    rect: rect_for(i, GLOW_CORNER_RADIUS),
                    blur: GLOW_BLUR_BASE + s.alpha * GLOW_BLUR_ALPHA_SPAN,
                    spread: GLOW_SPREAD_BASE + s.alpha * GLOW_SPREAD_ALPHA_SPAN,
                    color: Rgba::from_hsv(hue, GLOW_SATURATION, 1.0)
                        .with_alpha(s.alpha * GLOW_ALPHA_SCALE),
                });
            }
        }

        for &i in visible {
            let s = &self.states[i];
            if s.bar_passed {
                let hue = note_hue(catalog.notes()[i].channel);
                out.push(RenderCommand::Rect {
                    rect: rect_for(i, NOTE_CORNER_RADIUS),
                    color: Rgba::from_hsv(hue, 1.0, 1.0).with_alpha(s.alpha),
                    blend: BlendMode::Normal,
                });
            }
        }

        out.push(RenderCommand::Rect {
            rect: RoundedRect::new(
                Vec2::new(BAR_OFFSET_PX - 1.0, 0.0),
                Vec2::new(BAR_LINE_WIDTH, VIEWPORT_H),
                0.0,
            ),
            color: Rgba::new(1.0, 1.0, 1.0, 1.0).with_alpha(BAR_LINE_ALPHA),
            blend: BlendMode::Normal,
        });
    }
}

pub fn note_hue(channel: u32) -> f32 {
    NOTE_HUE_BASE_DEG + channel as f32 * NOTE_HUE_CHANNEL_STEP_DEG
}
