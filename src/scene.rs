//! Per-frame entry point: owns all animation state and runs the three
//! pipelines (note timeline, leaf field, reveal) sequentially in one tick.

use crate::catalog::{NoteCatalog, ScoreNote};
use crate::commands::{BlendMode, RenderCommand, RenderCommandList, Rgba, RoundedRect};
use crate::constants::*;
use crate::easing::saturate;
use crate::particles::LeafField;
use crate::reveal::RevealController;
use crate::timeline::Timeline;
use crate::transport::Transport;
use anyhow::Context;
use glam::Vec2;

/// Inputs for one tick, read once before the pipelines run; the transport
/// position is never re-fetched mid-tick.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    /// Frame timestamp, drives the stopwatches.
    pub now_ms: f64,
    /// Transport playback position.
    pub playback_ms: f64,
    pub is_playing: bool,
    /// Time since the previous tick, for the alpha-decay correction.
    pub dt_sec: f32,
}

/// One tick's output: the draw list plus the volume the frame loop should
/// feed back to the transport, when the closing fade is in progress.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub commands: RenderCommandList,
    pub volume: Option<f32>,
}

#[derive(Debug)]
pub struct Scene {
    catalog: NoteCatalog,
    timeline: Timeline,
    leaves: LeafField,
    reveal: RevealController,
}

impl Scene {
    /// Build the scene from a loaded per-channel score. Catalog validation
    /// failure is fatal here; there is no degraded mode.
    pub fn new(score: &[Vec<ScoreNote>], seed: u64) -> anyhow::Result<Self> {
        let catalog = NoteCatalog::from_score(score).context("loading note catalog")?;
        let timeline = Timeline::new(&catalog);
        Ok(Self {
            catalog,
            timeline,
            leaves: LeafField::new(seed),
            reveal: RevealController::new(),
        })
    }

    pub fn catalog(&self) -> &NoteCatalog {
        &self.catalog
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn reveal(&self) -> &RevealController {
        &self.reveal
    }

    /// Run one tick and emit this frame's ordered command list.
    pub fn advance(&mut self, frame: FrameInput) -> FrameOutput {
        let mut out = RenderCommandList::with_capacity(self.catalog.len().min(256));

        // Note timeline
        let cursor_ms = frame.playback_ms - AUDIO_LEAD_MS;
        let bar_ms = cursor_ms as i64;
        let visible =
            self.timeline
                .advance(&self.catalog, bar_ms, frame.is_playing, frame.dt_sec);
        self.timeline
            .emit(&self.catalog, &visible, cursor_ms as f32 * TIMELINE_SCALE, &mut out);

        // Right-hand darkening gradient over the oncoming notes
        out.push(RenderCommand::GradientRect {
            rect: RoundedRect::new(
                Vec2::new(GRADIENT_LEFT_PX, 0.0),
                Vec2::new(VIEWPORT_W - GRADIENT_LEFT_PX, VIEWPORT_H),
                0.0,
            ),
            left: Rgba::new(0.0, 0.0, 0.0, 0.0),
            right: Rgba::new(0.0, 0.0, 0.0, 1.0),
        });

        // Reveal timers and the closing volume fade
        let playback_sec = frame.playback_ms / 1000.0;
        self.reveal.update(playback_sec, frame.now_ms);
        let volume = self.reveal.volume(playback_sec);

        if let Some(v) = volume {
            if v < 1.0 {
                out.push(RenderCommand::Rect {
                    rect: RoundedRect::new(Vec2::ZERO, Vec2::new(VIEWPORT_W, VIEWPORT_H), 0.0),
                    color: Rgba::new(0.0, 0.0, 0.0, 1.0).with_alpha(1.0 - v),
                    blend: BlendMode::Normal,
                });
            }
        }

        if playback_sec > CREDIT_FADE_START_SEC {
            let alpha = saturate((playback_sec - CREDIT_FADE_START_SEC) as f32);
            out.push(RenderCommand::Text {
                text: CREDIT_TEXT.to_owned(),
                pos: Vec2::new(20.0, 20.0),
                color: Rgba::new(1.0, 1.0, 1.0, 1.0).with_alpha(alpha),
            });
        }

        // Leaves animate only once the main stopwatch is running
        let leaf_time = self.reveal.main_elapsed_sec(frame.now_ms);
        if leaf_time > 0.0 {
            self.leaves.emit(leaf_time as f32, &mut out);
        }

        self.reveal.emit(frame.now_ms, &mut out);

        FrameOutput {
            commands: out,
            volume,
        }
    }

    /// Convenience wrapper: pull this tick's inputs from the transport,
    /// advance, and apply the volume side effect.
    pub fn run_frame<T: Transport>(
        &mut self,
        transport: &mut T,
        now_ms: f64,
        dt_sec: f32,
    ) -> RenderCommandList {
        let frame = FrameInput {
            now_ms,
            playback_ms: transport.position_sec() * 1000.0,
            is_playing: transport.is_playing(),
            dt_sec,
        };
        let output = self.advance(frame);
        if let Some(v) = output.volume {
            transport.set_volume(v);
        }
        output.commands
    }
}
