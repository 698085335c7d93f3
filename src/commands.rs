//! Render commands produced by one frame of the animation core.
//!
//! The core emits an ordered command list each tick; the embedding frame loop
//! submits it to whatever surface it owns. Commands are plain data so the
//! core stays free of any rasterizer dependency.

use glam::{Quat, Vec2, Vec3};

/// Compositing mode for a command. `Additive` sums color onto the
/// destination and is used for glows and the magenta reveal layers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    Normal,
    Additive,
}

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(rgb: [f32; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], 1.0)
    }

    /// Replace alpha, clamped to [0, 1]. Upstream formulas may legitimately
    /// overshoot; the clamp lives here at the command boundary.
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// HSV to RGB with full alpha. Hue in degrees, wrapped; s and v in [0, 1].
    pub fn from_hsv(hue_deg: f32, s: f32, v: f32) -> Self {
        let h = hue_deg.rem_euclid(360.0) / 60.0;
        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = v - c;
        Self::new(r + m, g + m, b + m, 1.0)
    }
}

/// Axis-aligned rounded rectangle in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedRect {
    pub pos: Vec2,
    pub size: Vec2,
    pub corner_radius: f32,
}

impl RoundedRect {
    pub const fn new(pos: Vec2, size: Vec2, corner_radius: f32) -> Self {
        Self {
            pos,
            size,
            corner_radius,
        }
    }
}

/// One draw call. Variants map one-to-one onto the surface primitives the
/// core assumes from its collaborator.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderCommand {
    /// Solid rounded rectangle.
    Rect {
        rect: RoundedRect,
        color: Rgba,
        blend: BlendMode,
    },
    /// Horizontal two-stop gradient rectangle (left color to right color).
    GradientRect {
        rect: RoundedRect,
        left: Rgba,
        right: Rgba,
    },
    /// Soft drop-shadow glow around a rectangle outline.
    Glow {
        rect: RoundedRect,
        blur: f32,
        spread: f32,
        color: Rgba,
    },
    /// Screen-space textured sprite drawn centered at `center`.
    Sprite2d {
        texture_id: u32,
        center: Vec2,
        scale: f32,
        tint: Rgba,
        blend: BlendMode,
    },
    /// World-space textured sprite with full 3D transform.
    Sprite3d {
        texture_id: u32,
        position: Vec3,
        orientation: Quat,
        scale: f32,
        tint: Rgba,
    },
    /// Small text overlay.
    Text {
        text: String,
        pos: Vec2,
        color: Rgba,
    },
}

pub type RenderCommandList = Vec<RenderCommand>;
