//! 8-bit RGB color with saturating arithmetic.

use std::ops::{Add, Mul};

use bytemuck::{Pod, Zeroable};
use lumen_math::Interval;
use serde::{Deserialize, Serialize};

/// Valid range of a single channel.
const CHANNEL_RANGE: Interval = Interval {
    min: 0.0,
    max: 255.0,
};

/// An RGB color with one byte per channel.
///
/// Scaling and addition saturate at 255 and floor at 0, they never wrap.
/// The layout is `#[repr(C)]` so a slice of colors can be viewed as tightly
/// packed RGB8 bytes.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 85, 85);
    pub const GREEN: Color = Color::new(80, 250, 123);
    pub const BLUE: Color = Color::new(139, 233, 253);
    pub const WHITE: Color = Color::new(248, 248, 242);
    pub const PURPLE: Color = Color::new(189, 147, 249);
    pub const PINK: Color = Color::new(255, 121, 198);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Sum of the three channels, handy for brightness comparisons.
    pub fn luma_sum(&self) -> u32 {
        self.r as u32 + self.g as u32 + self.b as u32
    }
}

#[inline]
fn scale_channel(channel: u8, factor: f64) -> u8 {
    // Truncates toward zero after clamping; NaN clamps to 0.
    CHANNEL_RANGE.clamp(channel as f64 * factor) as u8
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, factor: f64) -> Color {
        Color::new(
            scale_channel(self.r, factor),
            scale_channel(self.g, factor),
            scale_channel(self.b, factor),
        )
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, other: Color) -> Color {
        Color::new(
            self.r.saturating_add(other.r),
            self.g.saturating_add(other.g),
            self.b.saturating_add(other.b),
        )
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}
