//! Packed 32-bit colors
//!
//! Both the host engine and the GUI library pack colors as RGBA8 with red in
//! the lowest byte, so a packed value moves between them unchanged.

use serde::{Deserialize, Serialize};

/// 8-bit-per-channel RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Create a color from its channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack from the `0xAABBGGRR` layout
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: (packed & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: ((packed >> 16) & 0xFF) as u8,
            a: (packed >> 24) as u8,
        }
    }

    /// Pack into the `0xAABBGGRR` layout
    pub const fn packed(self) -> u32 {
        (self.r as u32) | ((self.g as u32) << 8) | ((self.b as u32) << 16) | ((self.a as u32) << 24)
    }

    /// Build from normalized channels, clamping to `[0, 1]`
    pub fn from_normalized(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::rgba(to_byte(r), to_byte(g), to_byte(b), to_byte(a))
    }

    /// Normalized `[r, g, b, a]`
    pub fn to_normalized(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
