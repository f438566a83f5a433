//! 3-channel colors and the shared animation palette.

use serde::{Deserialize, Serialize};

/// RGB color with channels in `[0, 1]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

pub const RED: Color = rgb(1.0, 0.0, 0.0);
pub const BLUE: Color = rgb(0.0, 0.0, 1.0);
pub const GREEN: Color = rgb(0.0, 0.5, 0.0);
pub const ORANGE: Color = rgb(1.0, 0.647, 0.0);
pub const PURPLE: Color = rgb(0.5, 0.0, 0.5);
pub const PINK: Color = rgb(1.0, 0.753, 0.796);
pub const WHITE: Color = rgb(1.0, 1.0, 1.0);
pub const BLACK: Color = rgb(0.0, 0.0, 0.0);
pub const TEAL: Color = rgb(0.0, 0.86, 0.99);
pub const LIGHT_GREEN: Color = rgb(0.7, 0.9, 0.7);
pub const GREY_RED: Color = rgb(0.9, 0.6, 0.6);
pub const GREY: Color = rgb(0.9, 0.9, 0.9);

pub const fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color { r, g, b }
}

/// Color from a packed `0xRRGGBB` value.
pub fn hex(rgb24: u32) -> Color {
    rgb(
        ((rgb24 >> 16) & 0xff) as f32 / 255.0,
        ((rgb24 >> 8) & 0xff) as f32 / 255.0,
        (rgb24 & 0xff) as f32 / 255.0,
    )
}

/// HSL (all channels 0..1) to RGB. Hue wraps; saturation/lightness clamp.
pub fn hsl(h: f32, s: f32, l: f32) -> Color {
    let h = ((h % 1.0) + 1.0) % 1.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return rgb(l, l, l);
    }
    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;
    rgb(
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

impl Color {
    /// Component-wise linear interpolation toward `other`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        rgb(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }
}
