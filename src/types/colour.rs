//! Colour parsing.
//!
//! Wraps `csscolorparser` for CSS notation and `palette` for the HSV
//! conversion used by grayscale detection.

use std::fmt;

use palette::{Hsv, IntoColor, Srgb};

/// A successfully parsed colour: RGB channels plus the HSV view of them.
///
/// Hue is in degrees `[0, 360)`, saturation and value are in `[0, 1]`.
/// Alpha is parsed but not carried, nothing downstream looks at it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedColour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl ParsedColour {
    /// Build from RGB channels, deriving HSV.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let rgb: Srgb<f32> = Srgb::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        );
        let hsv: Hsv = rgb.into_color();

        Self {
            r,
            g,
            b,
            h: hsv.hue.into_positive_degrees(),
            s: hsv.saturation.clamp(0.0, 1.0),
            v: hsv.value.clamp(0.0, 1.0),
        }
    }

    /// RGB channels as a tuple.
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// HSV components as a tuple.
    pub fn hsv(&self) -> (f32, f32, f32) {
        (self.h, self.s, self.v)
    }
}

impl fmt::Display for ParsedColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Parse a raw colour string.
///
/// Accepts hex, named CSS colours, `rgb()`, `rgba()`, `hsl()`, `hsla()` and
/// whatever else the underlying CSS parser recognises. Anything else,
/// including variable references like `var(--brand)`, yields `None`.
pub fn parse_colour(raw: &str) -> Option<ParsedColour> {
    let raw = raw.trim();
    // Older csscolorparser releases panic on multibyte input
    if raw.is_empty() || !raw.is_ascii() {
        return None;
    }

    // csscolorparser also reads hex without `#`; bare words like `face` are not colours
    if raw.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let [r, g, b, _a] = csscolorparser::parse(raw).ok()?.to_rgba8();
    Some(ParsedColour::from_rgb(r, g, b))
}
