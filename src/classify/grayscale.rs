//! Grayscale detection.
//!
//! Two independent checks; a colour is grayscale if either passes.
//!
//! The perceptual check treats a colour as gray when its HSV value sits
//! under the curve `v = 1.3 / (1 + 8.5 s)`. At zero saturation the curve
//! is above the maximum value of 1.0, so every unsaturated colour is gray.
//! At full saturation it drops to about 0.137, catching only the darkest
//! saturated colours. In between it picks up muddy near-grays like
//! `#858c89` while leaving dark but clearly tinted colours alone.

use crate::types::ParsedColour;

/// Numerator of the perceptual gray curve.
const CURVE_SCALE: f32 = 1.3;

/// Saturation weight of the perceptual gray curve.
const CURVE_FALLOFF: f32 = 8.5;

/// True iff all three channels are equal.
pub fn is_exact_gray(r: u8, g: u8, b: u8) -> bool {
    r == g && g == b
}

/// True iff `v` falls under the perceptual gray curve for saturation `s`.
pub fn is_perceptual_gray(s: f32, v: f32) -> bool {
    v < perceptual_threshold(s)
}

/// The value below which a colour of saturation `s` reads as gray.
pub fn perceptual_threshold(s: f32) -> f32 {
    CURVE_SCALE / (1.0 + CURVE_FALLOFF * s)
}

/// Exact or perceptual gray.
pub fn is_grayscale(colour: &ParsedColour) -> bool {
    is_exact_gray(colour.r, colour.g, colour.b) || is_perceptual_gray(colour.s, colour.v)
}
