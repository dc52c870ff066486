//! Packed sRGB color values
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//!
//! A [`PackedColor`] stores four 8-bit channels. Equality and hashing go
//! through a single 32-bit key built from those channels in the fixed order
//! alpha, red, green, blue (most to least significant byte).

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::Serialize;
use tincture_common::HexColorError;

use crate::term::{RuleValueType, Term};

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color with an alpha channel, one byte per channel.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PackedColor {
    /// "the alpha channel" (0-255, 255 = fully opaque)
    #[serde(rename = "a")]
    alpha: u8,
    /// "the red color channel" (0-255)
    #[serde(rename = "r")]
    red: u8,
    /// "the green color channel" (0-255)
    #[serde(rename = "g")]
    green: u8,
    /// "the blue color channel" (0-255)
    #[serde(rename = "b")]
    blue: u8,
}

impl PackedColor {
    /// All channels zero. This is what [`PackedColor::from_hex`] yields for
    /// input it cannot decode.
    pub const TRANSPARENT: Self = Self::with_alpha_byte(0, 0, 0, 0);

    /// Opaque black, the fallback value for a failed [`PackedColor::try_from_hex`].
    pub const OPAQUE_BLACK: Self = Self::new(0, 0, 0);

    /// Opaque color from red, green and blue bytes.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self::with_alpha_byte(255, r, g, b)
    }

    /// Color with every channel given as a byte.
    #[must_use]
    pub const fn with_alpha_byte(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self {
            alpha: a,
            red: r,
            green: g,
            blue: b,
        }
    }

    /// Color with a normalized alpha in `[0, 1]`.
    ///
    /// The alpha byte is `ceil(255 * a)` clamped to `0..=255`. Rounding is
    /// always upwards, so `0.001` already gives an alpha byte of 1.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn with_alpha(a: f64, r: u8, g: u8, b: u8) -> Self {
        // NaN survives clamp and then casts to 0
        let alpha = (255.0 * a).ceil().clamp(0.0, 255.0) as u8;
        Self::with_alpha_byte(alpha, r, g, b)
    }

    /// [§ 4.1 The RGB Functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
    ///
    /// Same as [`PackedColor::with_alpha`], for callers holding `rgba()`
    /// components. Accepts `f32` or `f64` alpha; integer alpha is rejected
    /// at compile time, use [`PackedColor::with_alpha_byte`] for bytes.
    ///
    /// ```compile_fail
    /// let _ = tincture_css::PackedColor::from_rgba(1, 2, 3, 128u8);
    /// ```
    #[must_use]
    pub fn from_rgba(r: u8, g: u8, b: u8, a: impl AlphaFraction) -> Self {
        Self::with_alpha(a.to_f64(), r, g, b)
    }

    /// [§ 4.1 The RGB Functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b)
    }

    /// [§ 7 HSL Colors](https://www.w3.org/TR/css-color-3/#hsl-color)
    ///
    /// Convert normalized hue, saturation and lightness to an opaque color.
    /// Hue may lie slightly outside `[0, 1]`; it is wrapped once per channel,
    /// not reduced modulo 1.
    ///
    /// Channels are rounded to nearest with ties to even.
    #[must_use]
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        const THIRD: f32 = 1.0 / 3.0;

        // "HOW TO RETURN hsl.to.rgb(h, s, l):
        //    IF l<=0.5: PUT l*(s+1) IN m2
        //    ELSE: PUT l+s-l*s IN m2
        //    PUT l*2-m2 IN m1"
        let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;

        Self::new(
            unit_to_byte(hue_to_rgb(m1, m2, h + THIRD)),
            unit_to_byte(hue_to_rgb(m1, m2, h)),
            unit_to_byte(hue_to_rgb(m1, m2, h - THIRD)),
        )
    }

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// Lenient hex decode of `rgb` or `rrggbb` digits (no leading `#`).
    ///
    /// Never fails: any other length silently gives
    /// [`PackedColor::TRANSPARENT`], and characters that are not hex digits
    /// count as 0. Prefer [`PackedColor::try_from_hex`] for untrusted input.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        let digits: Vec<u8> = hex.chars().map(|c| hex_digit(c).unwrap_or(0)).collect();

        expand_digits(&digits).map_or(Self::TRANSPARENT, |(r, g, b)| Self::new(r, g, b))
    }

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// Strict hex decode of `rgb` or `rrggbb` digits (no leading `#`).
    ///
    /// # Errors
    ///
    /// Returns [`HexColorError::InvalidLength`] unless the input has exactly
    /// 3 or 6 characters, and [`HexColorError::InvalidDigit`] for the first
    /// character outside `0-9a-fA-F`. Callers that need a value anyway use
    /// [`PackedColor::OPAQUE_BLACK`].
    pub fn try_from_hex(hex: &str) -> Result<Self, HexColorError> {
        let len = hex.chars().count();
        if len != 3 && len != 6 {
            return Err(HexColorError::InvalidLength { len });
        }

        let digits = hex
            .chars()
            .enumerate()
            .map(|(index, digit)| hex_digit(digit).ok_or(HexColorError::InvalidDigit { digit, index }))
            .collect::<Result<Vec<u8>, _>>()?;

        let (r, g, b) = expand_digits(&digits).ok_or(HexColorError::InvalidLength { len })?;
        Ok(Self::new(r, g, b))
    }

    /// The alpha byte.
    #[must_use]
    pub const fn a(self) -> u8 {
        self.alpha
    }

    /// The red byte.
    #[must_use]
    pub const fn r(self) -> u8 {
        self.red
    }

    /// The green byte.
    #[must_use]
    pub const fn g(self) -> u8 {
        self.green
    }

    /// The blue byte.
    #[must_use]
    pub const fn b(self) -> u8 {
        self.blue
    }

    /// Alpha normalized to `[0, 1]`, derived from the alpha byte.
    #[must_use]
    pub fn alpha(self) -> f64 {
        f64::from(self.alpha) / 255.0
    }

    /// The packed key `0xAARRGGBB`. Equality and hashing use this value only.
    #[must_use]
    pub fn value(self) -> u32 {
        (u32::from(self.alpha) << 24)
            | (u32::from(self.red) << 16)
            | (u32::from(self.green) << 8)
            | u32::from(self.blue)
    }

    /// [§ 15.2 Serializing sRGB values](https://www.w3.org/TR/css-color-4/#serializing-sRGB-values)
    ///
    /// `rgb(r, g, b)` when fully opaque, otherwise `rgba(r, g, b, alpha)`.
    #[must_use]
    pub fn to_css(self) -> String {
        if self.alpha == 255 {
            format!("rgb({}, {}, {})", self.red, self.green, self.blue)
        } else {
            self.to_string()
        }
    }

    /// `#rrggbb` in lowercase. Alpha is dropped.
    #[must_use]
    pub fn to_html(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Always the four-component form, whatever the alpha.
impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.red, self.green, self.blue, self.alpha())
    }
}

impl PartialEq for PackedColor {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for PackedColor {}

impl Hash for PackedColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

/// Parses `rgb`, `rrggbb`, `#rgb` or `#rrggbb` strictly.
impl FromStr for PackedColor {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(s.strip_prefix('#').unwrap_or(s))
    }
}

/// A color term renders as its CSS serialization, not the `Display` form.
impl Term for PackedColor {
    fn kind(&self) -> RuleValueType {
        RuleValueType::PrimitiveValue
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_css())
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point alpha accepted by [`PackedColor::from_rgba`].
///
/// Implemented for `f32` and `f64` only.
pub trait AlphaFraction: sealed::Sealed + Copy {
    /// The alpha widened to `f64`.
    fn to_f64(self) -> f64;
}

impl AlphaFraction for f32 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl AlphaFraction for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// Numeric value of a case-insensitive hex digit.
fn hex_digit(c: char) -> Option<u8> {
    c.to_digit(16).and_then(|d| u8::try_from(d).ok())
}

/// [§ 4.2.1](https://www.w3.org/TR/css-color-4/#hex-notation)
///
/// "The three-digit RGB notation (#RGB) is converted into six-digit form
/// (#RRGGBB) by replicating digits, not by adding zeros."
///
/// Digits must already be in `0..=15`.
const fn expand_digits(digits: &[u8]) -> Option<(u8, u8, u8)> {
    match *digits {
        [r, g, b] => Some((r * 17, g * 17, b * 17)),
        [r1, r2, g1, g2, b1, b2] => Some(((r1 << 4) | r2, (g1 << 4) | g2, (b1 << 4) | b2)),
        _ => None,
    }
}

fn hue_to_rgb(m1: f32, m2: f32, mut h: f32) -> f32 {
    const SIXTH: f32 = 1.0 / 6.0;
    const TWO_THIRDS: f32 = 2.0 / 3.0;

    if h < 0.0 {
        h += 1.0;
    } else if h > 1.0 {
        h -= 1.0;
    }

    if h < SIXTH {
        m1 + (m2 - m1) * h * 6.0
    } else if h < 0.5 {
        m2
    } else if h < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - h) * 6.0
    } else {
        m1
    }
}

fn unit_to_byte(v: f32) -> u8 {
    scaled_to_byte(255.0 * v)
}

/// Round to nearest, ties to even, then clamp into a byte.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled_to_byte(x: f32) -> u8 {
    x.round_ties_even().clamp(0.0, 255.0) as u8
}
