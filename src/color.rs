// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Color parsing and hue ordering.
//!
//! Every repository in the portfolio carries a hex color string. That color
//! is used for two things: painting the entry on the page, and deciding where
//! the entry goes in the listing. Listings are ordered by __hue__, i.e., the
//! angular component of the HSV representation of the color, so the page
//! reads like a color wheel.
//!
//! # Hex Color Syntax
//!
//! A hex color is an optional `#` followed by exactly 3 or 6 hexadecimal
//! digits. The 3 digit form is shorthand for the 6 digit form where each
//! digit is doubled, e.g., `#4af` is the same color as `#44aaff`. Nothing
//! else is accepted: no 4 or 8 digit alpha forms, no surrounding whitespace.
//!
//! # Malformed Colors
//!
//! Catalog data is hand written, so a typo in a color string must never take
//! the page down. [`hex_to_color`] is total: anything that fails to parse
//! becomes opaque black. Callers that want to know about bad data can use the
//! strict [`Rgba::from_str`] instead.

use regex::Regex;
use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
    sync::LazyLock,
};
use tracing::debug;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid hex color pattern")
});

/// Color with red, green, blue, and alpha channels in `[0.0, 1.0]`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    /// Opaque black, the fallback for malformed colors.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Construct new color from raw channels.
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Channels as a `(red, green, blue, alpha)` tuple.
    pub fn to_tuple(self) -> (f64, f64, f64, f64) {
        (self.red, self.green, self.blue, self.alpha)
    }

    /// Convert to HSV, ignoring alpha.
    pub fn to_hsv(self) -> Hsv {
        Hsv::from_rgb(self.red, self.green, self.blue)
    }

    /// Hue of color in `[0.0, 1.0)`.
    pub fn hue(self) -> f64 {
        self.to_hsv().hue
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    /// Strictly parse hex color string.
    ///
    /// # Errors
    ///
    /// - Return [`ColorError::Malformed`] if input is not an optional `#`
    ///   followed by exactly 3 or 6 hex digits.
    fn from_str(input: &str) -> Result<Self> {
        let digits = HEX_COLOR
            .captures(input)
            .and_then(|caps| caps.get(1))
            .map(|digits| digits.as_str())
            .ok_or_else(|| ColorError::Malformed {
                input: input.to_owned(),
            })?;

        let seg = digits.len() / 3;
        let channel = |idx: usize| -> Result<f64> {
            let raw = &digits[idx * seg..(idx + 1) * seg];
            let value = u8::from_str_radix(raw, 16).map_err(|_| ColorError::Malformed {
                input: input.to_owned(),
            })?;

            // INVARIANT: Shorthand digit `x` means `xx`, i.e., `x * 17`.
            let value = if seg == 1 { value * 17 } else { value };
            Ok(f64::from(value) / 255.0)
        };

        Ok(Self::new(channel(0)?, channel(1)?, channel(2)?, 1.0))
    }
}

impl Display for Rgba {
    /// Format as 6 digit hex color, dropping alpha.
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        let byte = |channel: f64| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            fmt,
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        )
    }
}

/// Parse hex color string, falling back to opaque black.
///
/// Never fails. Malformed input is logged at debug level and treated as
/// [`Rgba::BLACK`].
pub fn hex_to_color(input: impl AsRef<str>) -> Rgba {
    let input = input.as_ref();
    input.parse().unwrap_or_else(|error| {
        debug!("{error}, using opaque black");
        Rgba::BLACK
    })
}

/// Color in hue, saturation, value form.
///
/// All components are in `[0.0, 1.0]`, with hue wrapping around at `1.0`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    /// Convert RGB channels to HSV.
    ///
    /// Grays (all channels equal) have zero hue and zero saturation.
    pub fn from_rgb(red: f64, green: f64, blue: f64) -> Self {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let value = max;

        if max == min {
            return Self {
                hue: 0.0,
                saturation: 0.0,
                value,
            };
        }

        let delta = max - min;
        let saturation = delta / max;
        let rc = (max - red) / delta;
        let gc = (max - green) / delta;
        let bc = (max - blue) / delta;

        let sector = if red == max {
            bc - gc
        } else if green == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Self {
            hue: (sector / 6.0).rem_euclid(1.0),
            saturation,
            value,
        }
    }
}

/// Sort key that orders colors by hue.
///
/// Ordering is total, so it can be handed straight to [`slice::sort_by`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HueKey(f64);

impl HueKey {
    /// Derive hue key from hex color string.
    pub fn from_hex(color: impl AsRef<str>) -> Self {
        Self(hex_to_color(color).hue())
    }

    /// Raw hue value.
    pub fn hue(&self) -> f64 {
        self.0
    }
}

impl Eq for HueKey {}

impl PartialOrd for HueKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HueKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Color parsing error types.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Input is not a 3 or 6 digit hex color.
    #[error("malformed hex color {input:?}")]
    Malformed { input: String },
}

/// Friendly result alias :3
type Result<T, E = ColorError> = std::result::Result<T, E>;
