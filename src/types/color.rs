/*
    Hemicycle

    Copyright 2024 The Hemicycle Authors

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------
*/
use bytemuck::{Pod, Zeroable};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A [SeatColor] represents a color in 32-bit RGBA format.
/// The layout engine never assigns colors itself; this type exists so that renderers and
/// chamber descriptions can agree on one representation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct SeatColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for SeatColor {
    fn default() -> SeatColor {
        SeatColor::UNASSIGNED
    }
}

#[rustfmt::skip]
impl SeatColor {
    pub const TRANSPARENT: SeatColor = SeatColor { r: 0, g: 0, b: 0, a: 0 };
    pub const WHITE: SeatColor = SeatColor { r: 255, g: 255, b: 255, a: 255 };
    pub const BLACK: SeatColor = SeatColor { r: 0, g: 0, b: 0, a: 255 };
    /// Neutral gray used for seats of parties without a configured color.
    pub const UNASSIGNED: SeatColor = SeatColor { r: 0xAA, g: 0xAA, b: 0xAA, a: 255 };

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> SeatColor {
        SeatColor { r, g, b, a }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> SeatColor {
        SeatColor { r, g, b, a: 255 }
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

/// Colors are displayed as `#RRGGBB` when opaque, `#RRGGBBAA` otherwise.
impl Display for SeatColor {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        }
        else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Colors are laid out as `r, g, b, a` bytes, so they convert to and from byte arrays directly.
impl From<[u8; 4]> for SeatColor {
    fn from(rgba: [u8; 4]) -> Self {
        bytemuck::cast(rgba)
    }
}

impl From<SeatColor> for [u8; 4] {
    fn from(color: SeatColor) -> Self {
        bytemuck::cast(color)
    }
}

/// Parse a color from a hex string in the format `#RRGGBB` or `#RRGGBBAA`.
impl FromStr for SeatColor {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let hex = input
            .strip_prefix('#')
            .ok_or_else(|| format!("Color '{}' must start with '#'", input))?;

        let component = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| format!("Invalid hex color '{}'", input))
        };

        let mut rgba = [0xFF; 4];
        match hex.len() {
            6 | 8 => {
                for (i, byte) in rgba.iter_mut().take(hex.len() / 2).enumerate() {
                    *byte = component(i * 2..i * 2 + 2)?;
                }
                Ok(SeatColor::from(rgba))
            }
            _ => Err("Hex color must be in the format #RRGGBB or #RRGGBBAA".to_string()),
        }
    }
}
