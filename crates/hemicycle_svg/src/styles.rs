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

use hemicycle::{prelude::SeatColor, HemiHashMap};

/// Map of party code to the style its seats are drawn with.
pub type PartyStyles = HemiHashMap<String, SeatStyle>;

/// Define style attributes for a seat circle.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SeatStyle {
    /// The color to fill the seat with.
    pub fill: SeatColor,
    /// The color used to outline the seat.
    pub stroke: SeatColor,
    /// The width of the outline. Leveling seats override this with the renderer's leveling
    /// stroke.
    pub stroke_width: f64,
}

impl Default for SeatStyle {
    fn default() -> Self {
        SeatStyle::fill_only(SeatColor::UNASSIGNED)
    }
}

impl SeatStyle {
    /// A style with the given fill and a zero-width black outline.
    pub fn fill_only(fill: SeatColor) -> SeatStyle {
        SeatStyle {
            fill,
            stroke: SeatColor::BLACK,
            stroke_width: 0.0,
        }
    }
}

/// Build a [PartyStyles] map from party codes and fill colors.
pub fn party_fills<'a>(fills: impl IntoIterator<Item = (&'a str, SeatColor)>) -> PartyStyles {
    fills
        .into_iter()
        .map(|(code, fill)| (code.to_string(), SeatStyle::fill_only(fill)))
        .collect()
}

/// Style for the debug guide lines.
pub(crate) fn guide_style() -> SeatStyle {
    SeatStyle {
        fill: SeatColor::TRANSPARENT,
        stroke: SeatColor::from_rgb8(0xFF, 0x00, 0x00),
        stroke_width: 0.5,
    }
}
