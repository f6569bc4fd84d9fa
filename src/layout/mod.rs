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

//! # Hemicycle Layout
//! The `layout` module computes seat positions for a parliament chart.
//!
//! Seats are laid out on the upper half of a circle whose center sits on the bottom edge of
//! the graphic. The graphic is twice as wide as it is tall; its height equals the outer radius
//! of the chart. Angle 0 in radians points to the right edge of the graphic and π to the left
//! edge.
//!
//! The half circle is divided into `sections` angular wedges. Each wedge is filled with rows,
//! starting at the outer radius and stepping inward by `row_height`. A margin derived from
//! `section_gap` is kept free on both sides of every wedge, so adjacent sections appear
//! visually separated.
//!
//! All functions in this module are pure. Given the same inputs they always produce the same
//! floating-point output.

pub mod assemble;
pub mod chart;
pub mod leveling;
pub mod rows;
pub mod sections;

use crate::LayoutError;

/// Parameter struct common to all layout functions.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutParams {
    /// Number of angular sections to divide the chart into. Fewer sections are used if there are
    /// fewer seats than sections.
    pub sections: i32,
    /// Visual gap between adjacent sections, in the same units as `seat_radius`.
    pub section_gap: f64,
    /// Radius of a single seat.
    pub seat_radius: f64,
    /// Radial distance between the centers of two consecutive rows.
    pub row_height: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            sections: 2,
            section_gap: 60.0,
            seat_radius: 12.0,
            row_height: 42.0,
        }
    }
}

impl LayoutParams {
    pub fn with_sections(mut self, sections: i32) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_section_gap(mut self, gap: f64) -> Self {
        self.section_gap = gap;
        self
    }

    pub fn with_seat_radius(mut self, radius: f64) -> Self {
        self.seat_radius = radius;
        self
    }

    pub fn with_row_height(mut self, height: f64) -> Self {
        self.row_height = height;
        self
    }

    /// Check that the parameters describe a drawable chart.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.sections <= 0 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "sections must be positive, got {}",
                self.sections
            )));
        }
        if !self.seat_radius.is_finite() || self.seat_radius <= 0.0 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "seat_radius must be positive, got {}",
                self.seat_radius
            )));
        }
        if !self.row_height.is_finite() || self.row_height <= 0.0 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "row_height must be positive, got {}",
                self.row_height
            )));
        }
        if !self.section_gap.is_finite() || self.section_gap < 0.0 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "section_gap must not be negative, got {}",
                self.section_gap
            )));
        }
        Ok(())
    }
}

/// Check a graphic width. A width of 0 is valid and means the width is not yet known.
pub(crate) fn validate_width(graphic_width: f64) -> Result<(), LayoutError> {
    if !graphic_width.is_finite() || graphic_width < 0.0 {
        return Err(LayoutError::InvalidConfiguration(format!(
            "graphic width must not be negative, got {}",
            graphic_width
        )));
    }
    Ok(())
}
