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

    src/layout/assemble.rs

    Assembly of all section layouts into a single, angle-ordered list of seat points.
*/

use crate::{
    layout::{
        rows::{pack_section, PlacedPoint, RowPackParams},
        sections::allocate,
        validate_width,
        LayoutParams,
    },
    types::Point2d,
    LayoutError,
};

/// The result of [assemble]: the seat points in display order, and the number of seats that
/// were requested.
///
/// If the geometry could not hold every requested seat, fewer points than requested are
/// returned. The missing seats are always the innermost overflow of the sections that ran out
/// of room. Use [Assembly::dropped] to detect this.
#[derive(Clone, Debug, PartialEq)]
pub struct Assembly {
    points: Vec<Point2d<f64>>,
    requested: usize,
}

impl Assembly {
    /// The seat points, by descending angle: from the left edge of the chart (angle π) to the
    /// right edge (angle 0).
    pub fn points(&self) -> &[Point2d<f64>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point2d<f64>> {
        self.points
    }

    /// Number of seats that were placed.
    pub fn placed(&self) -> usize {
        self.points.len()
    }

    /// Number of seats that were requested.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Number of requested seats that could not be placed.
    pub fn dropped(&self) -> usize {
        self.requested - self.points.len()
    }

    pub fn is_complete(&self) -> bool {
        self.dropped() == 0
    }
}

/// Compute the position of `total_seats` seats on a chart `graphic_width` units wide.
///
/// Seats are divided between sections, each section is packed into rows, and all points are
/// sorted by descending angle, so the sequence sweeps across the chart from angle π to angle 0
/// regardless of section and row order.
pub fn assemble(total_seats: i32, params: &LayoutParams, graphic_width: f64) -> Result<Assembly, LayoutError> {
    let placed = assemble_with_angles(total_seats, params, graphic_width)?;
    let points: Vec<Point2d<f64>> = placed.into_iter().map(|pp| pp.point).collect();

    let assembly = Assembly {
        points,
        requested: total_seats as usize,
    };

    if !assembly.is_complete() {
        log::warn!(
            "assemble(): only {} of {} seats fit a graphic {} wide; {} seats dropped",
            assembly.placed(),
            assembly.requested(),
            graphic_width,
            assembly.dropped()
        );
    }

    Ok(assembly)
}

/// Produce the sorted point list, keeping each point's angle.
pub(crate) fn assemble_with_angles(
    total_seats: i32,
    params: &LayoutParams,
    graphic_width: f64,
) -> Result<Vec<PlacedPoint>, LayoutError> {
    params.validate()?;
    validate_width(graphic_width)?;

    let graphic_height = graphic_width / 2.0;
    let sections = allocate(total_seats, params.sections)?;

    let mut placed: Vec<PlacedPoint> = sections
        .iter()
        .flat_map(|section| {
            pack_section(&RowPackParams::for_section(
                section,
                params.seat_radius,
                params.row_height,
                graphic_height,
                params.section_gap,
            ))
        })
        .collect();

    // Stable, so points with equal angles keep their emission order.
    placed.sort_by(|a, b| b.angle.total_cmp(&a.angle));

    log::debug!(
        "assemble(): {} sections, {} of {} seats placed",
        sections.len(),
        placed.len(),
        total_seats
    );

    Ok(placed)
}
