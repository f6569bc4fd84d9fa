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

    src/layout/rows.rs

    Packing of a single section's seats into concentric rows.
*/

use crate::{layout::sections::Section, types::Point2d};

/// Minimum distance between two seat centers on a row, as a multiple of the seat radius.
pub const SEAT_SPACING_FACTOR: f64 = 2.5;

/// Parameters for packing a single section.
#[derive(Copy, Clone, Debug)]
pub struct RowPackParams {
    /// Number of seats to place.
    pub seats: u32,
    /// Start angle of the section in radians.
    pub start_rad: f64,
    /// End angle of the section in radians.
    pub end_rad: f64,
    pub seat_radius: f64,
    pub row_height: f64,
    /// Height of the graphic, which is also the distance from the chart center to its top edge.
    pub graphic_height: f64,
    pub section_gap: f64,
}

impl RowPackParams {
    pub fn for_section(section: &Section, seat_radius: f64, row_height: f64, graphic_height: f64, section_gap: f64) -> Self {
        RowPackParams {
            seats: section.seats,
            start_rad: section.start_rad,
            end_rad: section.end_rad,
            seat_radius,
            row_height,
            graphic_height,
            section_gap,
        }
    }

    /// Radius of the outermost row. Seats on it just touch the top edge of the graphic.
    #[inline]
    pub fn outer_radius(&self) -> f64 {
        self.graphic_height - self.seat_radius
    }

    /// Radius of the row at `row`.
    #[inline]
    pub fn row_radius(&self, row: usize) -> f64 {
        self.outer_radius() - self.row_height * row as f64
    }
}

/// A [PlacedPoint] is a seat position together with the angle it was placed at.
/// The angle is only needed to order points across sections.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacedPoint {
    pub point: Point2d<f64>,
    pub angle: f64,
}

/// The usable angular range of one row, after keeping clear of the section edges.
#[derive(Copy, Clone, Debug)]
struct RowSpan {
    radius: f64,
    start: f64,
    end: f64,
}

impl RowSpan {
    /// Return the span of row `row`, or `None` if the row has no room left, either because
    /// its radius reached the center or because the gap margins meet.
    fn new(p: &RowPackParams, row: usize) -> Option<RowSpan> {
        let radius = p.row_radius(row);

        // The gap margin is constant in length, so its angle grows as rows get smaller.
        let gap_rad = ((p.seat_radius + p.section_gap / 2.0) / radius).atan();
        let start = p.start_rad + gap_rad;
        let end = p.end_rad - gap_rad;

        if end <= start || radius <= 0.0 {
            return None;
        }
        Some(RowSpan { radius, start, end })
    }

    #[inline]
    fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Lay out `p.seats` seats of one section on rows of decreasing radius.
///
/// Rows are filled from the outside in. Each row holds as many seats as fit at the minimum
/// spacing, justified to both edges of the row. If the section runs out of rows before every
/// seat is placed, the remaining seats are dropped and fewer points are returned.
///
/// Points are returned in emission order: row by row from the outside in, and within each row
/// by increasing angle.
pub fn pack_section(p: &RowPackParams) -> Vec<PlacedPoint> {
    let target = p.seats as usize;
    // Not sized from `target`: the geometry may hold far fewer seats than were requested.
    let mut points = Vec::new();
    let mut row = 0;

    while points.len() < target {
        let Some(span) = RowSpan::new(p, row)
        else {
            log::debug!(
                "pack_section(): section [{:.4}, {:.4}] full at row {}, {} of {} seats placed",
                p.start_rad,
                p.end_rad,
                row,
                points.len(),
                target
            );
            break;
        };

        // Minimum angle between seat centers on this row.
        let min_step = (SEAT_SPACING_FACTOR * p.seat_radius / span.radius).atan();

        // The row places `row_seats + 1` seats: one at each edge plus the steps between them.
        let remaining = target - points.len();
        let fit = (span.width() / min_step).floor() as usize;
        let row_seats = fit.min(remaining - 1);

        log::trace!(
            "pack_section(): row {} radius {:.3} span [{:.4}, {:.4}] placing {} seats",
            row,
            span.radius,
            span.start,
            span.end,
            row_seats + 1
        );

        if row_seats == 0 {
            // A lone seat goes in the middle of the row.
            let angle = (span.start + span.end) / 2.0;
            points.push(place(p, span.radius, angle));
        }
        else {
            let step = span.width() / row_seats as f64;
            for seat in 0..=row_seats {
                let angle = seat as f64 * step + span.start;
                points.push(place(p, span.radius, angle));
            }
        }

        row += 1;
    }

    points
}

/// Convert a polar seat position to graphic coordinates.
#[inline]
fn place(p: &RowPackParams, radius: f64, angle: f64) -> PlacedPoint {
    let x = angle.cos() * radius + p.graphic_height;
    // Flip the y axis, then shift down so the rows sit centered against the gap.
    let y = p.graphic_height - (angle.sin() * radius + p.seat_radius) + p.seat_radius + p.section_gap / 4.0;

    PlacedPoint {
        point: Point2d::new(x, y),
        angle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn params(seats: u32, start_rad: f64, end_rad: f64) -> RowPackParams {
        RowPackParams {
            seats,
            start_rad,
            end_rad,
            seat_radius: 12.0,
            row_height: 42.0,
            graphic_height: 430.0,
            section_gap: 60.0,
        }
    }

    #[test]
    fn test_single_seat_centered() {
        let p = RowPackParams {
            section_gap: 0.0,
            graphic_height: 1000.0,
            ..params(1, 0.0, PI)
        };
        let points = pack_section(&p);
        assert_eq!(points.len(), 1);
        assert!((points[0].angle - FRAC_PI_2).abs() < 1e-12);
        // Straight up from the center, on the outer row.
        assert!((points[0].point.x - 1000.0).abs() < 1e-9);
        assert!((points[0].point.y - (1000.0 - 988.0)).abs() < 1e-9);
    }

    #[test]
    fn test_places_all_seats() {
        let p = params(84, FRAC_PI_2, PI);
        assert_eq!(pack_section(&p).len(), 84);
    }

    #[test]
    fn test_zero_seats() {
        assert!(pack_section(&params(0, 0.0, PI)).is_empty());
    }

    #[test]
    fn test_rows_fill_outside_in() {
        let p = params(84, 0.0, FRAC_PI_2);
        let points = pack_section(&p);

        let center = Point2d::new(p.graphic_height, p.graphic_height + p.section_gap / 4.0);
        let radii: Vec<f64> = points.iter().map(|pp| pp.point.distance(&center)).collect();

        // Radii never increase in emission order, and every radius is a row radius.
        for pair in radii.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-9);
        }
        for r in &radii {
            let row = (p.outer_radius() - r) / p.row_height;
            assert!((row - row.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_angles_within_section_margin() {
        let p = params(40, 0.0, FRAC_PI_2);
        for pp in pack_section(&p) {
            assert!(pp.angle > p.start_rad);
            assert!(pp.angle < p.end_rad);
        }
    }

    #[test]
    fn test_angles_increase_within_row() {
        let p = params(10, 0.0, FRAC_PI_2);
        let points = pack_section(&p);
        // Ten seats fit on the outer row of a quarter circle of radius 418.
        assert_eq!(points.len(), 10);
        for pair in points.windows(2) {
            assert!(pair[1].angle > pair[0].angle);
        }
    }

    #[test]
    fn test_truncates_when_full() {
        let p = RowPackParams {
            graphic_height: 60.0,
            ..params(500, 0.0, PI)
        };
        let points = pack_section(&p);
        assert!(!points.is_empty());
        assert!(points.len() < 500);
    }

    #[test]
    fn test_huge_section_truncates() {
        let p = params(u32::MAX, 0.0, PI);
        let points = pack_section(&p);
        assert!(!points.is_empty());
        assert!(points.len() < 1000);
    }

    #[test]
    fn test_gap_too_wide() {
        // The gap margin alone is wider than the section, so not even the outer row fits.
        let p = RowPackParams {
            section_gap: 2000.0,
            ..params(5, 0.0, 0.1)
        };
        assert!(pack_section(&p).is_empty());
    }
}
