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

//! Geometry primitives used by the layout engine and its renderers.
//!
//! Points and rectangles are generic across numeric types, using `num_traits`. The layout
//! engine itself works in `f64` so that repeated runs produce bit-identical coordinates.
//!
//! [ArcSegment] builds cubic Bézier approximations of circular arcs, which renderers use to
//! draw row guides. The construction follows:
//! https://spencermortensen.com/articles/bezier-circle/

use num_traits::Num;

/// A [Point2d] represents a point in 2D space. Chart points use the graphic's coordinate
/// system: origin at the top-left, y growing downward.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point2d<T> {
    pub x: T,
    pub y: T,
}

impl<T: Num + Copy + Default> Default for Point2d<T> {
    fn default() -> Self {
        Point2d {
            x: T::default(),
            y: T::default(),
        }
    }
}

impl<T: Num + Copy + Default> From<(T, T)> for Point2d<T> {
    fn from(tuple: (T, T)) -> Self {
        Point2d { x: tuple.0, y: tuple.1 }
    }
}

impl<T: Num + Copy + Default> Point2d<T> {
    pub fn new(x: T, y: T) -> Self {
        Point2d { x, y }
    }
}

impl Point2d<f64> {
    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Point2d<f64>) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point on a circle of `radius` around `center` at `angle` radians, with the y-axis flipped
    /// so that positive angles lie above the center.
    pub fn on_upper_arc(center: &Point2d<f64>, radius: f64, angle: f64) -> Point2d<f64> {
        Point2d {
            x: center.x + radius * angle.cos(),
            y: center.y - radius * angle.sin(),
        }
    }
}

/// A [Line] represents a line segment in 2D space.
#[derive(Copy, Clone, Debug)]
pub struct Line<T: Num + Copy + Default> {
    pub start: Point2d<T>,
    pub end:   Point2d<T>,
}

impl<T: Num + Copy + Default> Line<T> {
    pub fn new(start: Point2d<T>, end: Point2d<T>) -> Line<T> {
        Line { start, end }
    }
}

/// A [Rect] represents a rectangle in 2D space, defined by its top-left and bottom-right
/// corners.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Rect<T: Num + Copy + PartialOrd + Default> {
    pub top_left: Point2d<T>,
    pub bottom_right: Point2d<T>,
}

impl<T: Num + Copy + PartialOrd + Default> Rect<T> {
    #[inline]
    fn min(a: T, b: T) -> T {
        if a < b {
            a
        }
        else {
            b
        }
    }

    #[inline]
    fn max(a: T, b: T) -> T {
        if a > b {
            a
        }
        else {
            b
        }
    }

    pub fn new(top_left: Point2d<T>, bottom_right: Point2d<T>) -> Rect<T> {
        Rect { top_left, bottom_right }
    }

    pub fn from_tuple(top_left: (T, T), bottom_right: (T, T)) -> Rect<T> {
        Rect {
            top_left: Point2d::from(top_left),
            bottom_right: Point2d::from(bottom_right),
        }
    }

    pub fn width(&self) -> T {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> T {
        self.bottom_right.y - self.top_left.y
    }

    /// Returns the bounding box that includes both [Rect]s
    pub fn bounding_box(&self, other: &Rect<T>) -> Rect<T> {
        let top_left = Point2d::new(
            Self::min(self.top_left.x, other.top_left.x),
            Self::min(self.top_left.y, other.top_left.y),
        );

        let bottom_right = Point2d::new(
            Self::max(self.bottom_right.x, other.bottom_right.x),
            Self::max(self.bottom_right.y, other.bottom_right.y),
        );

        Rect::new(top_left, bottom_right)
    }
}

impl Rect<f64> {
    /// Return the smallest [Rect] enclosing circles of `radius` centered on every point, or
    /// `None` if there are no points.
    pub fn enclosing_circles<'a>(points: impl IntoIterator<Item = &'a Point2d<f64>>, radius: f64) -> Option<Rect<f64>> {
        points
            .into_iter()
            .map(|p| Rect::from_tuple((p.x - radius, p.y - radius), (p.x + radius, p.y + radius)))
            .reduce(|acc, r| acc.bounding_box(&r))
    }
}

/// An [ArcSegment] represents a cubic Bézier curve approximating a circular arc.
#[derive(Copy, Clone, Debug)]
pub struct ArcSegment {
    pub start: Point2d<f64>, // Start point of arc
    pub end:   Point2d<f64>, // End point of arc
    pub cp1:   Point2d<f64>, // 1st control point
    pub cp2:   Point2d<f64>, // 2nd control point
}

impl ArcSegment {
    /// Calculate cubic Bézier parameters for an arc of the upper semicircle around `center`,
    /// from `start_angle` to `end_angle` in radians. The y-axis is flipped so that the arc
    /// matches seat coordinates. Arcs should span less than π/2 for a close approximation;
    /// see [ArcSegment::split_upper].
    pub fn from_upper_angles(center: &Point2d<f64>, radius: f64, start_angle: f64, end_angle: f64) -> ArcSegment {
        // Build the arc in standard orientation, then mirror across the horizontal line through
        // the center.
        let x1 = center.x + radius * start_angle.cos();
        let y1 = center.y + radius * start_angle.sin();
        let x4 = center.x + radius * end_angle.cos();
        let y4 = center.y + radius * end_angle.sin();

        let ax = x1 - center.x;
        let ay = y1 - center.y;
        let bx = x4 - center.x;
        let by = y4 - center.y;

        // Circular cubic approximation using (4/3).
        // q1 = |A|^2 = ax² + ay²
        // q2 = q1 + (A · B) = q1 + ax*bx + ay*by
        let q1 = ax * ax + ay * ay;
        let q2 = q1 + ax * bx + ay * by;
        let k2 = (4.0 / 3.0) * ((2.0 * q1 * q2).sqrt() - q2) / (ax * by - ay * bx);

        let (x2, y2) = (center.x + ax - k2 * ay, center.y + ay + k2 * ax);
        let (x3, y3) = (center.x + bx + k2 * by, center.y + by - k2 * bx);

        let flip = |x: f64, y: f64| Point2d::new(x, 2.0 * center.y - y);

        ArcSegment {
            start: flip(x1, y1),
            end:   flip(x4, y4),
            cp1:   flip(x2, y2),
            cp2:   flip(x3, y3),
        }
    }

    /// Split an arc of the upper semicircle into segments no wider than a quarter turn.
    pub fn split_upper(center: &Point2d<f64>, radius: f64, start_angle: f64, end_angle: f64) -> Vec<ArcSegment> {
        let span = end_angle - start_angle;
        if span <= 0.0 || radius <= 0.0 {
            return Vec::new();
        }
        let pieces = (span / std::f64::consts::FRAC_PI_2).ceil().max(1.0) as usize;
        let step = span / pieces as f64;
        (0..pieces)
            .map(|i| {
                let a0 = start_angle + step * i as f64;
                ArcSegment::from_upper_angles(center, radius, a0, a0 + step)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_rect_size() {
        let rect = Rect::from_tuple((0.0f32, 0.0f32), (860.0, 430.0));
        assert_eq!(rect.width(), 860.0);
        assert_eq!(rect.height(), 430.0);
    }

    #[test]
    fn test_enclosing_circles() {
        let points = [Point2d::new(10.0, 10.0), Point2d::new(30.0, 5.0)];
        let rect = Rect::enclosing_circles(points.iter(), 2.0).unwrap();
        assert_eq!(rect, Rect::from_tuple((8.0, 3.0), (32.0, 12.0)));
        assert!(Rect::enclosing_circles(std::iter::empty(), 2.0).is_none());
    }

    #[test]
    fn test_arc_endpoints_on_circle() {
        let center = Point2d::new(100.0, 100.0);
        let arc = ArcSegment::from_upper_angles(&center, 50.0, 0.0, FRAC_PI_2);
        assert!((arc.start.x - 150.0).abs() < 1e-9);
        assert!((arc.start.y - 100.0).abs() < 1e-9);
        assert!((arc.end.x - 100.0).abs() < 1e-9);
        // Upper arc: the end point at π/2 is above the center.
        assert!((arc.end.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_split_upper() {
        let center = Point2d::new(0.0, 0.0);
        let arcs = ArcSegment::split_upper(&center, 10.0, 0.0, PI);
        assert_eq!(arcs.len(), 2);
        assert!(ArcSegment::split_upper(&center, 10.0, 1.0, 1.0).is_empty());
        assert!(ArcSegment::split_upper(&center, 0.0, 0.0, PI).is_empty());
    }

    #[test]
    fn test_on_upper_arc() {
        let center = Point2d::new(430.0, 430.0);
        let p = Point2d::on_upper_arc(&center, 100.0, FRAC_PI_2);
        assert!((p.x - 430.0).abs() < 1e-9);
        assert!((p.y - 330.0).abs() < 1e-9);
        assert!((p.distance(&center) - 100.0).abs() < 1e-9);
    }
}
