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

    crates/hemicycle_svg/src/render_elements.rs

    Conversion of seats and guide shapes into SVG elements.
*/

use hemicycle::prelude::{ArcSegment, Line, PositionedSeat, SeatColor};
use svg::node::{
    element::{path::Data, Circle, Path},
    Value,
};

use crate::styles::SeatStyle;

pub(crate) fn seat_color_to_value(color: SeatColor) -> Value {
    if color.a == 0 {
        // Fully transparent, return 'none' to prevent rendering
        Value::from("none")
    }
    else if color.a < 255 {
        Value::from(format!(
            "rgba({}, {}, {}, {:.3})",
            color.r,
            color.g,
            color.b,
            color.a as f32 / 255.0
        ))
    }
    else {
        Value::from(format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b))
    }
}

/// The resolved drawing parameters for one seat.
#[derive(Copy, Clone, Debug)]
pub(crate) struct SeatPaint {
    pub fill: SeatColor,
    pub stroke: SeatColor,
    pub stroke_width: f64,
}

pub(crate) fn svg_render_seat(seat: &PositionedSeat, radius: f64, paint: &SeatPaint) -> Circle {
    Circle::new()
        .set("cx", seat.point.x)
        .set("cy", seat.point.y)
        .set("r", radius)
        .set("stroke", seat_color_to_value(paint.stroke))
        .set("id", format!("{}_{}", seat.party(), seat.seat.index))
        .set("stroke-width", paint.stroke_width)
        .set("fill", seat_color_to_value(paint.fill))
        .set("party", seat.party())
}

fn svg_render_arc(data: Data, arc: &ArcSegment) -> Data {
    data.cubic_curve_to(((arc.cp1.x, arc.cp1.y), (arc.cp2.x, arc.cp2.y), (arc.end.x, arc.end.y)))
}

/// Render a run of connected arc segments as a single path.
pub(crate) fn svg_render_arcs(arcs: &[ArcSegment], style: &SeatStyle) -> Path {
    let mut data = Data::new();
    if let Some(first) = arcs.first() {
        data = data.move_to((first.start.x, first.start.y));
    }
    // Each segment continues from the previous end point.
    for arc in arcs {
        data = svg_render_arc(data, arc);
    }
    styled_path(data, style)
}

pub(crate) fn svg_render_line(line: &Line<f64>, style: &SeatStyle) -> Path {
    let data = Data::new()
        .move_to((line.start.x, line.start.y))
        .line_to((line.end.x, line.end.y));
    styled_path(data, style)
}

fn styled_path(data: Data, style: &SeatStyle) -> Path {
    Path::new()
        .set("d", data)
        .set("fill", seat_color_to_value(style.fill))
        .set("stroke", seat_color_to_value(style.stroke))
        .set("stroke-width", style.stroke_width)
}
