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

    crates/hemicycle_svg/src/guides.rs

    Debug guides: the baseline, section boundaries and row arcs a chart was laid out on.
*/

use hemicycle::prelude::{allocate, ArcSegment, LayoutParams, Line, Point2d, RowPackParams};
use svg::node::element::Group;

use crate::{
    render_elements::{svg_render_arcs, svg_render_line},
    styles::guide_style,
    RenderError,
    DEBUG_GROUP_CLASS,
};

/// Build the debug guide group for a chart of `total_seats` seats on a graphic `graphic_width`
/// wide.
pub(crate) fn render_guides(total_seats: usize, params: &LayoutParams, graphic_width: f64) -> Result<Group, RenderError> {
    let style = guide_style();
    let graphic_height = graphic_width / 2.0;
    // Seat coordinates are shifted down by a quarter of the section gap.
    let center = Point2d::new(graphic_height, graphic_height + params.section_gap / 4.0);

    let mut group = Group::new().set("class", DEBUG_GROUP_CLASS);

    let baseline = Line::new(Point2d::new(0.0, center.y), Point2d::new(graphic_width, center.y));
    group = group.add(svg_render_line(&baseline, &style));

    let total = i32::try_from(total_seats).map_err(|_| RenderError::InvalidLayout(format!("too many seats: {}", total_seats)))?;
    let sections = allocate(total, params.sections).map_err(|e| RenderError::InvalidLayout(e.to_string()))?;

    let mut boundaries = 0;
    let mut rows = 0;
    for section in &sections {
        let pack = RowPackParams::for_section(
            section,
            params.seat_radius,
            params.row_height,
            graphic_height,
            params.section_gap,
        );

        // Draw the boundary at the start of each section, and the end of the last one.
        let mut edges = vec![section.start_rad];
        if section.index == sections.len() - 1 {
            edges.push(section.end_rad);
        }
        for angle in edges {
            let edge = Point2d::on_upper_arc(&center, graphic_height, angle);
            group = group.add(svg_render_line(&Line::new(center, edge), &style));
            boundaries += 1;
        }

        let mut row = 0;
        while pack.row_radius(row) > 0.0 {
            let arcs = ArcSegment::split_upper(&center, pack.row_radius(row), section.start_rad, section.end_rad);
            if !arcs.is_empty() {
                group = group.add(svg_render_arcs(&arcs, &style));
                rows += 1;
            }
            row += 1;
        }
    }

    log::debug!(
        "render_guides(): {} section boundaries, {} row arcs",
        boundaries,
        rows
    );
    Ok(group)
}
