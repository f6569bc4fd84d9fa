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

    crates/hemicycle_svg/src/renderer.rs

    Builder-style SVG renderer for positioned parliament charts.
*/

use hemicycle::prelude::{PositionedLayout, PositionedSeat, SeatColor};
use svg::{node::element::Group, Document};

use crate::{
    guides::render_guides,
    render_elements::{svg_render_seat, SeatPaint},
    styles::{PartyStyles, SeatStyle},
    RenderError,
    CHART_GROUP_CLASS,
};

#[derive(Clone, Debug)]
pub struct SvgRenderer {
    // Width of the document. If not set, the width the layout was computed for is used.
    width: Option<f64>,
    // Height of the document. If not set, it is derived from the width and layout parameters.
    height: Option<f64>,
    // Per-party seat styles, keyed by party code.
    party_styles: PartyStyles,
    // Style for seats of parties missing from `party_styles`.
    default_style: SeatStyle,
    // Outline color and width applied to leveling seats.
    leveling_stroke: (SeatColor, f64),
    // Seats of this party are filled black.
    highlight: Option<String>,
    // Whether to draw the baseline, section boundaries and row arcs under the seats.
    debug_guides: bool,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            party_styles: PartyStyles::new(),
            default_style: SeatStyle::default(),
            leveling_stroke: (SeatColor::BLACK, 1.0),
            highlight: None,
            debug_guides: false,
        }
    }
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the width of the document.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the height of the document. By default the height is half the width, plus enough
    /// room below the baseline for the lowest seats.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the styles seats are drawn with, keyed by party code.
    pub fn with_party_styles(mut self, styles: PartyStyles) -> Self {
        self.party_styles = styles;
        self
    }

    /// Set the style for seats whose party has no entry in the party styles. The default fills
    /// seats with `#AAAAAA`.
    pub fn with_default_style(mut self, style: SeatStyle) -> Self {
        self.default_style = style;
        self
    }

    /// Set the outline drawn around leveling seats. The default is a black outline 1 unit wide.
    pub fn with_leveling_stroke(mut self, color: SeatColor, width: f64) -> Self {
        self.leveling_stroke = (color, width);
        self
    }

    /// Fill every seat of the party with code `party` black.
    pub fn with_highlight(mut self, party: impl Into<String>) -> Self {
        self.highlight = Some(party.into());
        self
    }

    pub fn with_debug_guides(mut self, state: bool) -> Self {
        self.debug_guides = state;
        self
    }

    fn view_box(&self, layout: &PositionedLayout) -> Result<(f64, f64), RenderError> {
        let params = &layout.config.params;
        let width = self.width.unwrap_or(layout.config.width);
        let height = self
            .height
            .unwrap_or(width / 2.0 + params.section_gap / 4.0 + params.seat_radius);

        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(RenderError::InvalidViewBox(width, height));
        }
        Ok((width, height))
    }

    fn check_styles(&self) -> Result<(), RenderError> {
        let widths = std::iter::once(("leveling stroke", self.leveling_stroke.1))
            .chain(std::iter::once(("default style", self.default_style.stroke_width)))
            .chain(self.party_styles.values().map(|s| ("party style", s.stroke_width)));

        for (name, width) in widths {
            if !width.is_finite() || width < 0.0 {
                return Err(RenderError::InvalidStyle(format!("{} width {}", name, width)));
            }
        }
        Ok(())
    }

    /// Resolve the fill and outline of a single seat.
    pub(crate) fn seat_paint(&self, seat: &PositionedSeat) -> SeatPaint {
        let style = self.party_styles.get(seat.party()).unwrap_or(&self.default_style);

        let fill = match &self.highlight {
            Some(code) if code == seat.party() => SeatColor::BLACK,
            _ => style.fill,
        };

        let (stroke, stroke_width) = if seat.is_leveling() {
            self.leveling_stroke
        }
        else {
            (style.stroke, style.stroke_width)
        };

        SeatPaint {
            fill,
            stroke,
            stroke_width,
        }
    }

    /// Render `layout` into a new SVG document. Seats and guides are drawn with the parameters
    /// the layout was computed with.
    pub fn render(&self, layout: &PositionedLayout) -> Result<Document, RenderError> {
        let params = &layout.config.params;
        params
            .validate()
            .map_err(|e| RenderError::InvalidLayout(e.to_string()))?;
        self.check_styles()?;
        let (width, height) = self.view_box(layout)?;

        log::trace!(
            "render(): rendering {} seats into a {}x{} document",
            layout.len(),
            width,
            height
        );

        let mut group = Group::new().set("class", CHART_GROUP_CLASS);

        if self.debug_guides {
            let total = layout.len() + layout.unplaced.len();
            group = group.add(render_guides(total, params, layout.config.width)?);
        }

        for seat in &layout.seats {
            group = group.add(svg_render_seat(seat, params.seat_radius, &self.seat_paint(seat)));
        }

        if !layout.is_complete() {
            log::warn!(
                "render(): {} seats did not fit the chart and were not drawn",
                layout.unplaced.len()
            );
        }

        Ok(Document::new()
            .set("viewBox", (0.0, 0.0, width, height))
            .set("width", width)
            .set("height", height)
            .add(group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::party_fills;
    use hemicycle::prelude::*;

    fn chart() -> ParliamentChart {
        let parties = vec![Party::new("A", 5, 2), Party::new("B", 3, 0), Party::new("C", 2, 1)];
        ParliamentChart::new(parties, ChartConfig::default()).unwrap()
    }

    fn positioned(chart: &ParliamentChart) -> PositionedLayout {
        match chart.layout().unwrap() {
            SeatLayout::Positioned(layout) => layout,
            SeatLayout::Unpositioned(_) => panic!("layout was not positioned"),
        }
    }

    #[test]
    fn test_render_one_circle_per_seat() {
        let chart = chart();
        let layout = positioned(&chart);
        let doc = SvgRenderer::new().render(&layout).unwrap();
        let text = doc.to_string();

        assert_eq!(text.matches("<circle").count(), 10);
        assert_eq!(text.matches("party=\"A\"").count(), 5);
        assert!(text.contains("class=\"parliament-chart\""));
        assert!(text.contains("id=\"A_0\""));
        assert!(text.contains("id=\"C_9\""));
        assert!(!text.contains("class=\"debug\""));
    }

    #[test]
    fn test_seat_paint() {
        let chart = chart();
        let layout = positioned(&chart);
        let renderer = SvgRenderer::new().with_party_styles(party_fills([("A", SeatColor::from_rgb8(200, 0, 0))]));

        for seat in &layout.seats {
            let paint = renderer.seat_paint(seat);
            let expected_fill = if seat.party() == "A" {
                SeatColor::from_rgb8(200, 0, 0)
            }
            else {
                SeatColor::UNASSIGNED
            };
            assert_eq!(paint.fill, expected_fill);
            assert_eq!(paint.stroke, SeatColor::BLACK);
            assert_eq!(paint.stroke_width, if seat.is_leveling() { 1.0 } else { 0.0 });
        }
    }

    #[test]
    fn test_highlight() {
        let chart = chart();
        let layout = positioned(&chart);
        let renderer = SvgRenderer::new().with_highlight("B");

        for seat in &layout.seats {
            let paint = renderer.seat_paint(seat);
            if seat.party() == "B" {
                assert_eq!(paint.fill, SeatColor::BLACK);
            }
            else {
                assert_eq!(paint.fill, SeatColor::UNASSIGNED);
            }
        }
    }

    #[test]
    fn test_debug_guides() {
        let chart = chart();
        let layout = positioned(&chart);
        let doc = SvgRenderer::new()
            .with_debug_guides(true)
            .render(&layout)
            .unwrap();
        let text = doc.to_string();

        assert!(text.contains("class=\"debug\""));
        assert!(text.matches("<path").count() > 3);
        assert_eq!(text.matches("<circle").count(), 10);
    }

    #[test]
    fn test_seat_radius_from_layout() {
        let config = ChartConfig {
            params: LayoutParams::default().with_seat_radius(7.0),
            ..ChartConfig::default()
        };
        let chart = ParliamentChart::new(vec![Party::new("A", 4, 0)], config).unwrap();
        let layout = positioned(&chart);
        let text = SvgRenderer::new().render(&layout).unwrap().to_string();

        assert_eq!(text.matches("r=\"7\"").count(), 4);
    }

    #[test]
    fn test_invalid_view_box() {
        let chart = chart();
        let layout = positioned(&chart);
        let result = SvgRenderer::new()
            .with_height(0.0)
            .render(&layout);
        assert!(matches!(result, Err(RenderError::InvalidViewBox(_, _))));
    }

    #[test]
    fn test_invalid_leveling_stroke() {
        let chart = chart();
        let layout = positioned(&chart);
        let result = SvgRenderer::new()
            .with_leveling_stroke(SeatColor::BLACK, -1.0)
            .render(&layout);
        assert!(matches!(result, Err(RenderError::InvalidStyle(_))));
    }
}
