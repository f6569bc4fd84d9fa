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

    crates/hemicycle_svg/src/lib.rs

    SVG output for hemicycle parliament charts.
*/

//! # hemicycle_svg
//!
//! Renders a positioned [hemicycle::layout::chart::PositionedLayout] as an SVG
//! [svg::Document].
//!
//! ```no_run
//! use hemicycle::prelude::*;
//! use hemicycle_svg::prelude::*;
//!
//! let parties = vec![Party::new("A", 80, 2), Party::new("B", 89, 4)];
//! let chart = ParliamentChart::new(parties, ChartConfig::default()).unwrap();
//! let layout = chart.layout().unwrap();
//! if let Some(positioned) = layout.as_positioned() {
//!     let document = SvgRenderer::new()
//!         .with_highlight("B")
//!         .render(positioned)
//!         .unwrap();
//!     svg::save("chart.svg", &document).unwrap();
//! }
//! ```

mod guides;
mod render_elements;
pub mod renderer;
pub mod styles;

use thiserror::Error;

/// CSS class of the group holding every drawn seat.
pub const CHART_GROUP_CLASS: &str = "parliament-chart";
/// CSS class of the group holding the debug guides.
pub const DEBUG_GROUP_CLASS: &str = "debug";

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("Invalid view box: {0}x{1}")]
    InvalidViewBox(f64, f64),
    #[error("Invalid style: {0}")]
    InvalidStyle(String),
    #[error("Layout cannot be rendered: {0}")]
    InvalidLayout(String),
}

pub mod prelude {
    pub use crate::{
        renderer::SvgRenderer,
        styles::{PartyStyles, SeatStyle},
        RenderError,
        CHART_GROUP_CLASS,
        DEBUG_GROUP_CLASS,
    };
}
