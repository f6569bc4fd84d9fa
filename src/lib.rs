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

//! # Hemicycle
//!
//! `hemicycle` computes the seat layout of a semicircular "parliament chart" from a list of
//! per-party seat counts.
//!
//! Seats are placed on concentric arcs of the upper semicircle. Angle 0 in radians is the
//! rightmost point of the chart, and the angle increases counter-clockwise to π at the leftmost
//! point. The chart is split into angular sections separated by a configurable gap, and each
//! section is filled with rows from the outer radius inward.
//!
//! The layout is built as a pipeline of pure stages:
//!
//! - [layout::sections] divides the total seat count between the sections.
//! - [layout::rows] packs one section's seats into rows.
//! - [layout::assemble] runs the two stages above and returns one angle-ordered point list.
//! - [layout::leveling] tags each seat as a leveling (compensatory) or district seat.
//! - [layout::chart] ties parties, configuration and points together.
//!
//! Rendering is left to helper crates. The `hemicycle_svg` crate turns a positioned layout into
//! an SVG document.

pub mod layout;
pub mod party;
pub mod types;

use thiserror::Error;

/// Default width of a chart graphic, in the same units as the seat radius.
pub const DEFAULT_GRAPHIC_WIDTH: f64 = 860.0;

#[allow(unused)]
pub type HemiHashMap<K, V, S = std::hash::RandomState> = std::collections::HashMap<K, V, S>;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("Invalid layout configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Seat references party '{0}' which is not in the party list")]
    PartyLookup(String),
}

pub mod prelude {
    pub use crate::{
        layout::{
            assemble::{assemble, Assembly},
            chart::{ChartConfig, ParliamentChart, PositionedLayout, PositionedSeat, SeatLayout},
            leveling::annotate,
            rows::{pack_section, PlacedPoint, RowPackParams},
            sections::{allocate, Section},
            LayoutParams,
        },
        party::{expand_seats, Party, Seat, SeatSlot},
        types::{
            color::SeatColor,
            geometry::{ArcSegment, Line, Point2d, Rect},
        },
        LayoutError,
        DEFAULT_GRAPHIC_WIDTH,
    };
}
