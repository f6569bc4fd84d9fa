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

    src/layout/chart.rs

    An immutable parliament chart: parties, configuration, and the seat layout computed
    from them.
*/

//! A [ParliamentChart] holds everything needed to lay out a chart: the parties, the graphic
//! width, and the [LayoutParams]. It never changes once built. Changing any input means
//! building a new chart with [ParliamentChart::reconfigure] or
//! [ParliamentChart::with_parties].
//!
//! Layouts are returned as a [SeatLayout], which records whether the seats have been given
//! coordinates. A positioned layout passed back to [ParliamentChart::ensure_positioned] is
//! returned as-is; [ParliamentChart::refresh] always recomputes.

use crate::{
    layout::{assemble::assemble, leveling::annotate, validate_width, LayoutParams},
    party::{expand_seats, Party, Seat},
    types::{Point2d, Rect},
    LayoutError,
    DEFAULT_GRAPHIC_WIDTH,
};

/// Complete configuration of a chart.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Width of the graphic. A width of 0 means the width is not yet known, and layouts will
    /// be left unpositioned.
    pub width: f64,
    pub params: LayoutParams,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRAPHIC_WIDTH,
            params: LayoutParams::default(),
        }
    }
}

impl ChartConfig {
    pub fn new(width: f64, params: LayoutParams) -> Self {
        Self { width, params }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        self.params.validate()?;
        validate_width(self.width)
    }
}

/// A [PositionedSeat] is an annotated seat with its position on the chart.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedSeat {
    pub seat:  Seat,
    pub point: Point2d<f64>,
}

impl PositionedSeat {
    #[inline]
    pub fn party(&self) -> &str {
        &self.seat.party
    }

    #[inline]
    pub fn is_leveling(&self) -> bool {
        self.seat.leveling
    }
}

/// Seats that have been given coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedLayout {
    /// Placed seats, in display order.
    pub seats: Vec<PositionedSeat>,
    /// Seats that did not fit on the chart, in party-grouped order.
    pub unplaced: Vec<Seat>,
    /// The configuration the seats were positioned with.
    pub config: ChartConfig,
}

impl PositionedLayout {
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Whether every seat found a place on the chart.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Iterate over all placed seats of one party.
    pub fn party_seats<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a PositionedSeat> + 'a {
        self.seats.iter().filter(move |s| s.party() == code)
    }

    /// Return the smallest rectangle enclosing every drawn seat, or `None` if there are none.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        Rect::enclosing_circles(self.seats.iter().map(|s| &s.point), self.config.params.seat_radius)
    }

    /// All seats, placed or not, in party-grouped order.
    fn all_seats(&self) -> Vec<Seat> {
        let mut seats: Vec<Seat> = self.seats.iter().map(|s| s.seat.clone()).collect();
        seats.extend(self.unplaced.iter().cloned());
        seats.sort_by_key(|s| s.index);
        seats
    }
}

/// A chart layout, either waiting for coordinates or positioned.
#[derive(Clone, Debug, PartialEq)]
pub enum SeatLayout {
    /// Annotated seats in party-grouped order, without coordinates.
    Unpositioned(Vec<Seat>),
    Positioned(PositionedLayout),
}

impl SeatLayout {
    pub fn is_positioned(&self) -> bool {
        matches!(self, SeatLayout::Positioned(_))
    }

    pub fn as_positioned(&self) -> Option<&PositionedLayout> {
        match self {
            SeatLayout::Positioned(layout) => Some(layout),
            SeatLayout::Unpositioned(_) => None,
        }
    }

    /// Number of seats in the layout, placed or not.
    pub fn seat_count(&self) -> usize {
        match self {
            SeatLayout::Unpositioned(seats) => seats.len(),
            SeatLayout::Positioned(layout) => layout.seats.len() + layout.unplaced.len(),
        }
    }

    fn into_seats(self) -> Vec<Seat> {
        match self {
            SeatLayout::Unpositioned(seats) => seats,
            SeatLayout::Positioned(layout) => layout.all_seats(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParliamentChart {
    parties: Vec<Party>,
    seats:   Vec<Seat>,
    config:  ChartConfig,
}

impl ParliamentChart {
    /// Build a chart from a list of parties. Seats are expanded and annotated immediately, so an
    /// inconsistent party list is reported here rather than at layout time.
    pub fn new(parties: Vec<Party>, config: ChartConfig) -> Result<ParliamentChart, LayoutError> {
        config.validate()?;
        let seats = annotate(&expand_seats(&parties), &parties)?;
        Ok(ParliamentChart { parties, seats, config })
    }

    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Return a new chart with the same parties and a new configuration.
    pub fn reconfigure(&self, config: ChartConfig) -> Result<ParliamentChart, LayoutError> {
        config.validate()?;
        Ok(ParliamentChart {
            parties: self.parties.clone(),
            seats: self.seats.clone(),
            config,
        })
    }

    /// Return a new chart with the same configuration and a new set of parties.
    pub fn with_parties(&self, parties: Vec<Party>) -> Result<ParliamentChart, LayoutError> {
        ParliamentChart::new(parties, self.config)
    }

    /// Lay out the chart's seats.
    ///
    /// If the width is 0 or there are no seats, the seats are returned unpositioned.
    pub fn layout(&self) -> Result<SeatLayout, LayoutError> {
        self.position(self.seats.clone())
    }

    /// Position `layout` if it is not positioned yet. A positioned layout is returned unchanged.
    pub fn ensure_positioned(&self, layout: SeatLayout) -> Result<SeatLayout, LayoutError> {
        match layout {
            SeatLayout::Positioned(_) => {
                log::trace!("ensure_positioned(): layout already positioned, skipping");
                Ok(layout)
            }
            SeatLayout::Unpositioned(seats) => self.position(seats),
        }
    }

    /// Recompute positions for the seats in `layout` using this chart's configuration.
    pub fn refresh(&self, layout: SeatLayout) -> Result<SeatLayout, LayoutError> {
        self.position(layout.into_seats())
    }

    fn position(&self, seats: Vec<Seat>) -> Result<SeatLayout, LayoutError> {
        if self.config.width <= 0.0 || seats.is_empty() {
            log::debug!(
                "position(): deferring layout of {} seats at width {}",
                seats.len(),
                self.config.width
            );
            return Ok(SeatLayout::Unpositioned(seats));
        }

        let total = i32::try_from(seats.len())
            .map_err(|_| LayoutError::InvalidConfiguration(format!("too many seats: {}", seats.len())))?;
        let points = assemble(total, &self.config.params, self.config.width)?.into_points();

        // Seat i in party-grouped order takes point i in display order.
        let mut seats = seats.into_iter();
        let placed: Vec<PositionedSeat> = seats
            .by_ref()
            .zip(points)
            .map(|(seat, point)| PositionedSeat { seat, point })
            .collect();
        let unplaced: Vec<Seat> = seats.collect();

        Ok(SeatLayout::Positioned(PositionedLayout {
            seats: placed,
            unplaced,
            config: self.config,
        }))
    }
}
