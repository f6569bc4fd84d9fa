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
use std::io::Write;

use anyhow::Error;
use hemicycle::prelude::*;

use crate::{
    args::{ChamberParams, GlobalOptions},
    chamber::load_chamber,
};

pub(crate) fn run(global: &GlobalOptions, params: &ChamberParams) -> Result<(), Error> {
    let mut chamber = load_chamber(&params.in_file)?;
    chamber.apply_overrides(&params.overrides);

    let chart = chamber.chart()?;
    let layout = chart.layout()?;

    write_layout(&mut std::io::stdout().lock(), &layout)?;

    if !global.silent {
        match &layout {
            SeatLayout::Unpositioned(_) => {
                eprintln!("Warning: chart width is 0, seats were not positioned");
            }
            SeatLayout::Positioned(positioned) => {
                if let Some(bounds) = positioned.bounds() {
                    eprintln!(
                        "Seats occupy {:.1}x{:.1} of a {} wide chart",
                        bounds.width(),
                        bounds.height(),
                        positioned.config.width
                    );
                }
                if !positioned.is_complete() {
                    eprintln!(
                        "Warning: {} of {} seats did not fit the chart",
                        positioned.unplaced.len(),
                        layout.seat_count()
                    );
                }
            }
        }
    }
    Ok(())
}

/// Write one line per seat: `index party leveling x y`. Seats are written in display order.
/// Seats without a position are written with `-` in place of coordinates.
pub(crate) fn write_layout(out: &mut impl Write, layout: &SeatLayout) -> Result<(), Error> {
    match layout {
        SeatLayout::Unpositioned(seats) => {
            for seat in seats {
                writeln!(out, "{} {} {} - -", seat.index, seat.party, seat.leveling)?;
            }
        }
        SeatLayout::Positioned(positioned) => {
            for ps in &positioned.seats {
                writeln!(
                    out,
                    "{} {} {} {:.3} {:.3}",
                    ps.seat.index,
                    ps.party(),
                    ps.is_leveling(),
                    ps.point.x,
                    ps.point.y
                )?;
            }
            for seat in &positioned.unplaced {
                writeln!(out, "{} {} {} - -", seat.index, seat.party, seat.leveling)?;
            }
        }
    }
    Ok(())
}
