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

use anyhow::{Context, Error};
use hemicycle::prelude::*;

use crate::{
    args::{ChamberParams, GlobalOptions},
    chamber::load_chamber,
};

pub(crate) fn run(global: &GlobalOptions, params: &ChamberParams) -> Result<(), Error> {
    let mut chamber = load_chamber(&params.in_file)?;
    chamber.apply_overrides(&params.overrides);

    let total = i32::try_from(chamber.total_seats()).context("Too many seats")?;
    let sections = allocate(total, chamber.config.params.sections)?;

    if !global.silent {
        println!(
            "{} seats in {} sections (requested {}):",
            total,
            sections.len(),
            chamber.config.params.sections
        );
        println!("{}", "-".repeat(40));
    }
    write_sections(&mut std::io::stdout().lock(), &sections)?;
    Ok(())
}

/// Write one row per section: index, seat count, and start and end angles in degrees.
pub(crate) fn write_sections(out: &mut impl Write, sections: &[Section]) -> Result<(), Error> {
    writeln!(out, "{:>5} {:>6} {:>9} {:>9}", "index", "seats", "start", "end")?;
    for section in sections {
        writeln!(
            out,
            "{:>5} {:>6} {:>8.2}° {:>8.2}°",
            section.index,
            section.seats,
            section.start_rad.to_degrees(),
            section.end_rad.to_degrees()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_sections() {
        let sections = allocate(10, 4).unwrap();
        let mut out = Vec::new();
        write_sections(&mut out, &sections).unwrap();
        let text = String::from_utf8(out).unwrap();
        let rows: Vec<Vec<&str>> = text.lines().skip(1).map(|l| l.split_whitespace().collect()).collect();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], ["1", "3", "45.00°", "90.00°"]);
        assert_eq!(rows[3], ["3", "2", "135.00°", "180.00°"]);
    }
}
