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

    crates/hemicycle_cli/src/chamber.rs

    Loading of TOML chamber description files.
*/

//! A chamber file lists the parties of a parliament and optionally the chart layout:
//!
//! ```toml
//! [layout]
//! width = 860
//! sections = 2
//!
//! [[party]]
//! code = "AP"
//! seats = 48
//! color = "#E4202C"
//!
//! [[party]]
//! code = "SV"
//! seats = 13
//! leveling = 10
//! color = [235, 76, 86, 255]
//! ```

use std::{fs, path::Path};

use anyhow::{anyhow, bail, Context, Error};
use hemicycle::{prelude::*, HemiHashMap};
use hemicycle_svg::{prelude::PartyStyles, styles::party_fills};
use serde::Deserialize;

use crate::args::LayoutOverrides;

// Deserialize colors as either a hex string or an RGBA tuple
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ConfigColor {
    Hex(String),
    Rgba([u8; 4]),
}

impl ConfigColor {
    fn to_seat_color(&self) -> Result<SeatColor, Error> {
        match self {
            ConfigColor::Hex(s) => s.parse::<SeatColor>().map_err(|e| anyhow!(e)),
            ConfigColor::Rgba(rgba) => Ok(SeatColor::from(*rgba)),
        }
    }
}

// Optional layout fields
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayoutTableInput {
    width: Option<f64>,
    sections: Option<i32>,
    section_gap: Option<f64>,
    seat_radius: Option<f64>,
    row_height: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PartyInput {
    code: String,
    seats: u32,
    #[serde(default)]
    leveling: u32,
    color: Option<ConfigColor>,
}

#[derive(Debug, Deserialize)]
struct ChamberFileInput {
    #[serde(default)]
    layout: LayoutTableInput,
    #[serde(default, rename = "party")]
    parties: Vec<PartyInput>,
}

/// A parsed chamber file.
#[derive(Clone, Debug)]
pub struct Chamber {
    pub parties: Vec<Party>,
    pub colors:  HemiHashMap<String, SeatColor>,
    pub config:  ChartConfig,
}

impl Chamber {
    /// Replace configuration values with any that were given on the command line.
    pub fn apply_overrides(&mut self, overrides: &LayoutOverrides) {
        let config = &mut self.config;
        if let Some(width) = overrides.width {
            config.width = width;
        }
        if let Some(sections) = overrides.sections {
            config.params.sections = sections;
        }
        if let Some(gap) = overrides.section_gap {
            config.params.section_gap = gap;
        }
        if let Some(radius) = overrides.seat_radius {
            config.params.seat_radius = radius;
        }
        if let Some(height) = overrides.row_height {
            config.params.row_height = height;
        }
    }

    /// Total seats over all parties. Summed as `u64`, so no chamber file can overflow it.
    pub fn total_seats(&self) -> u64 {
        self.parties.iter().map(|p| u64::from(p.seats)).sum()
    }

    /// Build the chart described by this chamber.
    pub fn chart(&self) -> Result<ParliamentChart, Error> {
        ParliamentChart::new(self.parties.clone(), self.config).context("Invalid chamber configuration")
    }

    /// Return seat styles for every party with a color.
    pub fn party_styles(&self) -> PartyStyles {
        party_fills(self.colors.iter().map(|(code, color)| (code.as_str(), *color)))
    }
}

pub fn parse_chamber(text: &str) -> Result<Chamber, Error> {
    let input: ChamberFileInput = toml::from_str(text)?;

    if input.parties.is_empty() {
        bail!("Chamber file defines no parties");
    }

    let mut parties = Vec::with_capacity(input.parties.len());
    let mut colors = HemiHashMap::new();

    for entry in input.parties {
        if parties.iter().any(|p: &Party| p.code == entry.code) {
            bail!("Party '{}' is defined more than once", entry.code);
        }
        if entry.leveling > entry.seats {
            log::warn!(
                "parse_chamber(): party '{}' has {} leveling seats but only {} seats",
                entry.code,
                entry.leveling,
                entry.seats
            );
        }
        if let Some(color) = &entry.color {
            let color = color
                .to_seat_color()
                .with_context(|| format!("Invalid color for party '{}'", entry.code))?;
            colors.insert(entry.code.clone(), color);
        }
        parties.push(Party::new(entry.code, entry.seats, entry.leveling));
    }

    let defaults = ChartConfig::default();
    let layout = input.layout;
    let config = ChartConfig {
        width: layout.width.unwrap_or(defaults.width),
        params: LayoutParams {
            sections: layout.sections.unwrap_or(defaults.params.sections),
            section_gap: layout.section_gap.unwrap_or(defaults.params.section_gap),
            seat_radius: layout.seat_radius.unwrap_or(defaults.params.seat_radius),
            row_height: layout.row_height.unwrap_or(defaults.params.row_height),
        },
    };

    log::debug!(
        "parse_chamber(): {} parties, {} colors, config {:?}",
        parties.len(),
        colors.len(),
        config
    );

    Ok(Chamber { parties, colors, config })
}

pub fn load_chamber(path: impl AsRef<Path>) -> Result<Chamber, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read chamber file {}", path.display()))?;
    parse_chamber(&text).with_context(|| format!("Failed to parse chamber file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CHAMBER: &str = r##"
[layout]
width = 1000
sections = 3

[[party]]
code = "A"
seats = 5
leveling = 2
color = "#FF0000"

[[party]]
code = "B"
seats = 3
color = [0, 0, 255, 128]

[[party]]
code = "C"
seats = 1
"##;

    #[test]
    fn test_parse_chamber() {
        let chamber = parse_chamber(CHAMBER).unwrap();

        assert_eq!(
            chamber.parties,
            vec![Party::new("A", 5, 2), Party::new("B", 3, 0), Party::new("C", 1, 0)]
        );
        assert_eq!(chamber.total_seats(), 9);
        assert_eq!(chamber.colors["A"], SeatColor::from_rgb8(255, 0, 0));
        assert_eq!(chamber.colors["B"], SeatColor::from_rgba8(0, 0, 255, 128));
        assert!(!chamber.colors.contains_key("C"));

        assert_eq!(chamber.config.width, 1000.0);
        assert_eq!(chamber.config.params.sections, 3);
        assert_eq!(chamber.config.params.seat_radius, 12.0);
    }

    #[test]
    fn test_overrides() {
        let mut chamber = parse_chamber(CHAMBER).unwrap();
        chamber.apply_overrides(&LayoutOverrides {
            width: Some(500.0),
            row_height: Some(30.0),
            ..Default::default()
        });
        assert_eq!(chamber.config.width, 500.0);
        assert_eq!(chamber.config.params.row_height, 30.0);
        assert_eq!(chamber.config.params.sections, 3);
    }

    #[test]
    fn test_defaults_without_layout_table() {
        let chamber = parse_chamber("[[party]]\ncode = \"X\"\nseats = 2\n").unwrap();
        assert_eq!(chamber.config, ChartConfig::default());
    }

    #[test]
    fn test_total_seats_past_u32() {
        let chamber = parse_chamber("[[party]]\ncode = \"X\"\nseats = 4294967295\n[[party]]\ncode = \"Y\"\nseats = 2\n").unwrap();
        assert_eq!(chamber.total_seats(), u64::from(u32::MAX) + 2);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse_chamber("").is_err());
        assert!(parse_chamber("[[party]]\ncode = \"X\"\nseats = 1\n[[party]]\ncode = \"X\"\nseats = 2\n").is_err());
        assert!(parse_chamber("[[party]]\ncode = \"X\"\nseats = 1\ncolor = \"red\"\n").is_err());
        assert!(parse_chamber("[layout]\nwidht = 3\n[[party]]\ncode = \"X\"\nseats = 1\n").is_err());
    }

    #[test]
    fn test_load_chamber_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CHAMBER.as_bytes()).unwrap();

        let chamber = load_chamber(file.path()).unwrap();
        assert_eq!(chamber.parties.len(), 3);
        assert!(load_chamber(file.path().with_extension("missing")).is_err());
    }
}
