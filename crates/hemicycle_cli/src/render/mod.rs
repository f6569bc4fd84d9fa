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
use anyhow::{bail, Context, Error};
use hemicycle::prelude::*;
use hemicycle_svg::prelude::*;

use crate::{
    args::{GlobalOptions, SvgParams},
    chamber::{load_chamber, Chamber},
};

pub(crate) fn run(global: &GlobalOptions, params: &SvgParams) -> Result<(), Error> {
    let mut chamber = load_chamber(&params.in_file)?;
    chamber.apply_overrides(&params.overrides);

    let document = render_chamber(&chamber, params.debug, params.highlight.as_deref())?;
    svg::save(&params.out_file, &document)
        .with_context(|| format!("Failed to write SVG to {}", params.out_file.display()))?;

    if !global.silent {
        println!(
            "Wrote chart of {} seats to {}",
            chamber.total_seats(),
            params.out_file.display()
        );
    }
    Ok(())
}

pub(crate) fn render_chamber(chamber: &Chamber, debug: bool, highlight: Option<&str>) -> Result<svg::Document, Error> {
    let chart = chamber.chart()?;

    let positioned = match chart.layout()? {
        SeatLayout::Positioned(positioned) => positioned,
        SeatLayout::Unpositioned(seats) if seats.is_empty() => bail!("Chamber has no seats to render"),
        SeatLayout::Unpositioned(_) => bail!("Chart width must be greater than 0 to render"),
    };

    if !positioned.is_complete() {
        log::warn!(
            "render_chamber(): {} seats did not fit and will be missing from the chart",
            positioned.unplaced.len()
        );
    }

    let mut renderer = SvgRenderer::new()
        .with_party_styles(chamber.party_styles())
        .with_debug_guides(debug);

    if let Some(code) = highlight {
        if !chamber.parties.iter().any(|p| p.code == code) {
            log::warn!("render_chamber(): highlighted party '{}' is not in the chamber", code);
        }
        renderer = renderer.with_highlight(code);
    }

    Ok(renderer.render(&positioned)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{args::LayoutOverrides, chamber::parse_chamber};

    const CHAMBER: &str = r##"
[[party]]
code = "A"
seats = 4
leveling = 1
color = "#112233"

[[party]]
code = "B"
seats = 2
"##;

    #[test]
    fn test_render_chamber() {
        let chamber = parse_chamber(CHAMBER).unwrap();
        let text = render_chamber(&chamber, false, None).unwrap().to_string();

        assert_eq!(text.matches("<circle").count(), 6);
        assert_eq!(text.matches("fill=\"#112233\"").count(), 4);
        assert_eq!(text.matches("fill=\"#AAAAAA\"").count(), 2);
    }

    #[test]
    fn test_render_highlight() {
        let chamber = parse_chamber(CHAMBER).unwrap();
        let text = render_chamber(&chamber, true, Some("A")).unwrap().to_string();

        assert_eq!(text.matches("fill=\"#000000\"").count(), 4);
        assert!(text.contains("class=\"debug\""));
    }

    #[test]
    fn test_zero_width_is_an_error() {
        let mut chamber = parse_chamber(CHAMBER).unwrap();
        chamber.apply_overrides(&LayoutOverrides {
            width: Some(0.0),
            ..Default::default()
        });
        assert!(render_chamber(&chamber, false, None).is_err());
    }

    #[test]
    fn test_run_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let in_file = dir.path().join("chamber.toml");
        let out_file = dir.path().join("chart.svg");
        std::fs::write(&in_file, CHAMBER).unwrap();

        let params = SvgParams {
            in_file,
            out_file: out_file.clone(),
            debug: false,
            highlight: None,
            overrides: LayoutOverrides::default(),
        };
        run(&GlobalOptions { silent: true }, &params).unwrap();

        let written = std::fs::read_to_string(&out_file).unwrap();
        assert_eq!(written.matches("<circle").count(), 6);
    }
}
