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
use bpaf::*;
use std::{
    fmt::{self, Display, Formatter},
    path::PathBuf,
};

#[derive(Clone, Debug)]
pub enum Command {
    Version,
    Layout(ChamberParams),
    Sections(ChamberParams),
    Svg(SvgParams),
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Command::Version => write!(f, "version"),
            Command::Layout(_) => write!(f, "layout"),
            Command::Sections(_) => write!(f, "sections"),
            Command::Svg(_) => write!(f, "svg"),
        }
    }
}

#[derive(Debug)]
pub struct AppParams {
    pub global: GlobalOptions,
    pub command: Command,
}

#[derive(Debug)]
pub struct GlobalOptions {
    pub silent: bool,
}

/// Command line values that take precedence over the chamber file's `[layout]` table.
#[derive(Clone, Debug, Default)]
pub struct LayoutOverrides {
    pub width: Option<f64>,
    pub sections: Option<i32>,
    pub section_gap: Option<f64>,
    pub seat_radius: Option<f64>,
    pub row_height: Option<f64>,
}

#[derive(Clone, Debug)]
pub struct ChamberParams {
    pub in_file: PathBuf,
    pub overrides: LayoutOverrides,
}

#[derive(Clone, Debug)]
pub struct SvgParams {
    pub in_file: PathBuf,
    pub out_file: PathBuf,
    pub debug: bool,
    pub highlight: Option<String>,
    pub overrides: LayoutOverrides,
}

pub fn global_options_parser() -> impl Parser<GlobalOptions> {
    let silent = long("silent")
        .help("Suppress all output except required output")
        .switch();

    construct!(GlobalOptions { silent })
}

pub(crate) fn in_file_parser() -> impl Parser<PathBuf> {
    long("in_file")
        .short('i')
        .argument::<PathBuf>("IN_FILE")
        .help("Path to the chamber description file")
}

pub(crate) fn out_file_parser() -> impl Parser<PathBuf> {
    long("out_file")
        .short('o')
        .argument::<PathBuf>("OUT_FILE")
        .help("Path to the output file")
}

pub(crate) fn overrides_parser() -> impl Parser<LayoutOverrides> {
    let width = long("width")
        .argument::<f64>("WIDTH")
        .help("Width of the chart graphic")
        .guard(|&w| w >= 0.0, "Width must not be negative")
        .optional();
    let sections = long("sections")
        .argument::<i32>("SECTIONS")
        .help("Number of angular sections")
        .guard(|&s| s > 0, "Sections must be positive")
        .optional();
    let section_gap = long("section-gap")
        .argument::<f64>("GAP")
        .help("Gap between adjacent sections")
        .optional();
    let seat_radius = long("seat-radius")
        .argument::<f64>("RADIUS")
        .help("Radius of a single seat")
        .optional();
    let row_height = long("row-height")
        .argument::<f64>("HEIGHT")
        .help("Distance between consecutive rows")
        .optional();

    construct!(LayoutOverrides {
        width,
        sections,
        section_gap,
        seat_radius,
        row_height
    })
}

fn chamber_parser() -> impl Parser<ChamberParams> {
    let in_file = in_file_parser();
    let overrides = overrides_parser();

    construct!(ChamberParams { in_file, overrides })
}

fn svg_parser() -> impl Parser<SvgParams> {
    let in_file = in_file_parser();
    let out_file = out_file_parser();
    let debug = long("debug")
        .help("Draw the baseline, section boundaries and row arcs")
        .switch();
    let highlight = long("highlight")
        .argument::<String>("CODE")
        .help("Fill the seats of the party with this code black")
        .optional();
    let overrides = overrides_parser();

    construct!(SvgParams {
        in_file,
        out_file,
        debug,
        highlight,
        overrides
    })
}

pub(crate) fn command_parser() -> impl Parser<AppParams> {
    let global = global_options_parser();

    let version = pure(Command::Version)
        .to_options()
        .command("version")
        .help("Display version information and exit");

    let layout = construct!(Command::Layout(chamber_parser()))
        .to_options()
        .command("layout")
        .help("Print the position of every seat");
    let sections = construct!(Command::Sections(chamber_parser()))
        .to_options()
        .command("sections")
        .help("Print how seats are divided between sections");
    let svg = construct!(Command::Svg(svg_parser()))
        .to_options()
        .command("svg")
        .help("Render the chart to an SVG file");

    let command = construct!([version, layout, sections, svg]);

    construct!(AppParams { global, command })
}
