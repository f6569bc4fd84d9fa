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

    tests/common/mod.rs

    Common support routines for tests
*/
#![allow(dead_code)]

use hemicycle::prelude::*;

use hex::encode;
use sha1::{Digest, Sha1};

pub fn compute_slice_hash(slice: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(slice);
    let result = hasher.finalize();

    encode(result)
}

/// Hash the exact bit patterns of a list of points.
pub fn compute_points_hash(points: &[Point2d<f64>]) -> String {
    let mut bytes = Vec::with_capacity(points.len() * 16);
    for p in points {
        bytes.extend_from_slice(&p.x.to_le_bytes());
        bytes.extend_from_slice(&p.y.to_le_bytes());
    }
    compute_slice_hash(&bytes)
}

/// Parties of a 169 seat chamber.
pub fn storting() -> Vec<Party> {
    vec![
        Party::new("RØDT", 8, 5),
        Party::new("SV", 13, 10),
        Party::new("AP", 48, 0),
        Party::new("SP", 28, 0),
        Party::new("MDG", 3, 2),
        Party::new("KRF", 3, 2),
        Party::new("V", 8, 5),
        Party::new("H", 36, 1),
        Party::new("FRP", 21, 3),
        Party::new("PF", 1, 0),
    ]
}

pub fn positioned(layout: SeatLayout) -> PositionedLayout {
    match layout {
        SeatLayout::Positioned(layout) => layout,
        SeatLayout::Unpositioned(seats) => panic!("expected a positioned layout, got {} unpositioned seats", seats.len()),
    }
}

