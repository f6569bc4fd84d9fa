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

    src/party.rs

    Party definitions and expansion of party seat totals into individual seats.
*/

/// A [Party] describes one party's result: how many seats it won, and how many of those seats
/// are leveling (compensatory) seats.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Party {
    /// The party code, used as the party's identity throughout the layout.
    pub code: String,
    /// Total number of seats won by the party.
    pub seats: u32,
    /// Number of leveling seats among `seats`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub leveling: u32,
}

impl Party {
    pub fn new(code: impl Into<String>, seats: u32, leveling: u32) -> Party {
        Party {
            code: code.into(),
            seats,
            leveling,
        }
    }
}

/// A [SeatSlot] is one unannotated seat in party-grouped order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatSlot {
    /// Position of the seat in party-grouped order. This is the seat's stable identity.
    pub index: usize,
    pub party: String,
}

/// A [Seat] is a [SeatSlot] that has been tagged by the leveling annotator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seat {
    pub index: usize,
    pub party: String,
    pub leveling: bool,
}

/// Expand a list of parties into individual seats. Each party's seats are emitted
/// consecutively, in the order the parties were supplied. Parties without seats emit nothing.
pub fn expand_seats(parties: &[Party]) -> Vec<SeatSlot> {
    let total: usize = parties.iter().map(|p| p.seats as usize).sum();
    let mut slots = Vec::with_capacity(total);

    for party in parties {
        for _ in 0..party.seats {
            slots.push(SeatSlot {
                index: slots.len(),
                party: party.code.clone(),
            });
        }
    }

    log::debug!("expand_seats(): {} parties expanded to {} seats", parties.len(), slots.len());
    slots
}
